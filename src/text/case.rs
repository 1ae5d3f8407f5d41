//! ASCII case conversion for null-terminated byte strings.
//!
//! Each function works in place on the text before the first null byte (or on the whole slice
//! if there is none). Bytes after the terminator and non-ASCII bytes are never changed.

use super::buf::c_len;

/// Converts every ASCII letter of the text to upper case.
///
/// # Examples
/// ```
/// # use ganylib::text::case::to_upper_case;
/// let mut bytes = *b"show version\0tail";
/// to_upper_case(&mut bytes);
/// assert_eq!(&bytes, b"SHOW VERSION\0tail");
/// ```
pub fn to_upper_case(bytes: &mut [u8]) {
    let len = c_len(bytes);
    bytes[..len].make_ascii_uppercase();
}

/// Converts every ASCII letter of the text to lower case.
pub fn to_lower_case(bytes: &mut [u8]) {
    let len = c_len(bytes);
    bytes[..len].make_ascii_lowercase();
}

/// Upper cases the first letter of every word and lower cases the rest. Words are separated by
/// anything that isn't an ASCII letter or digit.
///
/// # Examples
/// ```
/// # use ganylib::text::case::to_title_case;
/// let mut bytes = *b"gIGABIT ethernet0/1";
/// to_title_case(&mut bytes);
/// assert_eq!(&bytes, b"Gigabit Ethernet0/1");
/// ```
pub fn to_title_case(bytes: &mut [u8]) {
    let len = c_len(bytes);
    let mut word_start = true;
    for byte in &mut bytes[..len] {
        if word_start {
            byte.make_ascii_uppercase();
        } else {
            byte.make_ascii_lowercase();
        }
        word_start = !byte.is_ascii_alphanumeric();
    }
}
