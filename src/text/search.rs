use super::{NullInputError, PatternNotFoundError, SearchError};

/// Finds the first occurrence of `pattern` within `source`, returning the byte index where it
/// starts.
///
/// Matching is byte-exact and the leftmost match wins. An empty pattern is found at index 0,
/// including in an empty source.
///
/// # Errors
/// Returns [`PatternNotFoundError`] if `pattern` doesn't occur in `source`, which is always the
/// case when it is longer than `source`.
///
/// # Examples
/// ```
/// # use ganylib::text::find;
/// assert_eq!(find(b"abcabc", b"ca"), Ok(2));
/// assert_eq!(find(b"abc", b""), Ok(0));
/// assert!(find(b"ab", b"abc").is_err());
/// ```
pub fn find(source: &[u8], pattern: &[u8]) -> Result<usize, PatternNotFoundError> {
    if pattern.is_empty() {
        return Ok(0);
    }
    if pattern.len() > source.len() {
        Err(PatternNotFoundError)?
    }

    source
        .windows(pattern.len())
        .position(|window| window == pattern)
        .ok_or(PatternNotFoundError)
}

/// Searches for `pattern` in `source`, where either may be absent.
///
/// # Errors
/// Returns [`SearchError::NullInput`] if either argument is [`None`], otherwise
/// [`SearchError::PatternNotFound`] under the same conditions as [`find`].
///
/// # Examples
/// ```
/// # use ganylib::text::search_pattern_in_string;
/// assert_eq!(search_pattern_in_string(Some("the quick brown fox"), Some("brown")), Ok(10));
/// assert!(search_pattern_in_string(Some("abc"), Some("xyz")).unwrap_err().is_pattern_not_found());
/// assert!(search_pattern_in_string(None, Some("xyz")).unwrap_err().is_null_input());
/// ```
pub fn search_pattern_in_string(source: Option<&str>, pattern: Option<&str>) -> Result<usize, SearchError> {
    let (Some(source), Some(pattern)) = (source, pattern) else {
        return Err(NullInputError.into());
    };
    Ok(find(source.as_bytes(), pattern.as_bytes())?)
}
