use std::ops::Range;

use super::{c_len, span, RangeError};

/// The splice operations of [`TextBuf`](super::TextBuf), for owned [`String`]s.
///
/// A String grows as needed, so none of these methods can run out of capacity. Range handling is
/// the same as for TextBuf: the plain methods ignore invalid ranges, the `try_` methods report
/// them. Inserted text also ends at its first null byte, as it would in a TextBuf.
///
/// # Panics
/// Indices are byte offsets. Any method given an index that doesn't fall on a `char` boundary
/// panics, which can only happen for non-ASCII text.
pub trait SpliceExtension {
    /// See [`TextBuf::erase_from_length`](super::TextBuf::erase_from_length).
    fn erase_from_length(&mut self, from: usize, len: usize);

    /// See [`TextBuf::try_erase_from_length`](super::TextBuf::try_erase_from_length).
    fn try_erase_from_length(&mut self, from: usize, len: usize) -> Result<(), RangeError>;

    /// See [`TextBuf::erase_from_to`](super::TextBuf::erase_from_to).
    fn erase_from_to(&mut self, from: usize, to: usize);

    /// See [`TextBuf::try_erase_from_to`](super::TextBuf::try_erase_from_to).
    fn try_erase_from_to(&mut self, from: usize, to: usize) -> Result<(), RangeError>;

    /// Inserts `text` at `position`, which is clamped to the end of the String.
    ///
    /// # Examples
    /// ```
    /// # use ganylib::text::SpliceExtension;
    /// let mut s = String::from("Hello!");
    /// s.insert_at_position(", World", 5);
    /// assert_eq!(s, "Hello, World!");
    /// s.insert_at_position("?", 100);
    /// assert_eq!(s, "Hello, World!?");
    /// ```
    fn insert_at_position(&mut self, text: &str, position: usize);

    /// See [`TextBuf::replace_from_length`](super::TextBuf::replace_from_length).
    fn replace_from_length(&mut self, text: &str, from: usize, len: usize);

    /// See [`TextBuf::try_replace_from_length`](super::TextBuf::try_replace_from_length).
    fn try_replace_from_length(&mut self, text: &str, from: usize, len: usize) -> Result<(), RangeError>;

    /// See [`TextBuf::replace_from_to`](super::TextBuf::replace_from_to).
    fn replace_from_to(&mut self, text: &str, from: usize, to: usize);

    /// See [`TextBuf::try_replace_from_to`](super::TextBuf::try_replace_from_to).
    fn try_replace_from_to(&mut self, text: &str, from: usize, to: usize) -> Result<(), RangeError>;

    /// Returns a copy of `len` characters starting at `from`, or an empty String for an ignored
    /// range.
    ///
    /// # Examples
    /// ```
    /// # use ganylib::text::SpliceExtension;
    /// let s = String::from("Hello, World!");
    /// assert_eq!(s.text_part_from_length(7, 5), "World");
    /// assert_eq!(s.text_part_from_length(7, 50), "World!");
    /// assert_eq!(s.text_part_from_length(7, 0), "");
    /// ```
    fn text_part_from_length(&self, from: usize, len: usize) -> String;

    /// Returns a copy of `len` characters starting at `from`.
    ///
    /// # Errors
    /// Returns [`RangeError`] for the ranges ignored by
    /// [`text_part_from_length`](SpliceExtension::text_part_from_length).
    fn try_text_part_from_length(&self, from: usize, len: usize) -> Result<String, RangeError>;

    /// Returns a copy of the characters in `[from, to)`, or an empty String for an ignored range.
    fn text_part_from_to(&self, from: usize, to: usize) -> String;

    /// Returns a copy of the characters in `[from, to)`.
    ///
    /// # Errors
    /// Returns [`RangeError`] for the ranges ignored by
    /// [`text_part_from_to`](SpliceExtension::text_part_from_to).
    fn try_text_part_from_to(&self, from: usize, to: usize) -> Result<String, RangeError>;
}

impl SpliceExtension for String {
    fn erase_from_length(&mut self, from: usize, len: usize) {
        let _ = self.try_erase_from_length(from, len);
    }

    fn try_erase_from_length(&mut self, from: usize, len: usize) -> Result<(), RangeError> {
        let span = span::from_length(self.len(), from, len)?;
        self.replace_range(span, "");
        Ok(())
    }

    fn erase_from_to(&mut self, from: usize, to: usize) {
        let _ = self.try_erase_from_to(from, to);
    }

    fn try_erase_from_to(&mut self, from: usize, to: usize) -> Result<(), RangeError> {
        let span = span::from_to(self.len(), from, to)?;
        self.replace_range(span, "");
        Ok(())
    }

    fn insert_at_position(&mut self, text: &str, position: usize) {
        self.insert_str(span::position(self.len(), position), until_nul(text));
    }

    fn replace_from_length(&mut self, text: &str, from: usize, len: usize) {
        let span = span::from_length(self.len(), from, len)
            .unwrap_or_else(|_| empty_span(self.len(), from));
        self.replace_range(span, until_nul(text));
    }

    fn try_replace_from_length(&mut self, text: &str, from: usize, len: usize) -> Result<(), RangeError> {
        let span = span::from_length(self.len(), from, len)?;
        self.replace_range(span, until_nul(text));
        Ok(())
    }

    fn replace_from_to(&mut self, text: &str, from: usize, to: usize) {
        let span = span::from_to(self.len(), from, to)
            .unwrap_or_else(|_| empty_span(self.len(), from));
        self.replace_range(span, until_nul(text));
    }

    fn try_replace_from_to(&mut self, text: &str, from: usize, to: usize) -> Result<(), RangeError> {
        let span = span::from_to(self.len(), from, to)?;
        self.replace_range(span, until_nul(text));
        Ok(())
    }

    fn text_part_from_length(&self, from: usize, len: usize) -> String {
        self.try_text_part_from_length(from, len).unwrap_or_default()
    }

    fn try_text_part_from_length(&self, from: usize, len: usize) -> Result<String, RangeError> {
        Ok(self[span::from_length(self.len(), from, len)?].to_owned())
    }

    fn text_part_from_to(&self, from: usize, to: usize) -> String {
        self.try_text_part_from_to(from, to).unwrap_or_default()
    }

    fn try_text_part_from_to(&self, from: usize, to: usize) -> Result<String, RangeError> {
        Ok(self[span::from_to(self.len(), from, to)?].to_owned())
    }
}

const fn empty_span(len: usize, from: usize) -> Range<usize> {
    let at = span::position(len, from);
    at..at
}

fn until_nul(text: &str) -> &str {
    // A null byte is ASCII, so this always falls on a char boundary.
    &text[..c_len(text.as_bytes())]
}
