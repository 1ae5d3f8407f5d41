use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Range;
use std::str::{self, Utf8Error};

use super::{span, CapacityError, MissingTerminatorError, RangeError, SpliceError};
use crate::util::fmt::DebugRaw;
use crate::util::result::ResultExtension;

/// Returns the length of a null-terminated byte string, not counting the terminator. If the
/// slice contains no null byte, the whole slice is considered to be the string.
pub const fn c_len(bytes: &[u8]) -> usize {
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == 0 {
            return i;
        }
        i += 1;
    }
    bytes.len()
}

/// A null-terminated text buffer with a fixed capacity, backed by a caller-owned byte slice.
///
/// The capacity of a TextBuf is the length of the slice it borrows, so the longest text it can
/// hold is one byte shorter than that. Every operation keeps the text null-terminated and never
/// writes past the end of the slice. Bytes after the terminator are left as they are.
///
/// # Splicing
/// Splice operations come in two flavours:
/// - The plain methods silently do nothing (or produce empty output) when given an invalid
///   range, and panic if the buffer doesn't have enough capacity for the result.
/// - The `try_` methods validate their arguments first and return a [`RangeError`] or
///   [`CapacityError`] instead, leaving the buffer untouched.
///
/// Clamping is not an error in either flavour: a span that runs past the end of the text is cut
/// short at the end and an insertion point past the end is moved to the end.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The length of the text in the buffer.
/// - `i`: The index where the operation starts.
/// - `m`: The length of the text being inserted or extracted.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `erase_from_length` | `O(n-i)` |
/// | `erase_from_to` | `O(n-i)` |
/// | `insert_at_position` | `O(n-i+m)` |
/// | `replace_from_length` | `O(n-i+m)` |
/// | `replace_from_to` | `O(n-i+m)` |
/// | `text_part_from_length` | `O(m)` |
/// | `text_part_from_to` | `O(m)` |
pub struct TextBuf<'a> {
    bytes: &'a mut [u8],
    len: usize,
}

impl<'a> TextBuf<'a> {
    /// Wraps a slice that already contains null-terminated text. The text is everything before
    /// the first null byte.
    ///
    /// # Errors
    /// Returns [`MissingTerminatorError`] if the slice contains no null byte.
    ///
    /// # Examples
    /// ```
    /// # use ganylib::text::TextBuf;
    /// let mut storage = *b"Hello\0World\0";
    /// let buf = TextBuf::new(&mut storage).unwrap();
    /// assert_eq!(buf.as_bytes(), b"Hello");
    /// assert_eq!(buf.cap(), 12);
    /// ```
    pub fn new(bytes: &'a mut [u8]) -> Result<TextBuf<'a>, MissingTerminatorError> {
        let len = c_len(bytes);
        if len == bytes.len() {
            Err(MissingTerminatorError)?
        }
        Ok(TextBuf { bytes, len })
    }

    /// Uses the provided slice as an empty buffer, writing a terminator at the start.
    ///
    /// # Errors
    /// Returns [`CapacityError`] if the slice has no room for the terminator.
    pub fn empty(bytes: &'a mut [u8]) -> Result<TextBuf<'a>, CapacityError> {
        match bytes.first_mut() {
            Some(first) => *first = 0,
            None => Err(CapacityError { required: 1, cap: 0 })?,
        }
        Ok(TextBuf { bytes, len: 0 })
    }

    /// Copies `text` into the provided slice and terminates it. Any null byte within `text` ends
    /// it early.
    ///
    /// # Errors
    /// Returns [`CapacityError`] if the slice can't hold `text` and its terminator.
    ///
    /// # Examples
    /// ```
    /// # use ganylib::text::TextBuf;
    /// let mut storage = [0_u8; 8];
    /// let buf = TextBuf::with_text(&mut storage, "Hello").unwrap();
    /// assert_eq!(buf.as_bytes_with_nul(), b"Hello\0");
    ///
    /// let mut small = [0_u8; 5];
    /// assert!(TextBuf::with_text(&mut small, "Hello").is_err());
    /// ```
    pub fn with_text(bytes: &'a mut [u8], text: &str) -> Result<TextBuf<'a>, CapacityError> {
        let mut buf = TextBuf::empty(bytes)?;
        buf.try_insert_at_position(text, 0)?;
        Ok(buf)
    }

    /// Returns the length of the text, excluding the terminator.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the buffer holds no text.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the capacity of the buffer, including the byte reserved for the terminator.
    pub const fn cap(&self) -> usize {
        self.bytes.len()
    }

    /// Returns the text as bytes, excluding the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Returns the text as bytes, including the terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.bytes[..=self.len]
    }

    /// Returns the text as a string slice.
    ///
    /// # Errors
    /// Returns a [`Utf8Error`] if splicing has left the text as invalid UTF-8, which is only
    /// possible when working with non-ASCII text.
    pub fn to_str(&self) -> Result<&str, Utf8Error> {
        str::from_utf8(self.as_bytes())
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.bytes[0] = 0;
        self.len = 0;
    }

    /// Removes `len` characters starting at `from`. Does nothing if `len` is zero or `from` is
    /// past the end of the text. If the span runs past the end, everything from `from` onwards is
    /// removed.
    ///
    /// # Examples
    /// ```
    /// # use ganylib::text::TextBuf;
    /// let mut storage = [0_u8; 16];
    /// let mut buf = TextBuf::with_text(&mut storage, "Hello, World!").unwrap();
    /// buf.erase_from_length(5, 7);
    /// assert_eq!(buf.as_bytes(), b"Hello!");
    /// buf.erase_from_length(10, 2);
    /// assert_eq!(buf.as_bytes(), b"Hello!");
    /// ```
    pub fn erase_from_length(&mut self, from: usize, len: usize) {
        if let Ok(span) = span::from_length(self.len, from, len) {
            self.remove_span(span);
        }
    }

    /// Removes `len` characters starting at `from`, reporting the ranges that
    /// [`erase_from_length`](TextBuf::erase_from_length) would ignore.
    ///
    /// # Errors
    /// Returns [`RangeError`] if `len` is zero or `from` is past the end of the text.
    pub fn try_erase_from_length(&mut self, from: usize, len: usize) -> Result<(), RangeError> {
        let span = span::from_length(self.len, from, len)?;
        self.remove_span(span);
        Ok(())
    }

    /// Removes the characters in `[from, to)`. Does nothing if `to` is zero, `from >= to` or
    /// `from` is past the end of the text. `to` is clamped to the end of the text.
    ///
    /// # Examples
    /// ```
    /// # use ganylib::text::TextBuf;
    /// let mut storage = [0_u8; 16];
    /// let mut buf = TextBuf::with_text(&mut storage, "Hello, World!").unwrap();
    /// buf.erase_from_to(5, 12);
    /// assert_eq!(buf.as_bytes(), b"Hello!");
    /// ```
    pub fn erase_from_to(&mut self, from: usize, to: usize) {
        if let Ok(span) = span::from_to(self.len, from, to) {
            self.remove_span(span);
        }
    }

    /// Removes the characters in `[from, to)`, reporting the ranges that
    /// [`erase_from_to`](TextBuf::erase_from_to) would ignore.
    ///
    /// # Errors
    /// Returns [`RangeError`] if `to` is zero, `from >= to` or `from` is past the end of the text.
    pub fn try_erase_from_to(&mut self, from: usize, to: usize) -> Result<(), RangeError> {
        let span = span::from_to(self.len, from, to)?;
        self.remove_span(span);
        Ok(())
    }

    /// Inserts `text` at `position`, shifting the rest of the buffer's text right. A position past
    /// the end of the text appends.
    ///
    /// # Panics
    /// Panics if the buffer doesn't have the capacity for the combined text and its terminator.
    ///
    /// # Examples
    /// ```
    /// # use ganylib::text::TextBuf;
    /// let mut storage = [0_u8; 16];
    /// let mut buf = TextBuf::with_text(&mut storage, "Hello!").unwrap();
    /// buf.insert_at_position(", World", 5);
    /// assert_eq!(buf.as_bytes(), b"Hello, World!");
    /// ```
    pub fn insert_at_position(&mut self, text: &str, position: usize) {
        self.try_insert_at_position(text, position).throw()
    }

    /// Inserts `text` at `position`, checking capacity first.
    ///
    /// # Errors
    /// Returns [`CapacityError`] if the buffer can't hold the combined text and its terminator,
    /// in which case the buffer is left unchanged.
    pub fn try_insert_at_position(&mut self, text: &str, position: usize) -> Result<(), CapacityError> {
        let at = span::position(self.len, position);
        self.try_splice(at..at, text)
    }

    /// Replaces `len` characters starting at `from` with `text`.
    ///
    /// This behaves exactly like [`erase_from_length`](TextBuf::erase_from_length) followed by
    /// [`insert_at_position`](TextBuf::insert_at_position) at `from`, so an ignored range still
    /// results in an insertion.
    ///
    /// # Panics
    /// Panics if the buffer doesn't have the capacity for the result. The check happens before
    /// anything is erased.
    ///
    /// # Examples
    /// ```
    /// # use ganylib::text::TextBuf;
    /// let mut storage = [0_u8; 16];
    /// let mut buf = TextBuf::with_text(&mut storage, "Hello, World!").unwrap();
    /// buf.replace_from_length("Rust", 7, 5);
    /// assert_eq!(buf.as_bytes(), b"Hello, Rust!");
    /// ```
    pub fn replace_from_length(&mut self, text: &str, from: usize, len: usize) {
        let span = span::from_length(self.len, from, len)
            .unwrap_or_else(|_| self.empty_span(from));
        self.try_splice(span, text).throw()
    }

    /// Replaces `len` characters starting at `from` with `text`, validating both the range and
    /// the capacity before making any change.
    ///
    /// # Errors
    /// Returns a [`SpliceError`] if the range would be ignored by
    /// [`try_erase_from_length`](TextBuf::try_erase_from_length) or the result doesn't fit.
    pub fn try_replace_from_length(&mut self, text: &str, from: usize, len: usize) -> Result<(), SpliceError> {
        let span = span::from_length(self.len, from, len)?;
        Ok(self.try_splice(span, text)?)
    }

    /// Replaces the characters in `[from, to)` with `text`, behaving like
    /// [`erase_from_to`](TextBuf::erase_from_to) followed by an insertion at `from`.
    ///
    /// # Panics
    /// Panics if the buffer doesn't have the capacity for the result.
    pub fn replace_from_to(&mut self, text: &str, from: usize, to: usize) {
        let span = span::from_to(self.len, from, to)
            .unwrap_or_else(|_| self.empty_span(from));
        self.try_splice(span, text).throw()
    }

    /// Replaces the characters in `[from, to)` with `text`, validating both the range and the
    /// capacity before making any change.
    ///
    /// # Errors
    /// Returns a [`SpliceError`] if the range would be ignored by
    /// [`try_erase_from_to`](TextBuf::try_erase_from_to) or the result doesn't fit.
    pub fn try_replace_from_to(&mut self, text: &str, from: usize, to: usize) -> Result<(), SpliceError> {
        let span = span::from_to(self.len, from, to)?;
        Ok(self.try_splice(span, text)?)
    }

    /// Copies `len` characters starting at `from` into `out`, replacing its contents. The same
    /// ranges ignored by [`erase_from_length`](TextBuf::erase_from_length) leave `out` empty.
    ///
    /// # Panics
    /// Panics if `out` can't hold the extracted text and its terminator.
    ///
    /// # Examples
    /// ```
    /// # use ganylib::text::TextBuf;
    /// let mut storage = [0_u8; 16];
    /// let buf = TextBuf::with_text(&mut storage, "Hello, World!").unwrap();
    /// let mut part_storage = [0_u8; 8];
    /// let mut part = TextBuf::empty(&mut part_storage).unwrap();
    /// buf.text_part_from_length(&mut part, 7, 5);
    /// assert_eq!(part.as_bytes(), b"World");
    /// buf.text_part_from_length(&mut part, 14, 1);
    /// assert!(part.is_empty());
    /// ```
    pub fn text_part_from_length(&self, out: &mut TextBuf<'_>, from: usize, len: usize) {
        let span = span::from_length(self.len, from, len).unwrap_or(0..0);
        self.copy_span(out, span).throw()
    }

    /// Copies `len` characters starting at `from` into `out`.
    ///
    /// # Errors
    /// Returns a [`SpliceError`] if the range is invalid or `out` is too small. In both cases
    /// `out` is left empty.
    pub fn try_text_part_from_length(
        &self,
        out: &mut TextBuf<'_>,
        from: usize,
        len: usize,
    ) -> Result<(), SpliceError> {
        let span = span::from_length(self.len, from, len).inspect_err(|_| out.clear())?;
        Ok(self.copy_span(out, span)?)
    }

    /// Copies the characters in `[from, to)` into `out`, replacing its contents. The same ranges
    /// ignored by [`erase_from_to`](TextBuf::erase_from_to) leave `out` empty.
    ///
    /// # Panics
    /// Panics if `out` can't hold the extracted text and its terminator.
    pub fn text_part_from_to(&self, out: &mut TextBuf<'_>, from: usize, to: usize) {
        let span = span::from_to(self.len, from, to).unwrap_or(0..0);
        self.copy_span(out, span).throw()
    }

    /// Copies the characters in `[from, to)` into `out`.
    ///
    /// # Errors
    /// Returns a [`SpliceError`] if the range is invalid or `out` is too small. In both cases
    /// `out` is left empty.
    pub fn try_text_part_from_to(
        &self,
        out: &mut TextBuf<'_>,
        from: usize,
        to: usize,
    ) -> Result<(), SpliceError> {
        let span = span::from_to(self.len, from, to).inspect_err(|_| out.clear())?;
        Ok(self.copy_span(out, span)?)
    }

    /// Removes a single trailing newline, if there is one.
    pub fn kill_nl(&mut self) {
        if self.as_bytes().last() == Some(&b'\n') {
            self.remove_span(self.len - 1..self.len);
        }
    }

    /// Converts the text to ASCII upper case.
    pub fn to_upper_case(&mut self) {
        super::case::to_upper_case(self.bytes);
    }

    /// Converts the text to ASCII lower case.
    pub fn to_lower_case(&mut self) {
        super::case::to_lower_case(self.bytes);
    }

    /// Converts the text to ASCII title case.
    pub fn to_title_case(&mut self) {
        super::case::to_title_case(self.bytes);
    }

    const fn empty_span(&self, from: usize) -> Range<usize> {
        let at = span::position(self.len, from);
        at..at
    }

    /// Shifts everything after `span`, terminator included, left over it. `copy_within` has
    /// memmove semantics, so the overlap between source and destination is handled.
    fn remove_span(&mut self, span: Range<usize>) {
        debug_assert!(span.start <= span.end && span.end <= self.len);
        let removed = span.end - span.start;
        self.bytes.copy_within(span.end..=self.len, span.start);
        self.len -= removed;
    }

    /// Replaces `span` with `text`, which covers insertion (an empty span) as well as
    /// replacement. Capacity is checked before the buffer is touched.
    fn try_splice(&mut self, span: Range<usize>, text: &str) -> Result<(), CapacityError> {
        let text = &text.as_bytes()[..c_len(text.as_bytes())];
        let removed = span.end - span.start;
        let required = self.len - removed + text.len() + 1;
        if required > self.cap() {
            Err(CapacityError { required, cap: self.cap() })?
        }

        let tail_start = span.start + text.len();
        self.bytes.copy_within(span.end..=self.len, tail_start);
        self.bytes[span.start..tail_start].copy_from_slice(text);
        self.len = required - 1;
        Ok(())
    }

    fn copy_span(&self, out: &mut TextBuf<'_>, span: Range<usize>) -> Result<(), CapacityError> {
        let len = span.end - span.start;
        if len + 1 > out.cap() {
            out.clear();
            Err(CapacityError { required: len + 1, cap: out.cap() })?
        }
        out.bytes[..len].copy_from_slice(&self.bytes[span]);
        out.bytes[len] = 0;
        out.len = len;
        Ok(())
    }
}

impl Debug for TextBuf<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextBuf")
            .field("text", &DebugRaw::escaped(self.as_bytes()))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl Display for TextBuf<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.as_bytes()))
    }
}

impl PartialEq<str> for TextBuf<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for TextBuf<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}
