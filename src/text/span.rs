//! Range validation shared by every splice implementation.
//!
//! Each function here takes the current text length and the caller's arguments and either
//! produces the (clamped) byte range the operation should act on, or a [`RangeError`] for the
//! cases that the silent methods treat as no-ops.

use std::ops::Range;

use super::RangeError;

/// Resolves a `from` + `len` span.
///
/// Invalid when `len` is zero or `from` lies past the end of the text. A span running past the
/// end is clamped to the end, which makes `from == text_len` valid but empty.
pub(crate) const fn from_length(text_len: usize, from: usize, len: usize) -> Result<Range<usize>, RangeError> {
    let end = from.saturating_add(len);
    if len == 0 || from > text_len {
        return Err(RangeError { start: from, end, len: text_len });
    }
    Ok(from..if end > text_len { text_len } else { end })
}

/// Resolves a half-open `[from, to)` span.
///
/// Invalid when `to` is zero, `from >= to` or `from` lies past the end of the text. `to` is
/// clamped to the end of the text.
pub(crate) const fn from_to(text_len: usize, from: usize, to: usize) -> Result<Range<usize>, RangeError> {
    if to == 0 || from >= to || from > text_len {
        return Err(RangeError { start: from, end: to, len: text_len });
    }
    Ok(from..if to > text_len { text_len } else { to })
}

/// Clamps an insertion point to `[0, text_len]`.
pub(crate) const fn position(text_len: usize, position: usize) -> usize {
    if position > text_len { text_len } else { position }
}
