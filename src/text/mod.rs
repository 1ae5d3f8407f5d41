//! Splicing, searching and tokenizing ASCII text.
//!
//! # Purpose
//! These are the string routines that I kept rewriting across small exercises, collected in one
//! place: inserting, erasing and replacing spans of text by offset, extracting parts of it,
//! finding patterns and picking individual words out of a line.
//!
//! # Method
//! The splice operations exist twice. [`TextBuf`] works on a caller-owned, fixed size and
//! null-terminated byte buffer and never allocates, so growing the text can fail. The
//! [`SpliceExtension`] trait provides the same operations for [`String`], which grows instead.
//! Both share their range validation, so an index means the same thing for either of them.
//!
//! Invalid ranges are ignored by default. Each operation has a `try_` counterpart which reports
//! them as a [`RangeError`] instead, for when silently doing nothing would hide a bug.

mod buf;
pub mod case;
mod error;
mod line;
mod search;
mod span;
mod splice;
mod token;


pub use buf::*;
pub use error::*;
pub use line::*;
pub use search::*;
pub use splice::*;
pub use token::*;
