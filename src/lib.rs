//! This crate is my collection of small, generic utility functions, gathered from a series of
//! exercises and from scripts I wrote for keeping a network inventory.
//!
//! # Purpose
//! Most of what's here started out as a quick helper for a single task: cutting a word out of a
//! line, finding the uptime in a router's `show version` output, sorting a handful of numbers.
//! Collecting them in one place, and writing each one properly, is a way of learning how they
//! should have been written in the first place.
//!
//! # Contents
//! - [`text`]: Splicing (insert, erase, replace and extract by offset), pattern search and
//!   tokenizing, for fixed size buffers as well as [`String`]s.
//! - [`fs`]: Scanning files for tokens, removing entries and clearing out old files.
//! - [`sort`]: Hand written bubble, insertion, selection, shell and counting sorts, plus binary
//!   search.
//! - [`router`]: Uptime parsing and IPv4 address helpers.
//! - [`print`]: Printing slices.
//!
//! # Error Handling
//! Functions that can fail return strongly typed errors: a struct for each kind of failure and
//! enums that group the kinds a particular function can produce, so there is no need to match on
//! cases that can't happen.
//!
//! The splice operations in [`text`] are a bit different. By default, they quietly ignore ranges
//! that don't fit the text, because that's almost always what you want when cutting up a line.
//! Each one has a `try_` counterpart that reports those ranges instead. Running out of space in
//! a fixed buffer is never ignored though: the plain methods panic and the `try_` methods return
//! an error, rather than writing past the end.
//!
//! Nothing in this crate prints diagnostics. Where it's useful to see what's happening, such as
//! which file is being scanned, messages are emitted through [`log`] and it's up to the
//! application to install a logger.
//!
//! # Dependencies
//! The [`fs`] module relies on `libc` for its thin syscall wrappers, which let every `errno` an
//! operation can produce be mapped to its own error type.
//!
//! This crate also depends on some derive macros because they're helpful and remove the need for
//! some very repetitive programming.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "fs")]
pub mod fs;
#[cfg(feature = "print")]
pub mod print;
#[cfg(feature = "router")]
pub mod router;
#[cfg(feature = "sort")]
pub mod sort;
#[cfg(feature = "text")]
pub mod text;

pub(crate) mod util;
