//! File access for the handful of tasks that need it: scanning a file for a token, deleting
//! entries and clearing out old files.
//!
//! Files and directories are opened and listed through thin `libc` wrappers, with each `errno`
//! an operation can produce mapped to its own error type. Those are collected into per-operation enums, so a caller can
//! match on exactly the failures that are possible.
#![cfg(target_os = "linux")]

mod dir;
mod error;
mod fd;
mod file;
mod remove;
mod scan;
mod syscall;
mod union_errors;

#[cfg(test)]
mod tests;

pub(crate) use dir::*;
pub use error::*;
pub(crate) use fd::*;
pub use file::*;
pub use remove::*;
pub use scan::*;
pub use union_errors::*;
