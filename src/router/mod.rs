//! Helpers for picking apart the output of network devices.
//!
//! [`uptime`] turns the uptime line of a router's `show version` output into a number of days,
//! and the address helpers do the small IPv4 string edits needed when building inventories.

mod addr;
mod error;
mod uptime;

#[cfg(test)]
mod tests;

pub use addr::*;
pub use error::*;
pub use uptime::*;
