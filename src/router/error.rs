use std::num::ParseIntError;

use derive_more::{Display, Error, From, IsVariant, TryInto};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("line contains no uptime periods")]
pub struct MissingUptimeError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("address has no net mask")]
pub struct MissingNetMaskError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("address has no dotted octet")]
pub struct MissingOctetError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("last octet can't be incremented past 255")]
pub struct OctetOverflowError;

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error, TryInto, IsVariant)]
pub enum AddrError {
    MissingOctet(MissingOctetError),
    InvalidOctet(ParseIntError),
    OctetOverflow(OctetOverflowError),
}
