use super::{AddrError, MissingNetMaskError, MissingOctetError, OctetOverflowError};

/// Strips the `/prefix` net mask from an address in CIDR notation.
///
/// # Errors
/// Returns [`MissingNetMaskError`] if the address contains no `/`.
///
/// # Examples
/// ```
/// # use ganylib::router::delete_net_mask;
/// assert_eq!(delete_net_mask("192.168.10.1/24"), Ok("192.168.10.1"));
/// assert!(delete_net_mask("192.168.10.1").is_err());
/// ```
pub fn delete_net_mask(addr: &str) -> Result<&str, MissingNetMaskError> {
    addr.rsplit_once('/')
        .map(|(without_mask, _)| without_mask)
        .ok_or(MissingNetMaskError)
}

/// Returns the address following `addr`, by incrementing its last dotted octet. Nothing carries
/// into the other octets.
///
/// # Errors
/// Returns an [`AddrError`] if there is no `.` in the address, the last octet isn't a number
/// from 0 to 255, or it is already 255.
///
/// # Examples
/// ```
/// # use ganylib::router::incr_last_octet;
/// assert_eq!(incr_last_octet("10.0.0.41").as_deref(), Ok("10.0.0.42"));
/// assert!(incr_last_octet("10.0.0.255").unwrap_err().is_octet_overflow());
/// ```
pub fn incr_last_octet(addr: &str) -> Result<String, AddrError> {
    let (network, last) = addr.rsplit_once('.').ok_or(MissingOctetError)?;
    let octet = last.parse::<u8>()?.checked_add(1).ok_or(OctetOverflowError)?;
    Ok(format!("{network}.{octet}"))
}
