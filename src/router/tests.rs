#![cfg(test)]

use super::*;

#[test]
fn test_period_to_minute() {
    assert_eq!(period_to_minute("year"), Some(YEAR));
    assert_eq!(period_to_minute("years,"), Some(YEAR));
    assert_eq!(period_to_minute("WEEKS"), Some(WEEK));
    assert_eq!(period_to_minute("day"), Some(24 * 60));
    assert_eq!(period_to_minute("hours,"), Some(60));
    assert_eq!(period_to_minute("minute"), Some(1));
    assert_eq!(period_to_minute("seconds"), None);
    assert_eq!(period_to_minute(""), None);
    assert_eq!(YEAR, 52 * 7 * 24 * 60, "A year is counted as exactly 52 weeks.");
}

#[test]
fn test_uptime() {
    assert_eq!(uptime("Switch uptime is 1 year, 2 weeks, 3 days, 4 hours, 5 minutes"), Ok(381));
    assert_eq!(uptime("Router uptime is 8 weeks, 1 day, 2 hours"), Ok(57));
    assert_eq!(uptime("uptime is 2 days\r"), Ok(2), "A line ending should be ignored.");
    assert_eq!(uptime("uptime is 47 hours"), Ok(1), "Partial days should be dropped.");
    assert_eq!(
        uptime("15 interfaces, uptime is 3 days"),
        Ok(3),
        "Numbers not followed by a period should be skipped."
    );
    assert_eq!(uptime("uptime is 0 minutes"), Ok(0));
    assert_eq!(uptime("uptime is unknown"), Err(MissingUptimeError));
    assert_eq!(uptime(""), Err(MissingUptimeError));
}

#[test]
fn test_delete_net_mask() {
    assert_eq!(delete_net_mask("10.1.1.0/24"), Ok("10.1.1.0"));
    assert_eq!(delete_net_mask("10.1.1.0/24/8"), Ok("10.1.1.0/24"), "Only the last mask is cut.");
    assert_eq!(delete_net_mask("10.1.1.0"), Err(MissingNetMaskError));
}

#[test]
fn test_incr_last_octet() {
    assert_eq!(incr_last_octet("192.168.0.1").as_deref(), Ok("192.168.0.2"));
    assert_eq!(incr_last_octet("192.168.0.254").as_deref(), Ok("192.168.0.255"));
    assert_eq!(
        incr_last_octet("192.168.0.255"),
        Err(AddrError::OctetOverflow(OctetOverflowError))
    );
    assert_eq!(
        incr_last_octet("localhost"),
        Err(AddrError::MissingOctet(MissingOctetError))
    );
    assert!(incr_last_octet("192.168.0.x").unwrap_err().is_invalid_octet());
    assert!(incr_last_octet("192.168.0.").unwrap_err().is_invalid_octet());
}
