use super::MissingUptimeError;
use crate::text::Tokens;

// Periods in minutes, with a year rounded to 52 weeks.
pub const MINUTE: u32 = 1;
pub const HOUR: u32 = MINUTE * 60;
pub const DAY: u32 = HOUR * 24;
pub const WEEK: u32 = DAY * 7;
pub const YEAR: u32 = WEEK * 52;

/// Converts the name of a time period, like `"years"` or `"Day,"`, into the number of minutes
/// it stands for. Case, a plural `s`, a trailing comma and a line ending are ignored. Returns
/// [`None`] for anything else.
///
/// # Examples
/// ```
/// # use ganylib::router::{period_to_minute, WEEK};
/// assert_eq!(period_to_minute("weeks,"), Some(WEEK));
/// assert_eq!(period_to_minute("Hour"), Some(60));
/// assert_eq!(period_to_minute("fortnight"), None);
/// ```
pub fn period_to_minute(period_unit: &str) -> Option<u32> {
    let unit = period_unit.trim_end_matches([',', '\r', '\n']).to_ascii_lowercase();
    let unit = unit.strip_suffix('s').unwrap_or(&unit);
    match unit {
        "year" => Some(YEAR),
        "week" => Some(WEEK),
        "day" => Some(DAY),
        "hour" => Some(HOUR),
        "minute" => Some(MINUTE),
        _ => None,
    }
}

/// Adds up every `<count> <period>` pair in an uptime line, like
/// `"Router uptime is 1 year, 2 weeks, 3 days, 4 hours, 5 minutes"`, and returns the total in
/// whole days.
///
/// # Errors
/// Returns [`MissingUptimeError`] if the line contains no such pair.
///
/// # Examples
/// ```
/// # use ganylib::router::uptime;
/// assert_eq!(uptime("Router uptime is 1 year, 2 weeks, 3 days, 4 hours, 5 minutes"), Ok(381));
/// assert_eq!(uptime("Switch uptime is 23 hours, 59 minutes"), Ok(0));
/// assert!(uptime("System image file is \"flash:c2960.bin\"").is_err());
/// ```
pub fn uptime(line: &str) -> Result<u32, MissingUptimeError> {
    let mut tokens = Tokens::new(line).peekable();
    let mut minutes: Option<u64> = None;

    while let Some(token) = tokens.next() {
        let Ok(count) = token.parse::<u64>() else {
            continue;
        };
        if let Some(period) = tokens.peek().and_then(|unit| period_to_minute(unit)) {
            tokens.next();
            let total = minutes.get_or_insert(0);
            *total = total.saturating_add(count.saturating_mul(u64::from(period)));
        }
    }

    let minutes = minutes.ok_or(MissingUptimeError)?;
    Ok(u32::try_from(minutes / u64::from(DAY)).unwrap_or(u32::MAX))
}
