//! Calendar arithmetic shared by the builders and the view composer.
//!
//! All calendar dates are taken in UTC so that a plan lays out identically
//! regardless of the host's time zone.

use jiff::{
    SignedDuration, Timestamp, ToSpan,
    civil::{Date, DateTime},
    tz::TimeZone,
};

use crate::error::{CadenceError, Result};

const NANOS_PER_DAY: i128 = 86_400 * 1_000_000_000;

/// Number of complete 24-hour periods from `earlier` to `later`, truncated
/// toward zero.
pub fn whole_days_between(later: Timestamp, earlier: Timestamp) -> i64 {
    let diff = later.as_nanosecond() - earlier.as_nanosecond();
    (diff / NANOS_PER_DAY) as i64
}

/// Days from `now` until `deadline`, rounded up.
pub fn days_until(deadline: Timestamp, now: Timestamp) -> i64 {
    let diff = deadline.as_nanosecond() - now.as_nanosecond();
    let whole = diff.div_euclid(NANOS_PER_DAY);
    if diff.rem_euclid(NANOS_PER_DAY) > 0 {
        (whole + 1) as i64
    } else {
        whole as i64
    }
}

/// The UTC calendar date of a timestamp.
pub fn utc_date(timestamp: Timestamp) -> Date {
    timestamp.to_zoned(TimeZone::UTC).date()
}

/// Shifts a calendar date forward by `days`.
pub fn add_days(date: Date, days: usize) -> Result<Date> {
    let days = i64::try_from(days).map_err(|_| out_of_range(days))?;
    date.checked_add(days.days()).map_err(|_| out_of_range(days))
}

/// Shifts a timestamp forward by `days` 24-hour periods.
pub fn add_days_to_timestamp(timestamp: Timestamp, days: u32) -> Result<Timestamp> {
    timestamp
        .checked_add(SignedDuration::from_hours(i64::from(days) * 24))
        .map_err(|_| out_of_range(days))
}

/// Parses a user supplied deadline.
///
/// Accepts an RFC 3339 timestamp (`2025-03-01T09:00:00Z`), a civil datetime
/// without offset (taken as UTC) or a bare date (UTC midnight).
pub fn parse_deadline(input: &str) -> Result<Timestamp> {
    let input = input.trim();
    if let Ok(timestamp) = input.parse::<Timestamp>() {
        return Ok(timestamp);
    }
    let civil = input
        .parse::<DateTime>()
        .or_else(|_| input.parse::<Date>().map(|date| date.to_datetime(jiff::civil::Time::midnight())));
    civil
        .and_then(|datetime| datetime.to_zoned(TimeZone::UTC))
        .map(|zoned| zoned.timestamp())
        .map_err(|_| {
            CadenceError::invalid_input("deadline")
                .with_reason(format!("Invalid date format: '{input}'"))
        })
}

fn out_of_range(days: impl std::fmt::Display) -> CadenceError {
    CadenceError::invalid_input("deadline")
        .with_reason(format!("Shifting by {days} days leaves the supported calendar range"))
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn ts(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    #[test]
    fn test_whole_days_truncates() {
        let start = ts("2025-01-01T10:00:00Z");
        assert_eq!(whole_days_between(ts("2025-01-15T10:00:00Z"), start), 14);
        assert_eq!(whole_days_between(ts("2025-01-15T09:59:59Z"), start), 13);
        assert_eq!(whole_days_between(start, start), 0);
    }

    #[test]
    fn test_days_until_rounds_up() {
        let now = ts("2025-01-01T10:00:00Z");
        assert_eq!(days_until(ts("2025-01-03T10:00:00Z"), now), 2);
        assert_eq!(days_until(ts("2025-01-03T10:00:01Z"), now), 3);
        assert_eq!(days_until(ts("2025-01-01T09:00:00Z"), now), 0);
        assert_eq!(days_until(ts("2024-12-30T10:00:00Z"), now), -2);
    }

    #[test]
    fn test_parse_deadline_formats() {
        assert_eq!(
            parse_deadline("2025-03-01T09:00:00Z").unwrap(),
            ts("2025-03-01T09:00:00Z")
        );
        assert_eq!(
            parse_deadline("2025-03-01T09:00:00").unwrap(),
            ts("2025-03-01T09:00:00Z")
        );
        assert_eq!(
            parse_deadline(" 2025-03-01 ").unwrap(),
            ts("2025-03-01T00:00:00Z")
        );
    }

    #[test]
    fn test_parse_deadline_rejects_garbage() {
        let err = parse_deadline("next tuesday").unwrap_err();
        assert!(matches!(err, CadenceError::InvalidInput { ref field, .. } if field == "deadline"));
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_add_days_crosses_month() {
        assert_eq!(add_days(date(2025, 1, 30), 3).unwrap(), date(2025, 2, 2));
        assert_eq!(
            add_days_to_timestamp(ts("2025-01-01T10:00:00Z"), 3).unwrap(),
            ts("2025-01-04T10:00:00Z")
        );
    }

    #[test]
    fn test_utc_date() {
        assert_eq!(utc_date(ts("2025-01-01T23:59:59Z")), date(2025, 1, 1));
    }
}
