//! Timestamp display utilities.
//!
//! Plans are laid out on the UTC calendar, so timestamps are shown in UTC as
//! well; a deadline then always falls on the date its schedule ends on.

use std::fmt;

use jiff::{Timestamp, tz::TimeZone};

/// Formats a timestamp as `YYYY-MM-DD HH:MM UTC`.
///
/// ```rust
/// use cadence_core::display::UtcDateTime;
/// use jiff::Timestamp;
///
/// let ts: Timestamp = "2025-03-01T09:30:15Z".parse().unwrap();
/// assert_eq!(UtcDateTime(&ts).to_string(), "2025-03-01 09:30 UTC");
/// ```
pub struct UtcDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for UtcDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0.to_zoned(TimeZone::UTC).strftime("%Y-%m-%d %H:%M UTC")
        )
    }
}
