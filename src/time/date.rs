//! Date formatting with a small `%`-token vocabulary.

use chrono::{DateTime, Datelike, TimeZone, Timelike};

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn pad2(n: u32) -> String {
    format!("{n:02}")
}

/// Format `date` in its own timezone.
///
/// Supported tokens are `%Y %m %d %H %M %S`; each is replaced at its first
/// occurrence only. Everything but the year is zero-padded to two digits.
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use hydro_utils::time::{format_date, DEFAULT_DATE_FORMAT};
///
/// let t = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 1).unwrap();
/// assert_eq!(format_date(&t, DEFAULT_DATE_FORMAT), "2024-03-07 09:05:01");
/// ```
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>, fmt: &str) -> String {
    fmt.replacen("%Y", &date.year().to_string(), 1)
        .replacen("%m", &pad2(date.month()), 1)
        .replacen("%d", &pad2(date.day()), 1)
        .replacen("%H", &pad2(date.hour()), 1)
        .replacen("%M", &pad2(date.minute()), 1)
        .replacen("%S", &pad2(date.second()), 1)
}
