//! # Time Helpers
//!
//! Millisecond constants, short human-readable durations, clock-style
//! rendering of second counts, date formatting and timestamp-prefixed
//! identifiers.
//!
//! ## Components
//! - **Constants**: [`SECOND`] through [`WEEK`], in milliseconds
//! - **Date**: `%Y-%m-%d %H:%M:%S` style formatting of zoned date-times
//! - **ObjectId**: 12-byte identifiers carrying an epoch-seconds prefix

pub mod date;
pub mod object_id;

pub use date::{format_date, DEFAULT_DATE_FORMAT};
pub use object_id::{object_id, ObjectId, ToEpochMillis};

use crate::text::display_number;

pub const SECOND: i64 = 1000;
pub const MINUTE: i64 = SECOND * 60;
pub const HOUR: i64 = MINUTE * 60;
pub const DAY: i64 = HOUR * 24;
pub const WEEK: i64 = DAY * 7;

/// Round half toward positive infinity (`2.5 -> 3`, `-2.5 -> -2`).
pub(crate) fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Render `ms` as the nearest whole day/hour/minute/second, or raw millis.
///
/// A unit is used once the magnitude is within half a step of one full
/// unit, so 23h30m already renders as `1d`.
pub fn format_time_short(ms: i64) -> String {
    // unsigned so that i64::MIN has a magnitude
    let abs = ms.unsigned_abs();
    let reaches = |threshold: i64| abs >= threshold as u64;
    let rounded = |unit: i64| round_half_up(ms as f64 / unit as f64) as i64;
    if reaches(DAY - HOUR / 2) {
        format!("{}d", rounded(DAY))
    } else if reaches(HOUR - MINUTE / 2) {
        format!("{}h", rounded(HOUR))
    } else if reaches(MINUTE - SECOND / 2) {
        format!("{}m", rounded(MINUTE))
    } else if reaches(SECOND) {
        format!("{}s", rounded(SECOND))
    } else {
        format!("{ms}ms")
    }
}

/// Leading-integer parse: optional whitespace and sign, then digits.
///
/// The digit run is read as `f64`, so runs too long for `i64` still yield
/// a (rounded) value instead of failing.
fn parse_leading_int(input: &str) -> Option<f64> {
    let trimmed = input.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1.0, &trimmed[1..]),
        Some(b'+') => (1.0, &trimmed[1..]),
        _ => (1.0, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<f64>().ok().map(|n| sign * n)
}

fn digit2(n: f64) -> String {
    if n < 10.0 {
        format!("0{}", display_number(n))
    } else {
        display_number(n)
    }
}

/// Render a count of seconds as `HH:MM:SS`. Hours are not wrapped at 24.
///
/// ```rust
/// use hydro_utils::time::format_seconds;
///
/// assert_eq!(format_seconds("3661"), "01:01:01");
/// assert_eq!(format_seconds("90000"), "25:00:00");
/// ```
pub fn format_seconds(seconds: &str) -> String {
    let Some(seconds) = parse_leading_int(seconds) else {
        return "NaN:NaN:NaN".to_string();
    };
    format!(
        "{}:{}:{}",
        digit2((seconds / 3600.0).floor()),
        digit2((seconds % 3600.0 / 60.0).floor()),
        digit2(seconds % 60.0)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(MINUTE, 60_000);
        assert_eq!(HOUR, 3_600_000);
        assert_eq!(DAY, 86_400_000);
        assert_eq!(WEEK, 604_800_000);
    }

    #[test]
    fn test_format_time_short_thresholds() {
        assert_eq!(format_time_short(999), "999ms");
        assert_eq!(format_time_short(1000), "1s");
        assert_eq!(format_time_short(1500), "2s");
        assert_eq!(format_time_short(MINUTE - SECOND / 2), "1m");
        assert_eq!(format_time_short(HOUR - MINUTE / 2), "1h");
        assert_eq!(format_time_short(DAY - HOUR / 2), "1d");
        assert_eq!(format_time_short(3 * WEEK), "21d");
        assert_eq!(format_time_short(-2 * HOUR), "-2h");
        assert_eq!(format_time_short(-500), "-500ms");
    }

    #[test]
    fn test_format_time_short_extremes() {
        assert_eq!(format_time_short(i64::MIN), "-106751991167d");
        assert_eq!(format_time_short(i64::MAX), "106751991167d");
        assert_eq!(format_time_short(i64::MIN + 1), "-106751991167d");
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds("0"), "00:00:00");
        assert_eq!(format_seconds(" 59s"), "00:00:59");
        assert_eq!(format_seconds("abc"), "NaN:NaN:NaN");
        assert_eq!(format_seconds("360000"), "100:00:00");
    }

    #[test]
    fn test_format_seconds_negative_fields_are_prefixed() {
        assert_eq!(format_seconds("-1"), "0-1:0-1:0-1");
        assert_eq!(format_seconds("-0"), "00:00:00");
    }

    #[test]
    fn test_format_seconds_beyond_i64_digits() {
        // 1e20 s: 27777777777777776 h (after f64 rounding), 46 min, 40 s
        assert_eq!(
            format_seconds("99999999999999999999"),
            "27777777777777776:46:40"
        );
        assert_eq!(format_seconds(&"9".repeat(400)), "Infinity:NaN:NaN");
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
    }
}
