//! # Unit Parsing and Formatting
//!
//! Parses quantity strings found in config files and job limits
//! (`"500ms"`, `"2s"`, `"256mb"`) into normalized numbers, and renders byte
//! counts with binary prefixes.
//!
//! ## Normalization
//! - Time strings → whole milliseconds (floored)
//! - Memory strings → whole megabytes (ceiled)
//!
//! Both parsers are case-insensitive and reject anything with a sign,
//! whitespace or an unknown suffix, and fail on values too large for `u64`.

use regex_lite::Regex;
use std::sync::LazyLock;
use tracing::warn;

use crate::error::{Result, UtilsError};
use crate::text::display_number;
use crate::time::round_half_up;

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^([0-9]+(?:\.[0-9]*)?)([mu]?)s?$").expect("valid regex"));
static MEMORY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^([0-9]+(?:\.[0-9]*)?)([kmg])b?$").expect("valid regex"));

const UNIT_BASE: f64 = 1024.0;

/// Binary unit names, smallest first
pub const SIZE_UNITS: [&str; 9] = ["Bytes", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB"];

fn time_factor(unit: &str) -> f64 {
    match unit {
        "m" => 1.0,
        "u" => 0.001,
        _ => 1000.0,
    }
}

fn memory_factor(unit: &str) -> f64 {
    match unit {
        "k" => 1.0 / 1024.0,
        "g" => 1024.0,
        _ => 1.0,
    }
}

/// Parse `<number>[m|u]s?` into milliseconds.
///
/// A bare number or `s` suffix means seconds, `m` milliseconds and `u`
/// microseconds.
///
/// ```rust
/// use hydro_utils::units::parse_time_ms;
///
/// assert_eq!(parse_time_ms("500ms").unwrap(), 500);
/// assert_eq!(parse_time_ms("2s").unwrap(), 2000);
/// assert!(parse_time_ms("bad").is_err());
/// ```
pub fn parse_time_ms(input: &str) -> Result<u64> {
    let Some(caps) = TIME_RE.captures(input) else {
        warn!(input, "Rejected time string");
        return Err(UtilsError::TimeParse(input.to_string()));
    };
    let value: f64 = caps[1]
        .parse()
        .map_err(|_| UtilsError::TimeParse(input.to_string()))?;
    let unit = caps[2].to_ascii_lowercase();
    let ms = (value * time_factor(&unit)).floor();
    if !ms.is_finite() || ms >= u64::MAX as f64 {
        warn!(input, "Time string out of range");
        return Err(UtilsError::TimeParse(input.to_string()));
    }
    Ok(ms as u64)
}

/// Parse `<number>[k|m|g]b?` into megabytes, rounding up.
///
/// ```rust
/// use hydro_utils::units::parse_memory_mb;
///
/// assert_eq!(parse_memory_mb("512kb").unwrap(), 1);
/// assert_eq!(parse_memory_mb("2gb").unwrap(), 2048);
/// ```
pub fn parse_memory_mb(input: &str) -> Result<u64> {
    let Some(caps) = MEMORY_RE.captures(input) else {
        warn!(input, "Rejected memory string");
        return Err(UtilsError::MemoryParse(input.to_string()));
    };
    let value: f64 = caps[1]
        .parse()
        .map_err(|_| UtilsError::MemoryParse(input.to_string()))?;
    let unit = caps[2].to_ascii_lowercase();
    let mb = (value * memory_factor(&unit)).ceil();
    if !mb.is_finite() || mb >= u64::MAX as f64 {
        warn!(input, "Memory string out of range");
        return Err(UtilsError::MemoryParse(input.to_string()));
    }
    Ok(mb as u64)
}

/// Render `value × base` bytes with the largest binary unit below 1024,
/// to one decimal place.
///
/// ```rust
/// use hydro_utils::units::size;
///
/// assert_eq!(size(1536.0, 1.0), "1.5 KiB");
/// assert_eq!(size(3.0, 1024.0 * 1024.0), "3 MiB");
/// ```
pub fn size(value: f64, base: f64) -> String {
    let mut s = value * base;
    for unit in SIZE_UNITS {
        if s < UNIT_BASE {
            return format!("{} {unit}", display_number(round_half_up(s * 10.0) / 10.0));
        }
        s /= UNIT_BASE;
    }
    format!(
        "{} {}",
        display_number(round_half_up(s * UNIT_BASE)),
        SIZE_UNITS[SIZE_UNITS.len() - 1]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_units() {
        assert_eq!(parse_time_ms("2").unwrap(), 2000);
        assert_eq!(parse_time_ms("1.5S").unwrap(), 1500);
        assert_eq!(parse_time_ms("5m").unwrap(), 5);
        assert_eq!(parse_time_ms("2500us").unwrap(), 2);
        assert_eq!(parse_time_ms("1.5us").unwrap(), 0);
        assert_eq!(parse_time_ms("3.").unwrap(), 3000);
    }

    #[test]
    fn test_time_rejects() {
        for bad in ["", "bad", "-1s", "1 s", "1ks", ".5s", "1h"] {
            assert!(
                matches!(parse_time_ms(bad), Err(UtilsError::TimeParse(ref s)) if s == bad),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_overlong_numbers_are_rejected() {
        let huge = "9".repeat(400);
        assert!(matches!(parse_time_ms(&huge), Err(UtilsError::TimeParse(ref s)) if *s == huge));
        assert!(matches!(
            parse_time_ms(&format!("{huge}ms")),
            Err(UtilsError::TimeParse(_))
        ));
        assert!(matches!(
            parse_memory_mb(&format!("{huge}gb")),
            Err(UtilsError::MemoryParse(_))
        ));
        // finite but past u64
        assert!(parse_time_ms(&format!("{}s", "9".repeat(30))).is_err());
        assert!(parse_memory_mb(&format!("{}mb", "9".repeat(30))).is_err());
    }

    #[test]
    fn test_memory_units() {
        assert_eq!(parse_memory_mb("1025KB").unwrap(), 2);
        assert_eq!(parse_memory_mb("0kb").unwrap(), 0);
        assert_eq!(parse_memory_mb("64m").unwrap(), 64);
        assert_eq!(parse_memory_mb("0.5g").unwrap(), 512);
        assert_eq!(parse_memory_mb("1.1mb").unwrap(), 2);
    }

    #[test]
    fn test_memory_requires_unit() {
        assert!(matches!(parse_memory_mb("64"), Err(UtilsError::MemoryParse(_))));
        assert!(parse_memory_mb("64tb").is_err());
    }

    #[test]
    fn test_size_units() {
        assert_eq!(size(0.0, 1.0), "0 Bytes");
        assert_eq!(size(1023.0, 1.0), "1023 Bytes");
        assert_eq!(size(1024.0, 1.0), "1 KiB");
        assert_eq!(size(1.25, 1024.0 * 1024.0 * 1024.0), "1.3 GiB");
    }

    #[test]
    fn test_size_overflow_stays_in_largest_unit() {
        let yib = UNIT_BASE.powi(8);
        assert_eq!(size(2048.0 * yib, 1.0), "2048 YiB");
    }
}
