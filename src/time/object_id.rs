//! Timestamp-prefixed 12-byte identifiers.
//!
//! The document store orders identifiers by their leading 4 bytes, which hold
//! big-endian epoch seconds. Building one from a timestamp with the other
//! 8 bytes zeroed yields a lower bound usable in range queries such as
//! "everything created after midnight".

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

use crate::error::{constants, Result, UtilsError};

/// Anything that can be placed on the epoch millisecond axis.
pub trait ToEpochMillis {
    fn to_epoch_millis(&self) -> Result<i64>;
}

impl<Tz: TimeZone> ToEpochMillis for DateTime<Tz> {
    fn to_epoch_millis(&self) -> Result<i64> {
        Ok(self.timestamp_millis())
    }
}

impl ToEpochMillis for SystemTime {
    fn to_epoch_millis(&self) -> Result<i64> {
        match self.duration_since(UNIX_EPOCH) {
            Ok(after) => Ok(after.as_millis() as i64),
            Err(before) => Ok(-(before.duration().as_millis() as i64)),
        }
    }
}

impl ToEpochMillis for str {
    /// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS` / `YYYY-MM-DDTHH:MM:SS` and
    /// `YYYY-MM-DD`. Strings without an offset are read as UTC.
    fn to_epoch_millis(&self) -> Result<i64> {
        let s = self.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.timestamp_millis());
        }
        for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, pattern) {
                return Ok(naive.and_utc().timestamp_millis());
            }
        }
        if let Some(midnight) = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
        {
            return Ok(midnight.and_utc().timestamp_millis());
        }
        Err(UtilsError::InvalidTimestamp(format!(
            "{}: {s:?}",
            constants::ERR_UNPARSEABLE_DATE
        )))
    }
}

impl ToEpochMillis for String {
    fn to_epoch_millis(&self) -> Result<i64> {
        self.as_str().to_epoch_millis()
    }
}

/// 12-byte identifier: 4 bytes of epoch seconds, 8 bytes of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId([u8; 12]);

impl ObjectId {
    /// Identifier whose timestamp prefix is `seconds` and remainder is zero.
    pub fn from_epoch_seconds(seconds: u32) -> Self {
        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        Self(bytes)
    }

    pub fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    pub fn bytes(&self) -> [u8; 12] {
        self.0
    }

    /// Epoch seconds stored in the leading 4 bytes
    pub fn epoch_seconds(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(i64::from(self.epoch_seconds()), 0).unwrap_or_default()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for ObjectId {
    type Err = UtilsError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || UtilsError::InvalidTimestamp(format!("not a 24-digit hex identifier: {s:?}"));
        if s.len() != 24 || !s.is_ascii() {
            return Err(invalid());
        }
        let mut bytes = [0u8; 12];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16).map_err(|_| invalid())?;
        }
        Ok(Self(bytes))
    }
}

impl Serialize for ObjectId {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex = String::deserialize(deserializer)?;
        hex.parse().map_err(serde::de::Error::custom)
    }
}

/// Build the lowest identifier for the second containing `timestamp`.
///
/// ```rust
/// use hydro_utils::time::object_id;
///
/// let id = object_id("2021-01-01T00:00:00Z").unwrap();
/// assert_eq!(id.to_string(), "5fee66000000000000000000");
/// ```
pub fn object_id<T: ToEpochMillis + ?Sized>(timestamp: &T) -> Result<ObjectId> {
    let millis = timestamp.to_epoch_millis()?;
    let seconds = millis.div_euclid(1000);
    let seconds = u32::try_from(seconds).map_err(|_| {
        UtilsError::InvalidTimestamp(format!("{}: {seconds}", constants::ERR_TIMESTAMP_RANGE))
    })?;
    debug!(seconds, "Constructed timestamp identifier");
    Ok(ObjectId::from_epoch_seconds(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use std::time::Duration;

    #[test]
    fn test_epoch_prefix() {
        let id = object_id(&Utc.timestamp_opt(1, 999).unwrap()).unwrap();
        assert_eq!(id.to_string(), "000000010000000000000000");
        assert_eq!(id.epoch_seconds(), 1);
    }

    #[test]
    fn test_zoned_and_utc_agree() {
        let utc = Utc.with_ymd_and_hms(2022, 5, 1, 12, 0, 0).unwrap();
        let zoned = utc.with_timezone(&FixedOffset::west_opt(5 * 3600).unwrap());
        assert_eq!(object_id(&utc).unwrap(), object_id(&zoned).unwrap());
    }

    #[test]
    fn test_system_time_and_strings() {
        let t = UNIX_EPOCH + Duration::from_secs(1_609_459_200);
        assert_eq!(
            object_id(&t).unwrap(),
            object_id("2021-01-01").unwrap()
        );
        assert_eq!(
            object_id("2021-01-01 00:00:00").unwrap(),
            object_id(&String::from("2021-01-01T08:00:00+08:00")).unwrap()
        );
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(
            object_id("not a date"),
            Err(UtilsError::InvalidTimestamp(_))
        ));
        let before_epoch = UNIX_EPOCH - Duration::from_secs(10);
        assert!(object_id(&before_epoch).is_err());
    }

    #[test]
    fn test_parse_and_timestamp() {
        let id: ObjectId = "5fee66000000000000000000".parse().unwrap();
        assert_eq!(id.timestamp(), Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap());
        assert!("xyz".parse::<ObjectId>().is_err());
    }

    #[test]
    fn test_serde_as_hex_string() {
        let id = ObjectId::from_epoch_seconds(0x5fee6600);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"5fee66000000000000000000\"");
        let back: ObjectId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
