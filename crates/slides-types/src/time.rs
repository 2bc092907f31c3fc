//! Wall-clock timestamps in the service's stored string format.
//!
//! Every date persisted by the service is a 14-character decimal string,
//! `YYYYMMDDHHMMSS`, rendered at a fixed UTC+9 offset regardless of server
//! locale. The offset is fixed rather than zone-database-driven so that the
//! rendering never shifts under DST rules or tzdata updates.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Seconds east of UTC for the rendering offset (UTC+9).
const UTC_OFFSET_SECS: i32 = 9 * 60 * 60;

/// strftime pattern for the stored form.
const FORMAT: &str = "%Y%m%d%H%M%S";

/// Length of the stored form in bytes.
const FORMAT_LEN: usize = 14;

/// A second-precision timestamp in the stored `YYYYMMDDHHMMSS` form.
///
/// Ordering is derived from the string representation, which for this format
/// coincides with chronological order.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    /// The current wall-clock time.
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Render an explicit instant. This is the seam tests use to pin the
    /// clock.
    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        let offset = FixedOffset::east_opt(UTC_OFFSET_SECS).expect("static offset is in range");
        Self(at.with_timezone(&offset).format(FORMAT).to_string())
    }

    /// Validate and wrap an already-rendered timestamp string.
    pub fn parse(value: &str) -> Result<Self, TypeError> {
        if value.len() != FORMAT_LEN || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TypeError::InvalidTimestamp {
                value: value.to_string(),
                reason: format!("expected {FORMAT_LEN} decimal digits"),
            });
        }
        NaiveDateTime::parse_from_str(value, FORMAT).map_err(|e| TypeError::InvalidTimestamp {
            value: value.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self(value.to_string()))
    }

    /// The stored string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn renders_at_utc_plus_nine() {
        // 15:00 UTC on New Year's Eve is already midnight on New Year's Day
        // nine hours east.
        let at = Utc.with_ymd_and_hms(2021, 12, 31, 15, 0, 0).unwrap();
        assert_eq!(Timestamp::from_datetime(at).as_str(), "20220101000000");
    }

    #[test]
    fn now_is_fourteen_digits() {
        let ts = Timestamp::now();
        assert_eq!(ts.as_str().len(), 14);
        assert!(ts.as_str().bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn string_order_is_chronological_order() {
        let earlier = Timestamp::from_datetime(Utc.with_ymd_and_hms(2022, 3, 1, 0, 0, 0).unwrap());
        let later = Timestamp::from_datetime(Utc.with_ymd_and_hms(2022, 3, 1, 0, 0, 1).unwrap());
        assert!(earlier < later);
    }

    #[test]
    fn parse_accepts_stored_form() {
        let ts = Timestamp::parse("20220101000000").unwrap();
        assert_eq!(ts.as_str(), "20220101000000");
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(Timestamp::parse("2022").is_err());
    }

    #[test]
    fn parse_rejects_non_digits() {
        assert!(Timestamp::parse("2022010100000x").is_err());
    }

    #[test]
    fn parse_rejects_impossible_date() {
        // Month 13 is fourteen digits but not a date.
        assert!(Timestamp::parse("20221301000000").is_err());
    }

    #[test]
    fn serde_is_transparent() {
        let ts = Timestamp::parse("20220101000000").unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"20220101000000\"");
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }
}
