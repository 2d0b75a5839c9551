use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Wire format for timestamp strings: `YYYY-MM-DDTHH:MM:SS`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Wall-clock timestamp with second resolution.
///
/// Every store operation takes the query time as an explicit `Timestamp`
/// parameter; nothing reads the system clock. This keeps any sequence of
/// operations replayable: the same inputs always produce the same state.
///
/// Ordering is plain chronological order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Create a timestamp from calendar and clock components.
    ///
    /// Returns `None` for out-of-range components (month 13, hour 25, ...).
    pub fn from_ymd_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, min, sec))
            .map(Self)
    }

    /// The underlying datetime.
    pub fn as_datetime(&self) -> &NaiveDateTime {
        &self.0
    }

    /// This timestamp advanced by `seconds`, saturating at the maximum
    /// representable datetime instead of overflowing.
    pub fn saturating_add_seconds(&self, seconds: u64) -> Self {
        let delta = i64::try_from(seconds).unwrap_or(i64::MAX);
        let advanced = Duration::try_seconds(delta)
            .and_then(|d| self.0.checked_add_signed(d))
            .unwrap_or(NaiveDateTime::MAX);
        Self(advanced)
    }

    /// Returns `true` if this timestamp is strictly after `other`.
    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    /// Returns `true` if this timestamp is strictly before `other`.
    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }
}

/// Failure to parse a wire-format timestamp string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {input:?}: expected YYYY-MM-DDTHH:MM:SS")]
pub struct TimestampParseError {
    input: String,
    #[source]
    source: chrono::ParseError,
}

impl FromStr for Timestamp {
    type Err = TimestampParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
            .map(Self)
            .map_err(|source| TimestampParseError {
                input: s.to_string(),
                source,
            })
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    #[test]
    fn parse_wire_format() {
        let parsed = ts("2021-07-01T12:00:00");
        assert_eq!(
            parsed,
            Timestamp::from_ymd_hms(2021, 7, 1, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("not-a-timestamp".parse::<Timestamp>().is_err());
        assert!("2021-07-01 12:00:00".parse::<Timestamp>().is_err());
        assert!("2021-13-01T12:00:00".parse::<Timestamp>().is_err());
    }

    #[test]
    fn display_roundtrips_wire_format() {
        let raw = "2021-07-01T12:00:00";
        assert_eq!(ts(raw).to_string(), raw);
    }

    #[test]
    fn from_ymd_hms_rejects_out_of_range() {
        assert!(Timestamp::from_ymd_hms(2021, 13, 1, 0, 0, 0).is_none());
        assert!(Timestamp::from_ymd_hms(2021, 2, 30, 0, 0, 0).is_none());
        assert!(Timestamp::from_ymd_hms(2021, 7, 1, 25, 0, 0).is_none());
    }

    #[test]
    fn ordering_is_chronological() {
        let earlier = ts("2021-07-01T12:00:00");
        let later = ts("2021-07-01T12:00:01");
        assert!(earlier < later);
        assert!(later.is_after(&earlier));
        assert!(earlier.is_before(&later));
        assert!(!earlier.is_after(&earlier));
    }

    #[test]
    fn add_seconds() {
        let base = ts("2021-07-01T12:00:00");
        assert_eq!(base.saturating_add_seconds(0), base);
        assert_eq!(base.saturating_add_seconds(1), ts("2021-07-01T12:00:01"));
        assert_eq!(base.saturating_add_seconds(3600), ts("2021-07-01T13:00:00"));
    }

    #[test]
    fn add_seconds_saturates_instead_of_overflowing() {
        let base = ts("2021-07-01T12:00:00");
        let far = base.saturating_add_seconds(u64::MAX);
        assert!(far.is_after(&base));
        // Adding more on top stays at the ceiling.
        assert_eq!(far.saturating_add_seconds(u64::MAX), far);
    }

    #[test]
    fn serde_roundtrip() {
        let stamp = ts("2021-07-01T12:00:00");
        let json = serde_json::to_string(&stamp).unwrap();
        let parsed: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(stamp, parsed);
    }
}
