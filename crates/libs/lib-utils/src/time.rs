//! # Time Utilities
//!
//! Time formatting and manipulation using chrono, plus conversions to and
//! from the protobuf well-known `Timestamp` wire type.
//!
//! Optional (nullable) timestamps map through `Option::map`:
//!
//! ```
//! use lib_utils::time::{now_utc, to_proto_timestamp};
//!
//! let maybe_deleted_at = Some(now_utc());
//! let wire = maybe_deleted_at.map(to_proto_timestamp);
//! assert!(wire.is_some());
//! ```

use chrono::{DateTime, Utc};
use prost_types::Timestamp;

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Format time as RFC3339 string.
pub fn format_time(time: DateTime<Utc>) -> String {
    time.to_rfc3339()
}

/// Parse RFC3339 string to UTC DateTime.
pub fn parse_utc(moment: &str) -> Result<DateTime<Utc>, Error> {
    DateTime::parse_from_rfc3339(moment)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| Error::FailToDateParse(moment.to_string()))
}

/// Convert a UTC time to the protobuf `Timestamp` wire type.
pub fn to_proto_timestamp(time: DateTime<Utc>) -> Timestamp {
    Timestamp {
        seconds: time.timestamp(),
        nanos: time.timestamp_subsec_nanos() as i32,
    }
}

/// Convert a protobuf `Timestamp` back to a UTC time.
///
/// Fails when the seconds are outside chrono's representable range or the
/// nanos field is not in `0..=999_999_999`.
pub fn from_proto_timestamp(ts: &Timestamp) -> Result<DateTime<Utc>, Error> {
    // chrono treats nanos >= 1s as a leap second on :59 inputs; the wire
    // contract allows no such values, so range-check before converting.
    if !(0..=999_999_999).contains(&ts.nanos) {
        return Err(Error::TimestampOutOfRange {
            seconds: ts.seconds,
            nanos: ts.nanos,
        });
    }
    DateTime::from_timestamp(ts.seconds, ts.nanos as u32).ok_or(Error::TimestampOutOfRange {
        seconds: ts.seconds,
        nanos: ts.nanos,
    })
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    FailToDateParse(String),
    TimestampOutOfRange { seconds: i64, nanos: i32 },
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format_round_trip() {
        let moment = "2026-08-28T12:34:56+00:00";
        let parsed = parse_utc(moment).expect("RFC3339 input should parse");
        assert_eq!(format_time(parsed), moment);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_utc("yesterday-ish").is_err());
    }

    #[test]
    fn test_proto_timestamp_round_trip() {
        let now = now_utc();
        let restored = from_proto_timestamp(&to_proto_timestamp(now))
            .expect("converted timestamp should restore");
        assert_eq!(restored, now);
    }

    #[test]
    fn test_proto_timestamp_rejects_negative_nanos() {
        let ts = Timestamp { seconds: 0, nanos: -1 };
        assert!(from_proto_timestamp(&ts).is_err());
    }

    #[test]
    fn test_proto_timestamp_rejects_overflowing_nanos() {
        let ts = Timestamp { seconds: 0, nanos: 1_000_000_000 };
        assert!(from_proto_timestamp(&ts).is_err());
    }

    #[test]
    fn test_proto_timestamp_rejects_leap_second_nanos() {
        // Overflowing nanos on a :59 second would otherwise slip through as
        // a chrono leap second.
        let ts = Timestamp { seconds: 59, nanos: 1_500_000_000 };
        assert!(from_proto_timestamp(&ts).is_err());
    }

    #[test]
    fn test_optional_timestamp_maps_through_option() {
        let none: Option<DateTime<Utc>> = None;
        assert!(none.map(to_proto_timestamp).is_none());
    }
}
