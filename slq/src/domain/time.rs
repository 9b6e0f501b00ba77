//! Departure time handling.
//!
//! SL reports expected departures as local civil time without an offset,
//! e.g. "2025-09-09T13:33:30". This module extracts the clock time for
//! display and computes how many whole minutes remain until departure.

use chrono::{Local, NaiveDateTime, TimeZone};

/// Format of the provider's `expected` field.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Error returned when a timestamp does not match `YYYY-MM-DDTHH:MM:SS`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {input:?}: {reason}")]
pub struct TimeError {
    input: String,
    reason: String,
}

/// Parse a provider timestamp into a naive local date-time.
///
/// # Examples
///
/// ```
/// use slq::domain::parse_timestamp;
///
/// assert!(parse_timestamp("2025-09-09T13:33:30").is_ok());
///
/// // Offsets, fractional seconds and other layouts are rejected
/// assert!(parse_timestamp("2025-09-09T13:33:30Z").is_err());
/// assert!(parse_timestamp("2025-09-09 13:33:30").is_err());
/// assert!(parse_timestamp("13:33").is_err());
/// assert!(parse_timestamp("2025-9-9T13:33:30").is_err());
/// ```
pub fn parse_timestamp(timestamp: &str) -> Result<NaiveDateTime, TimeError> {
    if !has_timestamp_shape(timestamp) {
        return Err(TimeError {
            input: timestamp.to_string(),
            reason: "expected YYYY-MM-DDTHH:MM:SS".to_string(),
        });
    }
    NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).map_err(|e| TimeError {
        input: timestamp.to_string(),
        reason: e.to_string(),
    })
}

/// Exactly 19 ASCII bytes laid out as `YYYY-MM-DDTHH:MM:SS`.
///
/// chrono accepts unpadded fields, signed years and stray spaces for the
/// same format string, so the layout is checked first.
fn has_timestamp_shape(timestamp: &str) -> bool {
    let bytes = timestamp.as_bytes();
    bytes.len() == 19
        && bytes.iter().enumerate().all(|(i, &b)| match i {
            4 | 7 => b == b'-',
            10 => b == b'T',
            13 | 16 => b == b':',
            _ => b.is_ascii_digit(),
        })
}

/// Extract the zero-padded "HH:MM" clock time from a timestamp.
///
/// Callers display a placeholder such as "??:??" on error rather than
/// dropping the departure.
///
/// # Examples
///
/// ```
/// use slq::domain::parse_clock_time;
///
/// assert_eq!(parse_clock_time("2025-09-09T08:05:30").unwrap(), "08:05");
/// assert!(parse_clock_time("soon").is_err());
/// ```
pub fn parse_clock_time(timestamp: &str) -> Result<String, TimeError> {
    let expected = parse_timestamp(timestamp)?;
    Ok(expected.format("%H:%M").to_string())
}

/// Whole minutes from the current wall-clock time until `timestamp`.
///
/// Both moments are taken in the local time zone. Departures that are due
/// or already past read as 0, never negative.
pub fn minutes_until(timestamp: &str) -> Result<u32, TimeError> {
    let expected = parse_timestamp(timestamp)?;
    let now = Local::now();

    // Resolve DST-ambiguous local times to the earlier instant; times that
    // fall in a DST gap are compared on the naive clock instead.
    let seconds = match Local.from_local_datetime(&expected).earliest() {
        Some(expected) => expected.signed_duration_since(now).num_seconds(),
        None => expected
            .signed_duration_since(now.naive_local())
            .num_seconds(),
    };

    Ok(whole_minutes(seconds))
}

/// Whole minutes from `now` until `timestamp`, on the naive local clock.
///
/// Deterministic counterpart of [`minutes_until`] for callers that pin
/// the current time.
///
/// # Examples
///
/// ```
/// use slq::domain::{minutes_until_at, parse_timestamp};
///
/// let now = parse_timestamp("2025-01-01T10:00:00").unwrap();
/// assert_eq!(minutes_until_at("2025-01-01T10:05:59", now).unwrap(), 5);
/// assert_eq!(minutes_until_at("2025-01-01T09:58:30", now).unwrap(), 0);
/// ```
pub fn minutes_until_at(timestamp: &str, now: NaiveDateTime) -> Result<u32, TimeError> {
    let expected = parse_timestamp(timestamp)?;
    Ok(whole_minutes(
        expected.signed_duration_since(now).num_seconds(),
    ))
}

/// Floor a signed number of seconds to non-negative whole minutes.
fn whole_minutes(seconds: i64) -> u32 {
    if seconds <= 0 {
        return 0;
    }
    u32::try_from(seconds / 60).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(s: &str) -> NaiveDateTime {
        parse_timestamp(s).unwrap()
    }

    #[test]
    fn clock_time_zero_padded() {
        assert_eq!(parse_clock_time("2025-09-09T13:33:30").unwrap(), "13:33");
        assert_eq!(parse_clock_time("2025-09-09T00:05:00").unwrap(), "00:05");
        assert_eq!(parse_clock_time("2025-09-09T09:00:59").unwrap(), "09:00");
    }

    #[test]
    fn clock_time_rejects_malformed() {
        assert!(parse_clock_time("").is_err());
        assert!(parse_clock_time("13:33").is_err());
        assert!(parse_clock_time("2025-09-09").is_err());
        assert!(parse_clock_time("2025-13-01T10:00:00").is_err());
        assert!(parse_clock_time("2025-09-09T25:00:00").is_err());
        assert!(parse_clock_time("2025-09-09T13:33:30+02:00").is_err());
        assert!(parse_clock_time("2025-09-09T13:33:30.5").is_err());
    }

    #[test]
    fn clock_time_rejects_loose_layouts() {
        assert!(parse_clock_time("2025-1-1T1:5:0").is_err());
        assert!(parse_clock_time("2025-01-01T 10:05:00").is_err());
        assert!(parse_clock_time("+2025-01-01T10:05:00").is_err());
        assert!(parse_clock_time(" 2025-01-01T10:05:00").is_err());
        assert!(parse_clock_time("2025-01-01T10:05:00 ").is_err());
        assert!(parse_clock_time("2025-01-01t10:05:00").is_err());
        assert!(parse_clock_time("２０25-01-01T10:05:00").is_err());
    }

    #[test]
    fn error_mentions_input() {
        let err = parse_clock_time("later").unwrap_err();
        assert!(err.to_string().contains("\"later\""));
    }

    #[test]
    fn minutes_floor_toward_zero() {
        let now = at("2025-01-01T10:00:00");
        assert_eq!(minutes_until_at("2025-01-01T10:05:00", now).unwrap(), 5);
        assert_eq!(minutes_until_at("2025-01-01T10:05:59", now).unwrap(), 5);
        assert_eq!(minutes_until_at("2025-01-01T10:00:59", now).unwrap(), 0);
    }

    #[test]
    fn past_and_present_read_as_zero() {
        let now = at("2025-01-01T10:00:00");
        assert_eq!(minutes_until_at("2025-01-01T10:00:00", now).unwrap(), 0);
        assert_eq!(minutes_until_at("2025-01-01T09:58:30", now).unwrap(), 0);
        assert_eq!(minutes_until_at("2024-12-31T10:00:00", now).unwrap(), 0);
    }

    #[test]
    fn minutes_cross_midnight() {
        let now = at("2025-01-01T23:55:00");
        assert_eq!(minutes_until_at("2025-01-02T00:10:00", now).unwrap(), 15);
    }

    #[test]
    fn minutes_reject_malformed() {
        let now = at("2025-01-01T10:00:00");
        assert!(minutes_until_at("10:05", now).is_err());
        assert!(minutes_until("not a time").is_err());
    }

    #[test]
    fn wall_clock_past_is_zero() {
        let past = Local::now().naive_local() - Duration::seconds(90);
        let timestamp = past.format(TIMESTAMP_FORMAT).to_string();
        assert_eq!(minutes_until(&timestamp).unwrap(), 0);
    }

    #[test]
    fn wall_clock_future() {
        let later = Local::now().naive_local() + Duration::minutes(30);
        let timestamp = later.format(TIMESTAMP_FORMAT).to_string();
        let minutes = minutes_until(&timestamp).unwrap();
        assert!((29..=30).contains(&minutes), "got {minutes}");
    }
}
