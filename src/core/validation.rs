//! Field checks applied before anything is written to the store.

use crate::errors::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Accepted layouts for timestamps without an offset; these are read as UTC.
const NAIVE_TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Ensures `value` is a finite number strictly greater than zero.
pub fn require_positive(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::validation(format!("{field} must be greater than 0")))
    }
}

/// Ensures `value` contains something other than whitespace.
pub fn require_non_blank<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        Err(Error::validation(format!("{field} must not be empty")))
    } else {
        Ok(value)
    }
}

/// Parses an ISO 8601 timestamp.
///
/// Accepts RFC 3339 with an offset (converted to UTC), a date-time without an
/// offset (`T` or space separated, optional fractional seconds) and a bare
/// `YYYY-MM-DD` date (midnight). Values without an offset are taken as UTC.
pub fn parse_timestamp(date: &str) -> Result<DateTime<Utc>> {
    let trimmed = date.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_TIMESTAMP_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(parsed.and_utc());
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(|day| day.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| Error::InvalidDate {
            date: date.to_string(),
        })
}

/// Resolves a caller-supplied result limit.
///
/// `None` falls back to `default`; a value outside `1..=max` is rejected.
pub fn bounded_limit(limit: Option<u64>, default: Option<u64>, max: u64) -> Result<Option<u64>> {
    match limit {
        None => Ok(default),
        Some(value) if (1..=max).contains(&value) => Ok(Some(value)),
        Some(_) => Err(Error::validation(format!(
            "limit must be between 1 and {max}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("amount", 0.01).unwrap(), 0.01);
        assert!(matches!(
            require_positive("amount", 0.0),
            Err(Error::Validation { .. })
        ));
        assert!(require_positive("amount", -5.0).is_err());
        assert!(require_positive("amount", f64::NAN).is_err());
        assert!(require_positive("amount", f64::INFINITY).is_err());
    }

    #[test]
    fn test_require_positive_names_the_field() {
        let err = require_positive("limit", 0.0).unwrap_err();
        assert_eq!(err.to_string(), "limit must be greater than 0");
    }

    #[test]
    fn test_require_non_blank() {
        assert_eq!(require_non_blank("name", "Rent").unwrap(), "Rent");
        assert!(require_non_blank("name", "").is_err());
        assert!(require_non_blank("name", "   ").is_err());
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 5, 17, 14, 30, 0).unwrap();

        assert_eq!(parse_timestamp("2024-05-17T14:30:00Z").unwrap(), expected);
        assert_eq!(parse_timestamp("2024-05-17T16:30:00+02:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2024-05-17T14:30:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2024-05-17 14:30:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2024-05-17T14:30").unwrap(), expected);
        assert_eq!(
            parse_timestamp("2024-05-17").unwrap(),
            Utc.with_ymd_and_hms(2024, 5, 17, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_timestamp_keeps_fractional_seconds() {
        let parsed = parse_timestamp("2024-05-17T14:30:00.250").unwrap();
        assert_eq!(parsed.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        for date in ["yesterday", "2024-13-01", "2024-02-30", "17/05/2024", ""] {
            assert!(
                matches!(parse_timestamp(date), Err(Error::InvalidDate { .. })),
                "expected {date:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_bounded_limit() {
        assert_eq!(bounded_limit(None, Some(100), 1000).unwrap(), Some(100));
        assert_eq!(bounded_limit(None, None, 200).unwrap(), None);
        assert_eq!(bounded_limit(Some(1), None, 200).unwrap(), Some(1));
        assert_eq!(bounded_limit(Some(200), None, 200).unwrap(), Some(200));
        assert!(bounded_limit(Some(0), None, 200).is_err());
        assert!(bounded_limit(Some(201), None, 200).is_err());
    }
}
