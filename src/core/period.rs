//! Month handling shared by transaction listing, budgets and the summary.
//!
//! A month is written `YYYY-MM` and stands for the half-open UTC range from
//! midnight on its first day up to midnight on the first day of the next month.

use crate::errors::{Error, Result};
use chrono::{DateTime, Months, NaiveDate, NaiveTime, Utc};

/// Half-open timestamp range `[gte, lt)` covering one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    /// First instant of the month (inclusive)
    pub gte: DateTime<Utc>,
    /// First instant of the following month (exclusive)
    pub lt: DateTime<Utc>,
}

/// Parses a `YYYY-MM` string into the first day of that month.
///
/// Only the exact shape is accepted: four digits, a dash, two digits, with the
/// month between 01 and 12.
pub fn parse_month(month: &str) -> Result<NaiveDate> {
    let invalid = || Error::InvalidMonth {
        month: month.to_string(),
    };

    let bytes = month.as_bytes();
    let well_formed = bytes.len() == 7
        && bytes[4] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || b.is_ascii_digit());
    if !well_formed {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d").map_err(|_| invalid())
}

/// Builds the `[first-of-month, first-of-next-month)` range for `month`.
///
/// December rolls over to January 1 of the following year.
pub fn build_month_range(month: &str) -> Result<MonthRange> {
    let start = parse_month(month)?;
    let end = start
        .checked_add_months(Months::new(1))
        .ok_or_else(|| Error::InvalidMonth {
            month: month.to_string(),
        })?;

    Ok(MonthRange {
        gte: start.and_time(NaiveTime::MIN).and_utc(),
        lt: end.and_time(NaiveTime::MIN).and_utc(),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use chrono::{Datelike, TimeZone};

    #[test]
    fn test_range_for_regular_month() {
        let range = build_month_range("2024-03").unwrap();
        assert_eq!(range.gte, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
        assert_eq!(range.lt, Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_december_rolls_over_to_next_year() {
        let range = build_month_range("2023-12").unwrap();
        assert_eq!(range.gte, Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap());
        assert_eq!(range.lt, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_every_month_spans_exactly_one_calendar_month() {
        for year in [1999, 2024, 2025] {
            for month in 1..=12u32 {
                let range = build_month_range(&format!("{year}-{month:02}")).unwrap();
                let start = range.gte.date_naive();
                let end = range.lt.date_naive();

                assert_eq!(start.day(), 1);
                assert_eq!(end.day(), 1);
                assert_eq!(start.checked_add_months(Months::new(1)).unwrap(), end);
                if month == 12 {
                    assert_eq!((end.year(), end.month()), (year + 1, 1));
                } else {
                    assert_eq!((end.year(), end.month()), (year, month + 1));
                }
            }
        }
    }

    #[test]
    fn test_range_is_half_open() {
        let range = build_month_range("2024-02").unwrap();
        assert_eq!(range.gte, Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap());
        assert_eq!(range.lt, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_invalid_months_are_rejected() {
        for month in [
            "2024-13", "2024-00", "abc", "2024", "2024-1", "24-01", "2024/01", " 2024-01",
            "2024-01-01", "", "20x4-01",
        ] {
            let result = build_month_range(month);
            assert!(
                matches!(result, Err(Error::InvalidMonth { .. })),
                "expected {month:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_parse_month_returns_first_day() {
        let date = parse_month("2025-07").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
    }
}
