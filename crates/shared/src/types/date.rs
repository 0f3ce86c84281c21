//! Calendar dates and inclusive date ranges.
//!
//! Every record is stamped with the shop's local calendar day, stored as
//! `YYYY-MM-DD`. List and report endpoints filter on an optional inclusive
//! range over that column.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returns today's date in the server's local timezone.
#[must_use]
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Error returned when a date range is inverted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid date range: start {start} is after end {end}")]
pub struct DateRangeError {
    /// Requested start date.
    pub start: NaiveDate,
    /// Requested end date.
    pub end: NaiveDate,
}

/// Inclusive date range with optional bounds.
///
/// A missing bound is unbounded on that side, so `DateRange::default()`
/// matches every date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DateRange {
    /// Creates a range, rejecting `start > end`.
    ///
    /// # Errors
    ///
    /// Returns `DateRangeError` when both bounds are present and inverted.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self, DateRangeError> {
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(DateRangeError { start, end });
            }
        }
        Ok(Self { start, end })
    }

    /// Range covering exactly one day.
    #[must_use]
    pub const fn single_day(day: NaiveDate) -> Self {
        Self {
            start: Some(day),
            end: Some(day),
        }
    }

    /// Inclusive lower bound.
    #[must_use]
    pub const fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    /// Inclusive upper bound.
    #[must_use]
    pub const fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Returns true if `date` falls inside the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|s| date >= s) && self.end.is_none_or(|e| date <= e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_default_range_is_unbounded() {
        let range = DateRange::default();
        assert!(range.contains(d("1999-01-01")));
        assert!(range.contains(d("2099-12-31")));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = DateRange::new(Some(d("2026-10-02")), Some(d("2026-10-01"))).unwrap_err();
        assert_eq!(err.start, d("2026-10-02"));
        assert_eq!(err.end, d("2026-10-01"));
        assert_eq!(
            err.to_string(),
            "Invalid date range: start 2026-10-02 is after end 2026-10-01"
        );
    }

    #[rstest]
    #[case(Some("2026-10-01"), Some("2026-10-31"), "2026-10-01", true)]
    #[case(Some("2026-10-01"), Some("2026-10-31"), "2026-10-31", true)]
    #[case(Some("2026-10-01"), Some("2026-10-31"), "2026-11-01", false)]
    #[case(Some("2026-10-01"), None, "2030-01-01", true)]
    #[case(None, Some("2026-10-01"), "2026-10-02", false)]
    fn test_contains_is_inclusive(
        #[case] start: Option<&str>,
        #[case] end: Option<&str>,
        #[case] date: &str,
        #[case] expected: bool,
    ) {
        let range = DateRange::new(start.map(d), end.map(d)).unwrap();
        assert_eq!(range.contains(d(date)), expected);
    }

    #[test]
    fn test_single_day() {
        let range = DateRange::single_day(d("2026-10-17"));
        assert!(range.contains(d("2026-10-17")));
        assert!(!range.contains(d("2026-10-16")));
        assert_eq!(range.start(), range.end());
    }
}
