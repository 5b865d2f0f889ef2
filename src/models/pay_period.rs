//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type that defines the date window
//! for a payroll calculation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents a pay period with its inclusive date range.
///
/// A pay period defines the time window for one payroll calculation. The
/// engine validates the range (end not before start, start not in the
/// future) before any data is fetched.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     start: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     end: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2024, 6, 7).unwrap()));
/// assert_eq!(period.calendar_days(), 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end: NaiveDate,
}

impl PayPeriod {
    /// Creates a pay period from its bounds.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Returns the number of calendar days covered, inclusive of both ends.
    ///
    /// A reversed period reports zero days rather than a negative count.
    pub fn calendar_days(&self) -> i64 {
        (self.end - self.start).num_days().max(-1) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn june_first_half() -> PayPeriod {
        PayPeriod::new(date("2024-06-01"), date("2024-06-15"))
    }

    #[test]
    fn test_contains_date_within_period() {
        assert!(june_first_half().contains_date(date("2024-06-07")));
    }

    #[test]
    fn test_contains_date_on_bounds() {
        let period = june_first_half();
        assert!(period.contains_date(period.start));
        assert!(period.contains_date(period.end));
    }

    #[test]
    fn test_contains_date_outside_period() {
        let period = june_first_half();
        assert!(!period.contains_date(date("2024-05-31")));
        assert!(!period.contains_date(date("2024-06-16")));
    }

    #[test]
    fn test_calendar_days_inclusive() {
        assert_eq!(june_first_half().calendar_days(), 15);
    }

    #[test]
    fn test_calendar_days_single_day_period() {
        let period = PayPeriod::new(date("2024-06-01"), date("2024-06-01"));
        assert_eq!(period.calendar_days(), 1);
    }

    #[test]
    fn test_calendar_days_reversed_period_is_zero() {
        let period = PayPeriod::new(date("2024-06-15"), date("2024-06-01"));
        assert_eq!(period.calendar_days(), 0);
    }

    #[test]
    fn test_serialization_round_trip() {
        let period = june_first_half();
        let json = serde_json::to_string(&period).unwrap();
        assert!(json.contains("\"start\":\"2024-06-01\""));
        assert!(json.contains("\"end\":\"2024-06-15\""));

        let deserialized: PayPeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(period, deserialized);
    }
}
