//! Overtime record model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An overtime filing covering a span of dates.
///
/// Only approved records with positive hours contribute overtime pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeRecord {
    /// The employee who rendered the overtime.
    pub employee_id: i64,
    /// First day covered by the filing.
    pub start_date: NaiveDate,
    /// Last day covered by the filing, inclusive.
    pub end_date: NaiveDate,
    /// Total overtime hours rendered.
    pub hours: Decimal,
    /// Whether the filing has been approved.
    pub approved: bool,
}

impl OvertimeRecord {
    /// Returns true when this record contributes pay: approved with
    /// positive hours.
    pub fn is_payable(&self) -> bool {
        self.approved && self.hours > Decimal::ZERO
    }

    /// Returns true when the filing overlaps the inclusive date range.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date <= end && self.end_date >= start
    }
}
