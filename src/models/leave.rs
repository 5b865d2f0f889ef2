//! Leave request model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether a leave request is paid or unpaid.
///
/// Only unpaid leave affects the payslip; paid leave is absorbed by the
/// monthly salary and carries no deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Leave covered by salary. No payroll effect.
    Paid,
    /// Leave without pay. Each day deducts one daily rate.
    Unpaid,
}

/// A leave request filed by an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// The employee who filed the request.
    pub employee_id: i64,
    /// First day of leave.
    pub start_date: NaiveDate,
    /// Last day of leave, inclusive.
    pub end_date: NaiveDate,
    /// Paid or unpaid.
    pub leave_type: LeaveType,
    /// Number of leave days requested.
    pub days: u32,
    /// Whether the request has been approved.
    pub approved: bool,
}

impl LeaveRequest {
    /// Returns true when this request reduces pay: approved, unpaid, and
    /// covering at least one day.
    pub fn is_deductible(&self) -> bool {
        self.approved && self.leave_type == LeaveType::Unpaid && self.days > 0
    }

    /// Returns true when the leave overlaps the inclusive date range.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date <= end && self.end_date >= start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn request(leave_type: LeaveType, days: u32, approved: bool) -> LeaveRequest {
        LeaveRequest {
            employee_id: 10001,
            start_date: date(2024, 6, 3),
            end_date: date(2024, 6, 5),
            leave_type,
            days,
            approved,
        }
    }

    #[test]
    fn test_approved_unpaid_leave_is_deductible() {
        assert!(request(LeaveType::Unpaid, 3, true).is_deductible());
    }

    #[test]
    fn test_paid_leave_is_not_deductible() {
        assert!(!request(LeaveType::Paid, 3, true).is_deductible());
    }

    #[test]
    fn test_unapproved_leave_is_not_deductible() {
        assert!(!request(LeaveType::Unpaid, 3, false).is_deductible());
    }

    #[test]
    fn test_zero_day_leave_is_not_deductible() {
        assert!(!request(LeaveType::Unpaid, 0, true).is_deductible());
    }

    #[test]
    fn test_overlap_inside_range() {
        let req = request(LeaveType::Unpaid, 3, true);
        assert!(req.overlaps(date(2024, 6, 1), date(2024, 6, 15)));
    }

    #[test]
    fn test_overlap_partial() {
        let req = request(LeaveType::Unpaid, 3, true);
        assert!(req.overlaps(date(2024, 6, 5), date(2024, 6, 10)));
        assert!(req.overlaps(date(2024, 5, 20), date(2024, 6, 3)));
    }

    #[test]
    fn test_no_overlap_outside_range() {
        let req = request(LeaveType::Unpaid, 3, true);
        assert!(!req.overlaps(date(2024, 6, 6), date(2024, 6, 15)));
        assert!(!req.overlaps(date(2024, 5, 1), date(2024, 6, 2)));
    }

    #[test]
    fn test_leave_type_serialization() {
        assert_eq!(
            serde_json::to_string(&LeaveType::Unpaid).unwrap(),
            "\"unpaid\""
        );
        let parsed: LeaveType = serde_json::from_str("\"paid\"").unwrap();
        assert_eq!(parsed, LeaveType::Paid);
    }

    #[test]
    fn test_request_round_trip() {
        let req = request(LeaveType::Unpaid, 3, true);
        let json = serde_json::to_string(&req).unwrap();
        let parsed: LeaveRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req, parsed);
    }
}
