//! Data source traits for payroll collaborators.
//!
//! The engine reads employees, attendance, overtime, and leave through these
//! traits and never writes back. Employee and attendance sources are
//! required; overtime and leave sources are optional and a failure in them
//! degrades the calculation to zero for that component instead of aborting.

pub mod memory;

pub use memory::InMemoryDataSet;

use chrono::NaiveDate;

use crate::error::SourceError;
use crate::models::{AttendanceRecord, Employee, LeaveRequest, OvertimeRecord};

/// Lookup of employee master data.
pub trait EmployeeDirectory: Send + Sync {
    /// Finds an employee by id.
    ///
    /// Returns `Ok(None)` when no employee with that id exists; `Err` only
    /// when the source itself failed (e.g. an unreadable file).
    fn find_by_id(&self, employee_id: i64) -> Result<Option<Employee>, SourceError>;
}

/// Access to daily attendance records.
pub trait AttendanceSource: Send + Sync {
    /// Returns the attendance records for an employee with dates inside the
    /// inclusive range, in any order.
    fn records_in_range(
        &self,
        employee_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>, SourceError>;
}

/// Access to overtime records.
pub trait OvertimeSource: Send + Sync {
    /// Returns the approved overtime records for an employee overlapping the
    /// inclusive range.
    fn approved_in_range(
        &self,
        employee_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<OvertimeRecord>, SourceError>;
}

/// Access to leave requests.
pub trait LeaveSource: Send + Sync {
    /// Returns the approved leave requests for an employee overlapping the
    /// inclusive range.
    fn approved_in_range(
        &self,
        employee_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<LeaveRequest>, SourceError>;
}
