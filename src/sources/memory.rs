//! In-memory data set backing all four source traits.
//!
//! Intended for tests, demos, and small deployments that load master data
//! from flat files at startup. Filtering semantics match what a database
//! query would return: attendance by record date, overtime and leave by
//! range overlap, approved records only.

use chrono::NaiveDate;

use crate::error::SourceError;
use crate::models::{AttendanceRecord, Employee, LeaveRequest, OvertimeRecord};

use super::{AttendanceSource, EmployeeDirectory, LeaveSource, OvertimeSource};

/// A complete payroll data set held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataSet {
    employees: Vec<Employee>,
    attendance: Vec<AttendanceRecord>,
    overtime: Vec<OvertimeRecord>,
    leave: Vec<LeaveRequest>,
}

impl InMemoryDataSet {
    /// Creates an empty data set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the employee roster.
    pub fn with_employees(mut self, employees: Vec<Employee>) -> Self {
        self.employees = employees;
        self
    }

    /// Replaces the attendance records.
    pub fn with_attendance(mut self, attendance: Vec<AttendanceRecord>) -> Self {
        self.attendance = attendance;
        self
    }

    /// Replaces the overtime records.
    pub fn with_overtime(mut self, overtime: Vec<OvertimeRecord>) -> Self {
        self.overtime = overtime;
        self
    }

    /// Replaces the leave requests.
    pub fn with_leave(mut self, leave: Vec<LeaveRequest>) -> Self {
        self.leave = leave;
        self
    }

    /// Adds a single employee.
    pub fn add_employee(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    /// Adds a single attendance record.
    pub fn add_attendance(&mut self, record: AttendanceRecord) {
        self.attendance.push(record);
    }

    /// Adds a single overtime record.
    pub fn add_overtime(&mut self, record: OvertimeRecord) {
        self.overtime.push(record);
    }

    /// Adds a single leave request.
    pub fn add_leave(&mut self, request: LeaveRequest) {
        self.leave.push(request);
    }
}

impl EmployeeDirectory for InMemoryDataSet {
    fn find_by_id(&self, employee_id: i64) -> Result<Option<Employee>, SourceError> {
        Ok(self
            .employees
            .iter()
            .find(|e| e.id == employee_id)
            .cloned())
    }
}

impl AttendanceSource for InMemoryDataSet {
    fn records_in_range(
        &self,
        employee_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>, SourceError> {
        Ok(self
            .attendance
            .iter()
            .filter(|r| r.employee_id == employee_id && r.date >= start && r.date <= end)
            .cloned()
            .collect())
    }
}

impl OvertimeSource for InMemoryDataSet {
    fn approved_in_range(
        &self,
        employee_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<OvertimeRecord>, SourceError> {
        Ok(self
            .overtime
            .iter()
            .filter(|r| r.employee_id == employee_id && r.approved && r.overlaps(start, end))
            .cloned()
            .collect())
    }
}

impl LeaveSource for InMemoryDataSet {
    fn approved_in_range(
        &self,
        employee_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<LeaveRequest>, SourceError> {
        Ok(self
            .leave
            .iter()
            .filter(|r| r.employee_id == employee_id && r.approved && r.overlaps(start, end))
            .cloned()
            .collect())
    }
}
