//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod employee;
mod leave;
mod overtime;
mod pay_period;
mod payslip;

pub use attendance::AttendanceRecord;
pub use employee::{Employee, EmploymentStatus, Role};
pub use leave::{LeaveRequest, LeaveType};
pub use overtime::OvertimeRecord;
pub use pay_period::PayPeriod;
pub use payslip::{
    AllowanceBreakdown, CalculationTrace, DeductionBreakdown, Payslip, TraceStep, TraceWarning,
    WarningSeverity,
};
