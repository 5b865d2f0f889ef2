//! Payslip result models for the payroll engine.
//!
//! This module contains the [`Payslip`] type and its associated structures
//! that capture all outputs from a payroll calculation, including earnings,
//! deduction breakdowns, totals, and the calculation trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PayPeriod;

/// The allowance components copied from the employee record.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AllowanceBreakdown;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let allowances = AllowanceBreakdown {
///     rice_subsidy: Decimal::from_str("1500.00").unwrap(),
///     phone_allowance: Decimal::from_str("1000.00").unwrap(),
///     clothing_allowance: Decimal::from_str("1000.00").unwrap(),
/// };
/// assert_eq!(allowances.total(), Decimal::from_str("3500.00").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceBreakdown {
    /// Monthly rice subsidy.
    pub rice_subsidy: Decimal,
    /// Monthly phone allowance.
    pub phone_allowance: Decimal,
    /// Monthly clothing allowance.
    pub clothing_allowance: Decimal,
}

impl AllowanceBreakdown {
    /// An all-zero breakdown.
    pub const ZERO: AllowanceBreakdown = AllowanceBreakdown {
        rice_subsidy: Decimal::ZERO,
        phone_allowance: Decimal::ZERO,
        clothing_allowance: Decimal::ZERO,
    };

    /// Returns the sum of all allowance components.
    pub fn total(&self) -> Decimal {
        self.rice_subsidy + self.phone_allowance + self.clothing_allowance
    }
}

/// The deduction components of a payslip.
///
/// Time deductions (late, undertime, unpaid leave) derive from the pay
/// period's records; the statutory contributions (SSS, PhilHealth, Pag-IBIG,
/// withholding tax) derive from the monthly basic salary alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    /// Deduction for late arrivals.
    pub late: Decimal,
    /// Deduction for early departures.
    pub undertime: Decimal,
    /// Deduction for approved unpaid leave days.
    pub unpaid_leave: Decimal,
    /// SSS employee contribution.
    pub sss: Decimal,
    /// PhilHealth employee premium share.
    pub philhealth: Decimal,
    /// Pag-IBIG employee contribution.
    pub pagibig: Decimal,
    /// Monthly withholding tax.
    pub withholding_tax: Decimal,
}

impl DeductionBreakdown {
    /// An all-zero breakdown.
    pub const ZERO: DeductionBreakdown = DeductionBreakdown {
        late: Decimal::ZERO,
        undertime: Decimal::ZERO,
        unpaid_leave: Decimal::ZERO,
        sss: Decimal::ZERO,
        philhealth: Decimal::ZERO,
        pagibig: Decimal::ZERO,
        withholding_tax: Decimal::ZERO,
    };

    /// Returns the sum of all deduction components.
    pub fn total(&self) -> Decimal {
        self.late
            + self.undertime
            + self.unpaid_leave
            + self.sss
            + self.philhealth
            + self.pagibig
            + self.withholding_tax
    }
}

/// A single step in the calculation trace recording a rule application.
///
/// Each step captures the input, output, and a short explanation for one
/// rule, so a payroll officer can reconstruct how a figure was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The statute or policy the rule implements (e.g. "RA 10963 (TRAIN)").
    pub basis: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the outcome.
    pub detail: String,
}

/// Severity of a calculation warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningSeverity {
    /// Informational; no action expected.
    Low,
    /// Worth reviewing before payslip release.
    Medium,
    /// Requires attention (e.g. negative net pay).
    High,
}

/// A warning generated during calculation.
///
/// Warnings indicate conditions that don't prevent calculation but may
/// require attention, such as a degraded optional data source or a negative
/// net pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level.
    pub severity: WarningSeverity,
}

/// The complete trace for a calculation.
///
/// Records every rule decision and warning raised while producing a payslip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<TraceStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<TraceWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of one payroll calculation.
///
/// Built fresh per request and never mutated afterwards; storage of the
/// result is a separate collaborator's concern. All monetary fields are
/// rounded to centavos, and the totals are derived from the rounded
/// components, so `net_pay = gross_pay - total_deductions` holds exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that produced this payslip.
    pub engine_version: String,
    /// The employee the payslip is for.
    pub employee_id: i64,
    /// The pay period covered.
    pub period: PayPeriod,
    /// The monthly basic salary used for the calculation.
    pub monthly_rate: Decimal,
    /// Daily rate (monthly salary over standard working days).
    pub daily_rate: Decimal,
    /// Hourly rate (daily rate over standard working hours).
    pub hourly_rate: Decimal,
    /// Days with a recorded log-in within the period.
    pub days_worked: u32,
    /// Attendance earnings (days worked x daily rate).
    pub gross_earnings: Decimal,
    /// Approved overtime hours within the period.
    pub overtime_hours: Decimal,
    /// Overtime pay at the overtime premium.
    pub overtime_pay: Decimal,
    /// Allowance components and total.
    pub allowances: AllowanceBreakdown,
    /// Deduction components.
    pub deductions: DeductionBreakdown,
    /// Gross pay: earnings + overtime + allowances.
    pub gross_pay: Decimal,
    /// Sum of all deduction components.
    pub total_deductions: Decimal,
    /// Net pay: gross pay minus total deductions. May be negative.
    pub net_pay: Decimal,
    /// Complete trace of calculation decisions.
    pub trace: CalculationTrace,
}
