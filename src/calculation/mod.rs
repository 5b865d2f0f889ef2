//! Calculation logic for the payroll engine.
//!
//! This module contains all the calculation functions for producing a
//! payslip: rate derivation, attendance earnings, overtime pay, allowance
//! collection, late and undertime deductions, unpaid leave deductions, the
//! SSS, PhilHealth, and Pag-IBIG contributions, monthly withholding tax,
//! and the finalization pass that rounds components and derives totals.
//!
//! Each function applies one rule, works on unrounded decimals, and records
//! an audit step describing its inputs and outcome. The engine sequences
//! them; any rule is also callable on its own.

mod allowances;
mod attendance_earnings;
mod finalize;
mod overtime_pay;
mod pagibig;
mod philhealth;
mod rates;
mod sss;
mod time_deductions;
mod unpaid_leave;
mod withholding_tax;

pub use allowances::{AllowanceResult, collect_allowances};
pub use attendance_earnings::{AttendanceEarnings, calculate_attendance_earnings};
pub use finalize::{FinalizedTotals, finalize_totals, round_centavos};
pub use overtime_pay::{OvertimePayResult, calculate_overtime_pay};
pub use pagibig::{PagibigContribution, calculate_pagibig};
pub use philhealth::{PhilHealthContribution, calculate_philhealth};
pub use rates::{RateDerivation, derive_rates};
pub use sss::{SssContribution, calculate_sss};
pub use time_deductions::{TimeDeductionResult, calculate_time_deductions};
pub use unpaid_leave::{UnpaidLeaveResult, calculate_unpaid_leave};
pub use withholding_tax::{WithholdingTax, calculate_withholding_tax};
