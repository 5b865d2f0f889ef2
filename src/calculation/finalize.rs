//! Payslip finalization functionality.
//!
//! This module rounds every monetary component to centavos and derives the
//! payslip totals from the rounded components, so the published figures
//! satisfy `net_pay = gross_pay - total_deductions` exactly. Rounding here,
//! and only here, keeps the upstream rules free to work at full precision.
//!
//! Negative net pay is legitimate (a period of unpaid leave can cost more
//! than it earns) and only produces a warning. A negative gross pay or a
//! negative deduction total cannot arise from valid inputs and is reported
//! as an internal invariant violation.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    AllowanceBreakdown, DeductionBreakdown, TraceStep, TraceWarning, WarningSeverity,
};

/// Rounds a monetary amount to centavos, half away from zero.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::round_centavos;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("1775.565").unwrap();
/// assert_eq!(round_centavos(amount), Decimal::from_str("1775.57").unwrap());
/// ```
pub fn round_centavos(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// The finalized, centavo-rounded payslip figures.
///
/// All fields are rounded; the totals are sums of the rounded components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizedTotals {
    /// Attendance earnings, rounded.
    pub gross_earnings: Decimal,
    /// Overtime pay, rounded.
    pub overtime_pay: Decimal,
    /// Allowance components, each rounded.
    pub allowances: AllowanceBreakdown,
    /// Deduction components, each rounded.
    pub deductions: DeductionBreakdown,
    /// Earnings + overtime + allowances, from the rounded components.
    pub gross_pay: Decimal,
    /// Sum of the rounded deduction components.
    pub total_deductions: Decimal,
    /// Gross pay minus total deductions. May be negative.
    pub net_pay: Decimal,
    /// Warnings raised during finalization.
    pub warnings: Vec<TraceWarning>,
    /// The audit step recording the totals.
    pub audit_step: TraceStep,
}

/// Rounds all components to centavos and derives the payslip totals.
///
/// # Arguments
///
/// * `gross_earnings` - Unrounded attendance earnings
/// * `overtime_pay` - Unrounded overtime pay
/// * `allowances` - Unrounded allowance components
/// * `deductions` - Unrounded deduction components
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// Returns [`PayrollError::InvariantViolation`] when the rounded gross pay
/// or the rounded deduction total is negative; both indicate a computation
/// bug upstream, not bad input.
pub fn finalize_totals(
    gross_earnings: Decimal,
    overtime_pay: Decimal,
    allowances: &AllowanceBreakdown,
    deductions: &DeductionBreakdown,
    step_number: u32,
) -> PayrollResult<FinalizedTotals> {
    let gross_earnings = round_centavos(gross_earnings);
    let overtime_pay = round_centavos(overtime_pay);

    let allowances = AllowanceBreakdown {
        rice_subsidy: round_centavos(allowances.rice_subsidy),
        phone_allowance: round_centavos(allowances.phone_allowance),
        clothing_allowance: round_centavos(allowances.clothing_allowance),
    };

    let deductions = DeductionBreakdown {
        late: round_centavos(deductions.late),
        undertime: round_centavos(deductions.undertime),
        unpaid_leave: round_centavos(deductions.unpaid_leave),
        sss: round_centavos(deductions.sss),
        philhealth: round_centavos(deductions.philhealth),
        pagibig: round_centavos(deductions.pagibig),
        withholding_tax: round_centavos(deductions.withholding_tax),
    };

    let gross_pay = gross_earnings + overtime_pay + allowances.total();
    let total_deductions = deductions.total();
    let net_pay = gross_pay - total_deductions;

    if gross_pay < Decimal::ZERO {
        return Err(PayrollError::InvariantViolation {
            message: format!("gross pay is negative: {}", gross_pay),
        });
    }
    if total_deductions < Decimal::ZERO {
        return Err(PayrollError::InvariantViolation {
            message: format!("total deductions are negative: {}", total_deductions),
        });
    }

    let mut warnings = Vec::new();
    if net_pay < Decimal::ZERO {
        warnings.push(TraceWarning {
            code: "NEGATIVE_NET_PAY".to_string(),
            message: format!("net pay is {}", net_pay),
            severity: WarningSeverity::High,
        });
    }

    let detail = format!(
        "gross {} minus deductions {} leaves net {}",
        gross_pay, total_deductions, net_pay
    );

    let audit_step = TraceStep {
        step_number,
        rule_id: "finalize_totals".to_string(),
        rule_name: "Payslip Totals".to_string(),
        basis: "centavo rounding of payslip components".to_string(),
        input: serde_json::json!({
            "gross_earnings": gross_earnings.to_string(),
            "overtime_pay": overtime_pay.to_string(),
            "total_allowances": allowances.total().to_string(),
        }),
        output: serde_json::json!({
            "gross_pay": gross_pay.to_string(),
            "total_deductions": total_deductions.to_string(),
            "net_pay": net_pay.to_string()
        }),
        detail,
    };

    Ok(FinalizedTotals {
        gross_earnings,
        overtime_pay,
        allowances,
        deductions,
        gross_pay,
        total_deductions,
        net_pay,
        warnings,
        audit_step,
    })
}
