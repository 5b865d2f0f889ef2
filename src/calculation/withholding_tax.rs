//! Withholding tax calculation functionality.
//!
//! The monthly withholding is derived from the annualized basic salary:
//! the progressive annual table is applied to monthly salary times twelve,
//! and the resulting annual tax is divided back by twelve. Period earnings
//! never enter the tax base.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::TaxTable;
use crate::models::TraceStep;

/// The result of computing the monthly withholding tax.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_withholding_tax;
/// use payroll_engine::config::PayrollConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = PayrollConfig::default();
/// let result = calculate_withholding_tax(Decimal::from(50000), config.tax(), 10);
///
/// // 600000 annual lands in the 20% bracket: 22500 + 20% of 200000.
/// assert_eq!(result.annual_tax, Decimal::from_str("62500.00").unwrap());
/// assert_eq!(result.monthly_tax.round_dp(2), Decimal::from_str("5208.33").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithholdingTax {
    /// The annualized salary used as the tax base.
    pub annual_salary: Decimal,
    /// The annual tax from the progressive table.
    pub annual_tax: Decimal,
    /// One twelfth of the annual tax. Unrounded.
    pub monthly_tax: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: TraceStep,
}

/// Computes the monthly withholding tax for a monthly salary.
///
/// # Arguments
///
/// * `monthly_salary` - The employee's monthly basic salary
/// * `table` - The progressive annual tax table
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_withholding_tax(
    monthly_salary: Decimal,
    table: &TaxTable,
    step_number: u32,
) -> WithholdingTax {
    let twelve = Decimal::from(12);

    let annual_salary = monthly_salary * twelve;
    let annual_tax = table.annual_tax_for(annual_salary);
    let monthly_tax = annual_tax / twelve;

    let detail = if annual_tax == Decimal::ZERO {
        format!(
            "annual salary {} is within the exempt bracket",
            annual_salary.normalize()
        )
    } else {
        format!(
            "annual salary {} owes {} per year, withheld as {} per month",
            annual_salary.normalize(),
            annual_tax.normalize(),
            monthly_tax.round_dp(4).normalize()
        )
    };

    let audit_step = TraceStep {
        step_number,
        rule_id: "withholding_tax".to_string(),
        rule_name: "Monthly Withholding Tax".to_string(),
        basis: "RA 10963 (TRAIN) annual tax table".to_string(),
        input: serde_json::json!({
            "monthly_salary": monthly_salary.normalize().to_string(),
            "annual_salary": annual_salary.normalize().to_string()
        }),
        output: serde_json::json!({
            "annual_tax": annual_tax.normalize().to_string(),
            "monthly_tax": monthly_tax.normalize().to_string()
        }),
        detail,
    };

    WithholdingTax {
        annual_salary,
        annual_tax,
        monthly_tax,
        audit_step,
    }
}
