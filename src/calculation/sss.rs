//! SSS contribution calculation functionality.
//!
//! The employee share is read off the SSS schedule of contributions by
//! monthly salary ceiling. The contribution depends on the monthly basic
//! salary alone, never on the earnings of the period.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::SssTable;
use crate::models::TraceStep;

/// The result of looking up the SSS employee contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SssContribution {
    /// The employee contribution for the month.
    pub contribution: Decimal,
    /// The audit step recording this lookup.
    pub audit_step: TraceStep,
}

/// Looks up the SSS employee contribution for a monthly salary.
///
/// # Arguments
///
/// * `monthly_salary` - The employee's monthly basic salary
/// * `table` - The SSS contribution schedule
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_sss(
    monthly_salary: Decimal,
    table: &SssTable,
    step_number: u32,
) -> SssContribution {
    let contribution = table.contribution_for(monthly_salary);

    let audit_step = TraceStep {
        step_number,
        rule_id: "sss_contribution".to_string(),
        rule_name: "SSS Contribution".to_string(),
        basis: "SSS schedule of contributions".to_string(),
        input: serde_json::json!({
            "monthly_salary": monthly_salary.normalize().to_string()
        }),
        output: serde_json::json!({
            "contribution": contribution.normalize().to_string()
        }),
        detail: format!(
            "monthly salary {} falls in the bracket contributing {}",
            monthly_salary.normalize(),
            contribution.normalize()
        ),
    };

    SssContribution {
        contribution,
        audit_step,
    }
}
