//! PhilHealth premium calculation functionality.
//!
//! The employee pays a share of the premium rate on the monthly basic
//! salary, clamped between the statutory floor and ceiling.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PhilHealthConfig;
use crate::models::TraceStep;

/// The result of computing the PhilHealth employee share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhilHealthContribution {
    /// The employee share of the premium for the month.
    pub contribution: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: TraceStep,
}

/// Computes the PhilHealth employee share for a monthly salary.
///
/// The full premium is the salary times the premium rate; the employee
/// pays their share of it, clamped to the configured floor and ceiling.
///
/// # Arguments
///
/// * `monthly_salary` - The employee's monthly basic salary
/// * `config` - The PhilHealth premium parameters
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_philhealth(
    monthly_salary: Decimal,
    config: &PhilHealthConfig,
    step_number: u32,
) -> PhilHealthContribution {
    let full_premium = monthly_salary * config.premium_rate;
    let employee_share = full_premium * config.employee_share;
    let contribution = employee_share.clamp(config.min_contribution, config.max_contribution);

    let detail = if contribution > employee_share {
        format!(
            "employee share {} raised to the floor {}",
            employee_share.normalize(),
            config.min_contribution.normalize()
        )
    } else if contribution < employee_share {
        format!(
            "employee share {} capped at the ceiling {}",
            employee_share.normalize(),
            config.max_contribution.normalize()
        )
    } else {
        format!(
            "premium {} on salary {}, employee share {}",
            full_premium.normalize(),
            monthly_salary.normalize(),
            contribution.normalize()
        )
    };

    let audit_step = TraceStep {
        step_number,
        rule_id: "philhealth_contribution".to_string(),
        rule_name: "PhilHealth Premium".to_string(),
        basis: "PhilHealth premium schedule".to_string(),
        input: serde_json::json!({
            "monthly_salary": monthly_salary.normalize().to_string(),
            "premium_rate": config.premium_rate.normalize().to_string(),
            "employee_share": config.employee_share.normalize().to_string()
        }),
        output: serde_json::json!({
            "contribution": contribution.normalize().to_string()
        }),
        detail,
    };

    PhilHealthContribution {
        contribution,
        audit_step,
    }
}
