//! Pag-IBIG contribution calculation functionality.
//!
//! Salaries at or below the threshold contribute at the lower rate;
//! salaries above it contribute at the higher rate, capped at the
//! statutory maximum.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PagibigConfig;
use crate::models::TraceStep;

/// The result of computing the Pag-IBIG employee contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagibigContribution {
    /// The employee contribution for the month.
    pub contribution: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: TraceStep,
}

/// Computes the Pag-IBIG employee contribution for a monthly salary.
///
/// # Arguments
///
/// * `monthly_salary` - The employee's monthly basic salary
/// * `config` - The Pag-IBIG contribution parameters
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_pagibig(
    monthly_salary: Decimal,
    config: &PagibigConfig,
    step_number: u32,
) -> PagibigContribution {
    let (contribution, detail) = if monthly_salary <= config.salary_threshold {
        let amount = monthly_salary * config.rate_below_threshold;
        let detail = format!(
            "salary {} at or below {} contributes {} at the {} rate",
            monthly_salary.normalize(),
            config.salary_threshold.normalize(),
            amount.normalize(),
            config.rate_below_threshold.normalize()
        );
        (amount, detail)
    } else {
        let uncapped = monthly_salary * config.rate_above_threshold;
        let amount = uncapped.min(config.max_contribution);
        let detail = if amount < uncapped {
            format!(
                "salary {} contributes {} at the {} rate, capped at {}",
                monthly_salary.normalize(),
                uncapped.normalize(),
                config.rate_above_threshold.normalize(),
                config.max_contribution.normalize()
            )
        } else {
            format!(
                "salary {} contributes {} at the {} rate",
                monthly_salary.normalize(),
                amount.normalize(),
                config.rate_above_threshold.normalize()
            )
        };
        (amount, detail)
    };

    let audit_step = TraceStep {
        step_number,
        rule_id: "pagibig_contribution".to_string(),
        rule_name: "Pag-IBIG Contribution".to_string(),
        basis: "RA 9679 (Pag-IBIG Fund)".to_string(),
        input: serde_json::json!({
            "monthly_salary": monthly_salary.normalize().to_string(),
            "salary_threshold": config.salary_threshold.normalize().to_string()
        }),
        output: serde_json::json!({
            "contribution": contribution.normalize().to_string()
        }),
        detail,
    };

    PagibigContribution {
        contribution,
        audit_step,
    }
}
