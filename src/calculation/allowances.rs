//! Allowance collection functionality.
//!
//! This module copies the rice subsidy, phone allowance, and clothing
//! allowance from the employee record onto the payslip. A negative stored
//! allowance is treated as corrupt data: the component is forced to zero
//! and a warning is raised instead of failing the calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AllowanceBreakdown, Employee, TraceStep, TraceWarning, WarningSeverity};

/// The result of collecting allowances from the employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceResult {
    /// The allowance components carried onto the payslip.
    pub allowances: AllowanceBreakdown,
    /// Warnings for components that had to be forced to zero.
    pub warnings: Vec<TraceWarning>,
    /// The audit step recording this collection.
    pub audit_step: TraceStep,
}

fn sanitize(name: &str, value: Decimal, warnings: &mut Vec<TraceWarning>) -> Decimal {
    if value < Decimal::ZERO {
        warnings.push(TraceWarning {
            code: "NEGATIVE_ALLOWANCE_CLAMPED".to_string(),
            message: format!("{} of {} forced to zero", name, value.normalize()),
            severity: WarningSeverity::Medium,
        });
        Decimal::ZERO
    } else {
        value
    }
}

/// Copies the employee's allowances onto the payslip.
///
/// Values are copied verbatim; only negative components are replaced with
/// zero, each producing a warning.
///
/// # Arguments
///
/// * `employee` - The employee record carrying the allowance columns
/// * `step_number` - The step number for audit trail sequencing
pub fn collect_allowances(employee: &Employee, step_number: u32) -> AllowanceResult {
    let mut warnings = Vec::new();

    let allowances = AllowanceBreakdown {
        rice_subsidy: sanitize("rice subsidy", employee.rice_subsidy, &mut warnings),
        phone_allowance: sanitize("phone allowance", employee.phone_allowance, &mut warnings),
        clothing_allowance: sanitize(
            "clothing allowance",
            employee.clothing_allowance,
            &mut warnings,
        ),
    };

    let total = allowances.total();
    let detail = if warnings.is_empty() {
        format!("allowances total {}", total.normalize())
    } else {
        format!(
            "allowances total {} after forcing {} negative component(s) to zero",
            total.normalize(),
            warnings.len()
        )
    };

    let audit_step = TraceStep {
        step_number,
        rule_id: "allowances".to_string(),
        rule_name: "Allowance Collection".to_string(),
        basis: "employee master data".to_string(),
        input: serde_json::json!({
            "rice_subsidy": employee.rice_subsidy.normalize().to_string(),
            "phone_allowance": employee.phone_allowance.normalize().to_string(),
            "clothing_allowance": employee.clothing_allowance.normalize().to_string()
        }),
        output: serde_json::json!({
            "total_allowances": total.normalize().to_string()
        }),
        detail,
    };

    AllowanceResult {
        allowances,
        warnings,
        audit_step,
    }
}
