//! Unpaid leave deduction functionality.
//!
//! This module sums the approved unpaid leave days in a pay period and
//! values them at the daily rate. Paid leave and unapproved requests carry
//! no deduction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{LeaveRequest, TraceStep};

/// The result of valuing approved unpaid leave at the daily rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnpaidLeaveResult {
    /// Total approved unpaid leave days.
    pub unpaid_days: u32,
    /// Days times the daily rate. Unrounded.
    pub deduction: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: TraceStep,
}

/// Values the deductible leave requests at the daily rate.
///
/// Only approved requests typed as unpaid with at least one day count;
/// each day deducts one daily rate.
///
/// # Arguments
///
/// * `requests` - Leave requests overlapping the pay period
/// * `daily_rate` - The unrounded daily rate
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_unpaid_leave(
    requests: &[LeaveRequest],
    daily_rate: Decimal,
    step_number: u32,
) -> UnpaidLeaveResult {
    let unpaid_days: u32 = requests
        .iter()
        .filter(|r| r.is_deductible())
        .map(|r| r.days)
        .sum();

    let deduction = Decimal::from(unpaid_days) * daily_rate;

    let detail = if unpaid_days == 0 {
        "no approved unpaid leave in the period".to_string()
    } else {
        format!(
            "{} approved unpaid leave day(s) at daily rate {}",
            unpaid_days,
            daily_rate.round_dp(4).normalize()
        )
    };

    let audit_step = TraceStep {
        step_number,
        rule_id: "unpaid_leave".to_string(),
        rule_name: "Unpaid Leave Deduction".to_string(),
        basis: "company leave policy".to_string(),
        input: serde_json::json!({
            "requests_in_period": requests.len(),
            "daily_rate": daily_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "unpaid_days": unpaid_days,
            "deduction": deduction.normalize().to_string()
        }),
        detail,
    };

    UnpaidLeaveResult {
        unpaid_days,
        deduction,
        audit_step,
    }
}
