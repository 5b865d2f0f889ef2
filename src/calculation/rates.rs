//! Pay rate derivation functionality.
//!
//! This module derives the daily and hourly rates from an employee's
//! monthly basic salary using the standard working days and hours from the
//! work schedule. Every downstream money rule consumes these rates at full
//! precision; rounding to centavos happens only at finalization.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::WorkSchedule;
use crate::models::TraceStep;

/// The result of deriving pay rates from a monthly salary.
///
/// Contains the monthly, daily, and hourly rates along with the audit step
/// documenting the derivation. The daily and hourly rates are unrounded.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::derive_rates;
/// use payroll_engine::config::PayrollConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = PayrollConfig::default();
/// let rates = derive_rates(Decimal::from(50000), config.schedule(), 1);
///
/// assert_eq!(rates.daily_rate.round_dp(2), Decimal::from_str("2272.73").unwrap());
/// assert_eq!(rates.hourly_rate.round_dp(2), Decimal::from_str("284.09").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateDerivation {
    /// The monthly basic salary the rates derive from.
    pub monthly_rate: Decimal,
    /// Monthly salary over the standard working days. Unrounded.
    pub daily_rate: Decimal,
    /// Daily rate over the standard working hours. Unrounded.
    pub hourly_rate: Decimal,
    /// The audit step recording this derivation.
    pub audit_step: TraceStep,
}

/// Derives the daily and hourly rates from a monthly basic salary.
///
/// # Arguments
///
/// * `monthly_salary` - The employee's monthly basic salary
/// * `schedule` - The work schedule supplying the standard divisors
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// A [`RateDerivation`] with the unrounded daily and hourly rates and the
/// audit step. Callers must keep using the unrounded rates; rounding a rate
/// before multiplying shifts centavos on the payslip.
pub fn derive_rates(
    monthly_salary: Decimal,
    schedule: &WorkSchedule,
    step_number: u32,
) -> RateDerivation {
    let working_days = Decimal::from(schedule.working_days_per_month);
    let working_hours = Decimal::from(schedule.working_hours_per_day);

    let daily_rate = monthly_salary / working_days;
    let hourly_rate = daily_rate / working_hours;

    let detail = format!(
        "monthly {} over {} working days gives daily {}; over {} hours gives hourly {}",
        monthly_salary.normalize(),
        working_days.normalize(),
        daily_rate.round_dp(4).normalize(),
        working_hours.normalize(),
        hourly_rate.round_dp(4).normalize()
    );

    let audit_step = TraceStep {
        step_number,
        rule_id: "rate_derivation".to_string(),
        rule_name: "Daily and Hourly Rate Derivation".to_string(),
        basis: "company standard working schedule".to_string(),
        input: serde_json::json!({
            "monthly_salary": monthly_salary.normalize().to_string(),
            "working_days_per_month": schedule.working_days_per_month,
            "working_hours_per_day": schedule.working_hours_per_day
        }),
        output: serde_json::json!({
            "daily_rate": daily_rate.normalize().to_string(),
            "hourly_rate": hourly_rate.normalize().to_string()
        }),
        detail,
    };

    RateDerivation {
        monthly_rate: monthly_salary,
        daily_rate,
        hourly_rate,
        audit_step,
    }
}
