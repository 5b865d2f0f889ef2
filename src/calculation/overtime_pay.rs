//! Overtime pay calculation functionality.
//!
//! This module sums the approved overtime hours in a pay period and values
//! them at the hourly rate with the overtime premium applied. Unapproved
//! filings and filings with non-positive hours contribute nothing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{OvertimeRecord, TraceStep};

/// The result of valuing approved overtime at the premium rate.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_overtime_pay;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let hourly = Decimal::from(50000) / Decimal::from(22) / Decimal::from(8);
/// let premium = Decimal::from_str("1.25").unwrap();
/// let result = calculate_overtime_pay(&[], hourly, premium, 3);
///
/// assert_eq!(result.overtime_hours, Decimal::ZERO);
/// assert_eq!(result.overtime_pay, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimePayResult {
    /// Sum of approved overtime hours.
    pub overtime_hours: Decimal,
    /// Hours times the hourly rate times the premium. Unrounded.
    pub overtime_pay: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: TraceStep,
}

/// Values the payable overtime records at the premium rate.
///
/// The hourly rate must be the unrounded rate from the derivation step:
/// multiplying a pre-rounded rate by hours and premium lands on different
/// centavos than rounding the final amount.
///
/// # Arguments
///
/// * `records` - Overtime records within the pay period
/// * `hourly_rate` - The unrounded hourly rate
/// * `multiplier` - The overtime premium (e.g. 1.25)
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_overtime_pay(
    records: &[OvertimeRecord],
    hourly_rate: Decimal,
    multiplier: Decimal,
    step_number: u32,
) -> OvertimePayResult {
    let overtime_hours: Decimal = records
        .iter()
        .filter(|r| r.is_payable())
        .map(|r| r.hours)
        .sum();

    let overtime_pay = overtime_hours * hourly_rate * multiplier;

    let detail = if overtime_hours > Decimal::ZERO {
        format!(
            "{} approved overtime hours at hourly rate {} with {}x premium",
            overtime_hours.normalize(),
            hourly_rate.round_dp(4).normalize(),
            multiplier.normalize()
        )
    } else {
        "no payable overtime records in the period".to_string()
    };

    let audit_step = TraceStep {
        step_number,
        rule_id: "overtime_pay".to_string(),
        rule_name: "Overtime Pay".to_string(),
        basis: "company overtime policy".to_string(),
        input: serde_json::json!({
            "records_in_period": records.len(),
            "hourly_rate": hourly_rate.normalize().to_string(),
            "multiplier": multiplier.normalize().to_string()
        }),
        output: serde_json::json!({
            "overtime_hours": overtime_hours.normalize().to_string(),
            "overtime_pay": overtime_pay.normalize().to_string()
        }),
        detail,
    };

    OvertimePayResult {
        overtime_hours,
        overtime_pay,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn record(hours: &str, approved: bool) -> OvertimeRecord {
        OvertimeRecord {
            employee_id: 10001,
            start_date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            hours: dec(hours),
            approved,
        }
    }

    #[test]
    fn test_five_hours_at_50000_salary() {
        let hourly = dec("50000") / dec("22") / dec("8");
        let result = calculate_overtime_pay(&[record("5", true)], hourly, dec("1.25"), 3);

        assert_eq!(result.overtime_hours, dec("5"));
        // From the unrounded hourly rate; a pre-rounded rate would give
        // 1775.56 instead.
        assert_eq!(result.overtime_pay.round_dp(2), dec("1775.57"));
    }

    #[test]
    fn test_unapproved_records_are_skipped() {
        let records = vec![record("5", true), record("3", false)];
        let result = calculate_overtime_pay(&records, dec("100"), dec("1.25"), 3);

        assert_eq!(result.overtime_hours, dec("5"));
        assert_eq!(result.overtime_pay, dec("625"));
    }

    #[test]
    fn test_negative_hours_are_skipped() {
        let records = vec![record("4", true), record("-2", true)];
        let result = calculate_overtime_pay(&records, dec("100"), dec("1.25"), 3);

        assert_eq!(result.overtime_hours, dec("4"));
    }

    #[test]
    fn test_no_records_yields_zero() {
        let result = calculate_overtime_pay(&[], dec("100"), dec("1.25"), 3);

        assert_eq!(result.overtime_hours, Decimal::ZERO);
        assert_eq!(result.overtime_pay, Decimal::ZERO);
        assert!(result.audit_step.detail.contains("no payable"));
    }

    #[test]
    fn test_fractional_hours() {
        let result = calculate_overtime_pay(&[record("2.5", true)], dec("100"), dec("1.25"), 3);
        assert_eq!(result.overtime_pay, dec("312.5"));
    }

    #[test]
    fn test_audit_step_contents() {
        let result = calculate_overtime_pay(&[record("5", true)], dec("100"), dec("1.25"), 3);

        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.rule_id, "overtime_pay");
        assert_eq!(
            result.audit_step.output["overtime_hours"].as_str().unwrap(),
            "5"
        );
        assert_eq!(result.audit_step.input["multiplier"].as_str().unwrap(), "1.25");
    }
}
