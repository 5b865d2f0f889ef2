//! Late and undertime deduction functionality.
//!
//! Lateness and undertime are deliberately asymmetric. A log-in only counts
//! as late when it falls after the grace threshold (08:15), but once late,
//! the charged minutes run from the scheduled start (08:00): an employee
//! logging in at 08:16 is charged sixteen minutes, not one. Undertime has
//! no grace: any log-out before the scheduled end (17:00) is charged in
//! full from that time.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::WorkSchedule;
use crate::models::{AttendanceRecord, TraceStep};

/// The result of computing late and undertime deductions for a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeDeductionResult {
    /// Total minutes late across the period, measured from the scheduled
    /// start.
    pub late_minutes: i64,
    /// Late minutes valued at the hourly rate. Unrounded.
    pub late_deduction: Decimal,
    /// Total undertime minutes across the period, measured to the scheduled
    /// end.
    pub undertime_minutes: i64,
    /// Undertime minutes valued at the hourly rate. Unrounded.
    pub undertime_deduction: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: TraceStep,
}

/// Computes the late and undertime deductions for a pay period.
///
/// A record contributes late minutes only when its log-in falls strictly
/// after the grace threshold; the minutes then run from the scheduled
/// start. Undertime minutes accrue for every log-out before the scheduled
/// end. Both are valued at the unrounded hourly rate.
///
/// # Arguments
///
/// * `records` - The attendance records within the pay period
/// * `schedule` - The work schedule supplying the threshold and nominal times
/// * `hourly_rate` - The unrounded hourly rate
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_time_deductions(
    records: &[AttendanceRecord],
    schedule: &WorkSchedule,
    hourly_rate: Decimal,
    step_number: u32,
) -> TimeDeductionResult {
    let sixty = Decimal::from(60);

    let late_minutes: i64 = records
        .iter()
        .filter(|r| r.is_late(schedule.late_threshold))
        .map(|r| r.minutes_late_from(schedule.scheduled_start))
        .sum();

    let undertime_minutes: i64 = records
        .iter()
        .map(|r| r.undertime_minutes_before(schedule.scheduled_end))
        .sum();

    // Divide last so whole-peso outcomes stay exact.
    let late_deduction = Decimal::from(late_minutes) * hourly_rate / sixty;
    let undertime_deduction = Decimal::from(undertime_minutes) * hourly_rate / sixty;

    let detail = if late_minutes == 0 && undertime_minutes == 0 {
        "no late arrivals past the grace threshold and no undertime".to_string()
    } else {
        format!(
            "{} late minutes (charged from {}) and {} undertime minutes (charged to {}) at hourly rate {}",
            late_minutes,
            schedule.scheduled_start.format("%H:%M"),
            undertime_minutes,
            schedule.scheduled_end.format("%H:%M"),
            hourly_rate.round_dp(4).normalize()
        )
    };

    let audit_step = TraceStep {
        step_number,
        rule_id: "time_deductions".to_string(),
        rule_name: "Late and Undertime Deductions".to_string(),
        basis: "company timekeeping policy".to_string(),
        input: serde_json::json!({
            "records_in_period": records.len(),
            "late_threshold": schedule.late_threshold.format("%H:%M").to_string(),
            "scheduled_start": schedule.scheduled_start.format("%H:%M").to_string(),
            "scheduled_end": schedule.scheduled_end.format("%H:%M").to_string(),
            "hourly_rate": hourly_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "late_minutes": late_minutes,
            "late_deduction": late_deduction.normalize().to_string(),
            "undertime_minutes": undertime_minutes,
            "undertime_deduction": undertime_deduction.normalize().to_string()
        }),
        detail,
    };

    TimeDeductionResult {
        late_minutes,
        late_deduction,
        undertime_minutes,
        undertime_deduction,
        audit_step,
    }
}
