//! Attendance earnings calculation functionality.
//!
//! This module counts the days worked in a pay period and values them at
//! the daily rate. A day counts as worked when its attendance record has a
//! log-in; missing or empty attendance data yields zero earnings, not an
//! error.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, TraceStep};

/// The result of valuing attendance records at the daily rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEarnings {
    /// Number of records with a recorded log-in.
    pub days_worked: u32,
    /// Days worked times the daily rate. Unrounded.
    pub gross_earnings: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: TraceStep,
}

/// Values the attendance records for a period at the daily rate.
///
/// Each record with a log-in earns one daily rate. Records without a log-in
/// (missed punches, absences recorded as empty rows) earn nothing but are
/// still visible to the time deduction rule.
///
/// # Arguments
///
/// * `records` - The attendance records within the pay period
/// * `daily_rate` - The unrounded daily rate
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_attendance_earnings(
    records: &[AttendanceRecord],
    daily_rate: Decimal,
    step_number: u32,
) -> AttendanceEarnings {
    let days_worked = records.iter().filter(|r| r.has_log_in()).count() as u32;
    let gross_earnings = Decimal::from(days_worked) * daily_rate;

    let detail = if days_worked == 0 {
        "no attendance records with a log-in in the period; earnings are zero".to_string()
    } else {
        format!(
            "{} days with a recorded log-in at daily rate {}",
            days_worked,
            daily_rate.round_dp(4).normalize()
        )
    };

    let audit_step = TraceStep {
        step_number,
        rule_id: "attendance_earnings".to_string(),
        rule_name: "Attendance Earnings".to_string(),
        basis: "company timekeeping policy".to_string(),
        input: serde_json::json!({
            "records_in_period": records.len(),
            "daily_rate": daily_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "days_worked": days_worked,
            "gross_earnings": gross_earnings.normalize().to_string()
        }),
        detail,
    };

    AttendanceEarnings {
        days_worked,
        gross_earnings,
        audit_step,
    }
}
