//! Attendance model and time derivations.
//!
//! This module defines the AttendanceRecord struct representing one day of
//! time-log data, together with the derived quantities payroll needs:
//! worked hours, lateness, and undertime.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents one calendar day of attendance for an employee.
///
/// Either time may be missing: biometric devices drop punches, and manual
/// corrections arrive late. Derivations treat missing times as "no data"
/// rather than as errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee this record belongs to.
    pub employee_id: i64,
    /// The calendar date of the record.
    pub date: NaiveDate,
    /// The log-in time, if one was captured.
    #[serde(default)]
    pub log_in: Option<NaiveTime>,
    /// The log-out time, if one was captured.
    #[serde(default)]
    pub log_out: Option<NaiveTime>,
}

impl AttendanceRecord {
    /// Returns true when a log-in was captured for this day.
    ///
    /// A day with a log-in counts as a day worked even when the log-out
    /// punch is missing.
    pub fn has_log_in(&self) -> bool {
        self.log_in.is_some()
    }

    /// Calculates the worked hours for this record.
    ///
    /// Returns zero when either time is missing, and clamps to zero when the
    /// log-out precedes the log-in (a corrupt punch pair).
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::AttendanceRecord;
    /// use chrono::{NaiveDate, NaiveTime};
    /// use rust_decimal::Decimal;
    ///
    /// let record = AttendanceRecord {
    ///     employee_id: 10001,
    ///     date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
    ///     log_in: NaiveTime::from_hms_opt(8, 0, 0),
    ///     log_out: NaiveTime::from_hms_opt(17, 0, 0),
    /// };
    /// assert_eq!(record.worked_hours(), Decimal::new(90, 1)); // 9.0 hours
    /// ```
    pub fn worked_hours(&self) -> Decimal {
        let (Some(log_in), Some(log_out)) = (self.log_in, self.log_out) else {
            return Decimal::ZERO;
        };

        let minutes = log_out.signed_duration_since(log_in).num_minutes();
        if minutes <= 0 {
            return Decimal::ZERO;
        }

        Decimal::new(minutes, 0) / Decimal::new(60, 0)
    }

    /// Returns true when the log-in falls strictly after the given threshold.
    ///
    /// The threshold is the grace cutoff (e.g. 08:15), not the scheduled
    /// start time.
    pub fn is_late(&self, threshold: NaiveTime) -> bool {
        self.log_in.is_some_and(|log_in| log_in > threshold)
    }

    /// Minutes elapsed between the scheduled start and the actual log-in.
    ///
    /// Measured from the scheduled start time (e.g. 08:00), not from any
    /// grace threshold: once a record is judged late, the whole interval
    /// since the scheduled start is charged. Returns zero when the log-in is
    /// missing or not after the scheduled start.
    pub fn minutes_late_from(&self, scheduled_start: NaiveTime) -> i64 {
        match self.log_in {
            Some(log_in) if log_in > scheduled_start => {
                log_in.signed_duration_since(scheduled_start).num_minutes()
            }
            _ => 0,
        }
    }

    /// Minutes between the actual log-out and the scheduled end.
    ///
    /// Returns zero when the log-out is missing or at/after the scheduled
    /// end (e.g. 17:00).
    pub fn undertime_minutes_before(&self, scheduled_end: NaiveTime) -> i64 {
        match self.log_out {
            Some(log_out) if log_out < scheduled_end => {
                scheduled_end.signed_duration_since(log_out).num_minutes()
            }
            _ => 0,
        }
    }
}
