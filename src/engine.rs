//! The payroll calculation engine.
//!
//! [`PayrollCalculator`] wires the configuration and the data sources
//! together and produces one [`Payslip`] per request. Employee and
//! attendance sources are required; overtime and leave sources are optional
//! and may be attached with the builder methods. A failure in an optional
//! source degrades that contribution to zero with a warning instead of
//! failing the calculation.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use chrono::{NaiveDate, NaiveTime};
//! use payroll_engine::config::PayrollConfig;
//! use payroll_engine::engine::PayrollCalculator;
//! use payroll_engine::models::{AttendanceRecord, Employee, EmploymentStatus};
//! use payroll_engine::sources::InMemoryDataSet;
//! use rust_decimal::Decimal;
//!
//! let mut data = InMemoryDataSet::new();
//! data.add_employee(Employee {
//!     id: 10001,
//!     first_name: "Jose".to_string(),
//!     last_name: "Crisostomo".to_string(),
//!     birthday: NaiveDate::from_ymd_opt(1990, 4, 18).unwrap(),
//!     address: None,
//!     phone_number: None,
//!     sss_number: None,
//!     philhealth_number: None,
//!     tin: None,
//!     pagibig_number: None,
//!     status: EmploymentStatus::Regular,
//!     position: "Payroll Rank and File".to_string(),
//!     supervisor: None,
//!     monthly_salary: Decimal::from(25000),
//!     rice_subsidy: Decimal::from(1500),
//!     phone_allowance: Decimal::ZERO,
//!     clothing_allowance: Decimal::ZERO,
//! });
//! data.add_attendance(AttendanceRecord {
//!     employee_id: 10001,
//!     date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
//!     log_in: NaiveTime::from_hms_opt(8, 0, 0),
//!     log_out: NaiveTime::from_hms_opt(17, 0, 0),
//! });
//!
//! let data = Arc::new(data);
//! let calculator = PayrollCalculator::new(PayrollConfig::default(), data.clone(), data.clone());
//!
//! let payslip = calculator
//!     .calculate(
//!         10001,
//!         NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
//!         NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
//!     )
//!     .unwrap();
//!
//! assert_eq!(payslip.days_worked, 1);
//! ```

use std::sync::Arc;
use std::time::Instant;

use chrono::{Local, NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_attendance_earnings, calculate_overtime_pay, calculate_pagibig,
    calculate_philhealth, calculate_sss, calculate_time_deductions, calculate_unpaid_leave,
    calculate_withholding_tax, collect_allowances, derive_rates, finalize_totals, round_centavos,
};
use crate::config::PayrollConfig;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    CalculationTrace, DeductionBreakdown, Employee, LeaveRequest, OvertimeRecord, PayPeriod,
    Payslip, TraceStep, TraceWarning, WarningSeverity,
};
use crate::sources::{AttendanceSource, EmployeeDirectory, LeaveSource, OvertimeSource};

/// Calculates payslips from employee, attendance, overtime, and leave data.
///
/// The calculator holds no per-request state: one instance can serve any
/// number of sequential calculations over the same read-only sources.
pub struct PayrollCalculator {
    config: PayrollConfig,
    employees: Arc<dyn EmployeeDirectory>,
    attendance: Arc<dyn AttendanceSource>,
    overtime: Option<Arc<dyn OvertimeSource>>,
    leave: Option<Arc<dyn LeaveSource>>,
}

impl PayrollCalculator {
    /// Creates a calculator over the two required sources.
    ///
    /// Overtime and leave start out unattached; calculations then carry
    /// zero overtime pay and zero leave deductions.
    pub fn new(
        config: PayrollConfig,
        employees: Arc<dyn EmployeeDirectory>,
        attendance: Arc<dyn AttendanceSource>,
    ) -> Self {
        Self {
            config,
            employees,
            attendance,
            overtime: None,
            leave: None,
        }
    }

    /// Attaches an overtime source.
    pub fn with_overtime_source(mut self, overtime: Arc<dyn OvertimeSource>) -> Self {
        self.overtime = Some(overtime);
        self
    }

    /// Attaches a leave source.
    pub fn with_leave_source(mut self, leave: Arc<dyn LeaveSource>) -> Self {
        self.leave = Some(leave);
        self
    }

    /// Calculates the payslip for an employee over an inclusive date range.
    ///
    /// # Errors
    ///
    /// Fails on invalid input (non-positive employee id, reversed period,
    /// period starting in the future), on an unknown employee or one with a
    /// non-positive salary, when the employee or attendance source is
    /// unavailable, or when finalization detects an internal invariant
    /// violation. Overtime and leave source failures do not fail the
    /// calculation.
    pub fn calculate(
        &self,
        employee_id: i64,
        period_start: NaiveDate,
        period_end: NaiveDate,
    ) -> PayrollResult<Payslip> {
        let calculation_id = Uuid::new_v4();
        info!(
            calculation_id = %calculation_id,
            employee_id,
            period_start = %period_start,
            period_end = %period_end,
            "Processing payroll calculation"
        );
        let start_time = Instant::now();

        validate_request(employee_id, period_start, period_end)?;
        let period = PayPeriod::new(period_start, period_end);

        let employee = self.load_employee(employee_id)?;

        let attendance = self
            .attendance
            .records_in_range(employee_id, period_start, period_end)
            .map_err(|source| PayrollError::SourceUnavailable {
                context: format!("attendance records for employee {}", employee_id),
                source,
            })?;

        let mut steps: Vec<TraceStep> = Vec::new();
        let mut warnings: Vec<TraceWarning> = Vec::new();
        let mut step_number: u32 = 1;

        let schedule = self.config.schedule();

        let rates = derive_rates(employee.monthly_salary, schedule, step_number);
        steps.push(rates.audit_step);
        step_number += 1;

        let earnings = calculate_attendance_earnings(&attendance, rates.daily_rate, step_number);
        steps.push(earnings.audit_step);
        step_number += 1;

        let overtime_records =
            self.fetch_overtime(employee_id, period_start, period_end, &mut warnings);
        let overtime = calculate_overtime_pay(
            &overtime_records,
            rates.hourly_rate,
            schedule.overtime_multiplier,
            step_number,
        );
        steps.push(overtime.audit_step);
        step_number += 1;

        let allowance_result = collect_allowances(&employee, step_number);
        steps.push(allowance_result.audit_step);
        warnings.extend(allowance_result.warnings);
        step_number += 1;

        let time_deductions =
            calculate_time_deductions(&attendance, schedule, rates.hourly_rate, step_number);
        steps.push(time_deductions.audit_step);
        step_number += 1;

        let leave_requests = self.fetch_leave(employee_id, period_start, period_end, &mut warnings);
        let unpaid_leave = calculate_unpaid_leave(&leave_requests, rates.daily_rate, step_number);
        steps.push(unpaid_leave.audit_step);
        step_number += 1;

        let sss = calculate_sss(employee.monthly_salary, self.config.sss(), step_number);
        steps.push(sss.audit_step);
        step_number += 1;

        let philhealth =
            calculate_philhealth(employee.monthly_salary, self.config.philhealth(), step_number);
        steps.push(philhealth.audit_step);
        step_number += 1;

        let pagibig = calculate_pagibig(employee.monthly_salary, self.config.pagibig(), step_number);
        steps.push(pagibig.audit_step);
        step_number += 1;

        let tax = calculate_withholding_tax(employee.monthly_salary, self.config.tax(), step_number);
        steps.push(tax.audit_step);
        step_number += 1;

        let deductions = DeductionBreakdown {
            late: time_deductions.late_deduction,
            undertime: time_deductions.undertime_deduction,
            unpaid_leave: unpaid_leave.deduction,
            sss: sss.contribution,
            philhealth: philhealth.contribution,
            pagibig: pagibig.contribution,
            withholding_tax: tax.monthly_tax,
        };

        let totals = finalize_totals(
            earnings.gross_earnings,
            overtime.overtime_pay,
            &allowance_result.allowances,
            &deductions,
            step_number,
        )?;
        steps.push(totals.audit_step);
        warnings.extend(totals.warnings);

        if totals.net_pay < Decimal::ZERO {
            warn!(
                calculation_id = %calculation_id,
                employee_id,
                net_pay = %totals.net_pay,
                "Net pay is negative"
            );
        }

        let duration_us = start_time.elapsed().as_micros() as u64;
        info!(
            calculation_id = %calculation_id,
            employee_id,
            days_worked = earnings.days_worked,
            gross_pay = %totals.gross_pay,
            net_pay = %totals.net_pay,
            duration_us,
            "Payroll calculation completed"
        );

        Ok(Payslip {
            calculation_id,
            generated_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            employee_id,
            period,
            monthly_rate: employee.monthly_salary,
            daily_rate: round_centavos(rates.daily_rate),
            hourly_rate: round_centavos(rates.hourly_rate),
            days_worked: earnings.days_worked,
            gross_earnings: totals.gross_earnings,
            overtime_hours: overtime.overtime_hours,
            overtime_pay: totals.overtime_pay,
            allowances: totals.allowances,
            deductions: totals.deductions,
            gross_pay: totals.gross_pay,
            total_deductions: totals.total_deductions,
            net_pay: totals.net_pay,
            trace: CalculationTrace {
                steps,
                warnings,
                duration_us,
            },
        })
    }

    fn load_employee(&self, employee_id: i64) -> PayrollResult<Employee> {
        let employee = self
            .employees
            .find_by_id(employee_id)
            .map_err(|source| PayrollError::SourceUnavailable {
                context: format!("employee {}", employee_id),
                source,
            })?
            .ok_or(PayrollError::EmployeeNotFound { employee_id })?;

        if employee.monthly_salary <= Decimal::ZERO {
            return Err(PayrollError::InvalidEmployee {
                field: "monthly_salary".to_string(),
                message: format!(
                    "monthly salary must be positive, got {}",
                    employee.monthly_salary
                ),
            });
        }

        Ok(employee)
    }

    fn fetch_overtime(
        &self,
        employee_id: i64,
        start: NaiveDate,
        end: NaiveDate,
        warnings: &mut Vec<TraceWarning>,
    ) -> Vec<OvertimeRecord> {
        let Some(source) = &self.overtime else {
            return Vec::new();
        };

        match source.approved_in_range(employee_id, start, end) {
            Ok(records) => records,
            Err(err) => {
                warn!(
                    employee_id,
                    error = %err,
                    "Overtime source failed; overtime pay degrades to zero"
                );
                warnings.push(TraceWarning {
                    code: "OVERTIME_SOURCE_FAILED".to_string(),
                    message: format!("overtime source failed: {}", err),
                    severity: WarningSeverity::Medium,
                });
                Vec::new()
            }
        }
    }

    fn fetch_leave(
        &self,
        employee_id: i64,
        start: NaiveDate,
        end: NaiveDate,
        warnings: &mut Vec<TraceWarning>,
    ) -> Vec<LeaveRequest> {
        let Some(source) = &self.leave else {
            return Vec::new();
        };

        match source.approved_in_range(employee_id, start, end) {
            Ok(requests) => requests,
            Err(err) => {
                warn!(
                    employee_id,
                    error = %err,
                    "Leave source failed; leave deduction degrades to zero"
                );
                warnings.push(TraceWarning {
                    code: "LEAVE_SOURCE_FAILED".to_string(),
                    message: format!("leave source failed: {}", err),
                    severity: WarningSeverity::Medium,
                });
                Vec::new()
            }
        }
    }
}

fn validate_request(
    employee_id: i64,
    period_start: NaiveDate,
    period_end: NaiveDate,
) -> PayrollResult<()> {
    if employee_id <= 0 {
        return Err(PayrollError::InvalidEmployeeId { employee_id });
    }
    if period_end < period_start {
        return Err(PayrollError::InvalidPeriod {
            start: period_start,
            end: period_end,
            message: "period end precedes period start".to_string(),
        });
    }

    let today = Local::now().date_naive();
    if period_start > today {
        return Err(PayrollError::InvalidPeriod {
            start: period_start,
            end: period_end,
            message: "period start is in the future".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceError;
    use crate::models::{AttendanceRecord, EmploymentStatus, LeaveType};
    use chrono::{Duration, NaiveTime};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn employee(id: i64, salary: &str) -> Employee {
        Employee {
            id,
            first_name: "Jose".to_string(),
            last_name: "Crisostomo".to_string(),
            birthday: date(1990, 4, 18),
            address: None,
            phone_number: None,
            sss_number: None,
            philhealth_number: None,
            tin: None,
            pagibig_number: None,
            status: EmploymentStatus::Regular,
            position: "Payroll Rank and File".to_string(),
            supervisor: None,
            monthly_salary: dec(salary),
            rice_subsidy: dec("1500"),
            phone_allowance: dec("1000"),
            clothing_allowance: dec("1000"),
        }
    }

    fn attendance(id: i64, day: u32, log_in: &str, log_out: &str) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: id,
            date: date(2024, 6, day),
            log_in: Some(time(log_in)),
            log_out: Some(time(log_out)),
        }
    }

    fn calculator_for(data: crate::sources::InMemoryDataSet) -> PayrollCalculator {
        let data = Arc::new(data);
        PayrollCalculator::new(PayrollConfig::default(), data.clone(), data.clone())
            .with_overtime_source(data.clone())
            .with_leave_source(data)
    }

    struct FailingOvertime;

    impl OvertimeSource for FailingOvertime {
        fn approved_in_range(
            &self,
            _employee_id: i64,
            _start: NaiveDate,
            _end: NaiveDate,
        ) -> Result<Vec<OvertimeRecord>, SourceError> {
            Err(SourceError::new("overtime table offline"))
        }
    }

    struct FailingLeave;

    impl LeaveSource for FailingLeave {
        fn approved_in_range(
            &self,
            _employee_id: i64,
            _start: NaiveDate,
            _end: NaiveDate,
        ) -> Result<Vec<LeaveRequest>, SourceError> {
            Err(SourceError::new("leave table offline"))
        }
    }

    #[test]
    fn test_rejects_non_positive_employee_id() {
        let calculator = calculator_for(crate::sources::InMemoryDataSet::new());

        let result = calculator.calculate(-1, date(2024, 6, 1), date(2024, 6, 15));
        match result {
            Err(PayrollError::InvalidEmployeeId { employee_id }) => {
                assert_eq!(employee_id, -1);
            }
            _ => panic!("Expected InvalidEmployeeId error"),
        }
    }

    #[test]
    fn test_rejects_reversed_period() {
        let calculator = calculator_for(crate::sources::InMemoryDataSet::new());

        let result = calculator.calculate(10001, date(2024, 6, 15), date(2024, 6, 1));
        assert!(matches!(result, Err(PayrollError::InvalidPeriod { .. })));
    }

    #[test]
    fn test_rejects_future_period_start() {
        let calculator = calculator_for(crate::sources::InMemoryDataSet::new());

        let future = Local::now().date_naive() + Duration::days(30);
        let result = calculator.calculate(10001, future, future + Duration::days(14));
        match result {
            Err(PayrollError::InvalidPeriod { message, .. }) => {
                assert!(message.contains("future"));
            }
            _ => panic!("Expected InvalidPeriod error"),
        }
    }

    #[test]
    fn test_rejects_unknown_employee() {
        let calculator = calculator_for(crate::sources::InMemoryDataSet::new());

        let result = calculator.calculate(99999, date(2024, 6, 1), date(2024, 6, 15));
        assert!(matches!(
            result,
            Err(PayrollError::EmployeeNotFound { employee_id: 99999 })
        ));
    }

    #[test]
    fn test_rejects_zero_salary_employee() {
        let mut data = crate::sources::InMemoryDataSet::new();
        let mut zero_paid = employee(10001, "1");
        zero_paid.monthly_salary = Decimal::ZERO;
        data.add_employee(zero_paid);

        let calculator = calculator_for(data);
        let result = calculator.calculate(10001, date(2024, 6, 1), date(2024, 6, 15));

        match result {
            Err(PayrollError::InvalidEmployee { field, .. }) => {
                assert_eq!(field, "monthly_salary");
            }
            _ => panic!("Expected InvalidEmployee error"),
        }
    }

    #[test]
    fn test_zero_attendance_yields_zero_earnings_not_error() {
        let mut data = crate::sources::InMemoryDataSet::new();
        data.add_employee(employee(10001, "25000"));

        let calculator = calculator_for(data);
        let payslip = calculator
            .calculate(10001, date(2024, 6, 1), date(2024, 6, 15))
            .unwrap();

        assert_eq!(payslip.days_worked, 0);
        assert_eq!(payslip.gross_earnings, dec("0.00"));
        // Statutory deductions still apply; they depend on salary alone.
        assert_eq!(payslip.deductions.sss, dec("900.00"));
    }

    #[test]
    fn test_trace_has_eleven_sequential_steps() {
        let mut data = crate::sources::InMemoryDataSet::new();
        data.add_employee(employee(10001, "25000"));
        data.add_attendance(attendance(10001, 3, "08:00", "17:00"));

        let calculator = calculator_for(data);
        let payslip = calculator
            .calculate(10001, date(2024, 6, 1), date(2024, 6, 15))
            .unwrap();

        assert_eq!(payslip.trace.steps.len(), 11);
        for (i, step) in payslip.trace.steps.iter().enumerate() {
            assert_eq!(step.step_number, (i + 1) as u32);
        }
        assert_eq!(payslip.trace.steps[0].rule_id, "rate_derivation");
        assert_eq!(payslip.trace.steps[10].rule_id, "finalize_totals");
    }

    #[test]
    fn test_missing_optional_sources_yield_zero_without_warnings() {
        let mut data = crate::sources::InMemoryDataSet::new();
        data.add_employee(employee(10001, "25000"));
        data.add_attendance(attendance(10001, 3, "08:00", "17:00"));

        let data = Arc::new(data);
        let calculator =
            PayrollCalculator::new(PayrollConfig::default(), data.clone(), data.clone());

        let payslip = calculator
            .calculate(10001, date(2024, 6, 1), date(2024, 6, 15))
            .unwrap();

        assert_eq!(payslip.overtime_hours, Decimal::ZERO);
        assert_eq!(payslip.overtime_pay, dec("0.00"));
        assert_eq!(payslip.deductions.unpaid_leave, dec("0.00"));
        assert!(payslip.trace.warnings.is_empty());
        // The trace still shows all eleven steps.
        assert_eq!(payslip.trace.steps.len(), 11);
    }

    #[test]
    fn test_failing_overtime_source_degrades_with_warning() {
        let mut data = crate::sources::InMemoryDataSet::new();
        data.add_employee(employee(10001, "25000"));
        data.add_attendance(attendance(10001, 3, "08:00", "17:00"));

        let data = Arc::new(data);
        let calculator =
            PayrollCalculator::new(PayrollConfig::default(), data.clone(), data.clone())
                .with_overtime_source(Arc::new(FailingOvertime));

        let payslip = calculator
            .calculate(10001, date(2024, 6, 1), date(2024, 6, 15))
            .unwrap();

        assert_eq!(payslip.overtime_pay, dec("0.00"));
        assert_eq!(payslip.trace.warnings.len(), 1);
        assert_eq!(payslip.trace.warnings[0].code, "OVERTIME_SOURCE_FAILED");
    }

    #[test]
    fn test_failing_leave_source_degrades_with_warning() {
        let mut data = crate::sources::InMemoryDataSet::new();
        data.add_employee(employee(10001, "25000"));
        data.add_attendance(attendance(10001, 3, "08:00", "17:00"));

        let data = Arc::new(data);
        let calculator =
            PayrollCalculator::new(PayrollConfig::default(), data.clone(), data.clone())
                .with_leave_source(Arc::new(FailingLeave));

        let payslip = calculator
            .calculate(10001, date(2024, 6, 1), date(2024, 6, 15))
            .unwrap();

        assert_eq!(payslip.deductions.unpaid_leave, dec("0.00"));
        assert_eq!(payslip.trace.warnings.len(), 1);
        assert_eq!(payslip.trace.warnings[0].code, "LEAVE_SOURCE_FAILED");
    }

    #[test]
    fn test_unpaid_leave_reduces_net_pay() {
        let mut data = crate::sources::InMemoryDataSet::new();
        data.add_employee(employee(10001, "22000"));
        data.add_attendance(attendance(10001, 3, "08:00", "17:00"));
        data.add_leave(LeaveRequest {
            employee_id: 10001,
            start_date: date(2024, 6, 10),
            end_date: date(2024, 6, 11),
            leave_type: LeaveType::Unpaid,
            days: 2,
            approved: true,
        });

        let calculator = calculator_for(data);
        let payslip = calculator
            .calculate(10001, date(2024, 6, 1), date(2024, 6, 15))
            .unwrap();

        // 22000 / 22 = 1000 per day, two unpaid days
        assert_eq!(payslip.deductions.unpaid_leave, dec("2000.00"));
    }

    #[test]
    fn test_net_pay_identity_holds() {
        let mut data = crate::sources::InMemoryDataSet::new();
        data.add_employee(employee(10001, "50000"));
        for day in 3..8 {
            data.add_attendance(attendance(10001, day, "08:30", "16:30"));
        }

        let calculator = calculator_for(data);
        let payslip = calculator
            .calculate(10001, date(2024, 6, 1), date(2024, 6, 15))
            .unwrap();

        assert_eq!(
            payslip.net_pay,
            payslip.gross_pay - payslip.total_deductions
        );
    }

    #[test]
    fn test_displayed_rates_are_rounded() {
        let mut data = crate::sources::InMemoryDataSet::new();
        data.add_employee(employee(10001, "50000"));

        let calculator = calculator_for(data);
        let payslip = calculator
            .calculate(10001, date(2024, 6, 1), date(2024, 6, 15))
            .unwrap();

        assert_eq!(payslip.daily_rate, dec("2272.73"));
        assert_eq!(payslip.hourly_rate, dec("284.09"));
        assert_eq!(payslip.monthly_rate, dec("50000"));
    }
}
