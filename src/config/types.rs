//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, plus a [`Default`]
//! carrying the current statutory values so the engine works without any
//! file at all.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::Deserialize;

/// The company work schedule and timekeeping policy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkSchedule {
    /// Standard working days per month used to derive the daily rate.
    pub working_days_per_month: u32,
    /// Standard working hours per day used to derive the hourly rate.
    pub working_hours_per_day: u32,
    /// Nominal start of the working day. Late minutes are measured from here.
    pub scheduled_start: NaiveTime,
    /// Grace period cutoff. A log-in at or before this time is not late.
    pub late_threshold: NaiveTime,
    /// Nominal end of the working day. Undertime is measured up to here.
    pub scheduled_end: NaiveTime,
    /// Premium multiplier applied to the hourly rate for overtime.
    pub overtime_multiplier: Decimal,
}

/// One row of the SSS contribution schedule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SssBracket {
    /// The highest monthly salary this row applies to.
    pub salary_ceiling: Decimal,
    /// The employee contribution for salaries up to the ceiling.
    pub contribution: Decimal,
}

/// The SSS contribution schedule.
///
/// Rows are ordered by ascending salary ceiling; a salary above the last
/// ceiling pays the over-ceiling contribution.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SssTable {
    /// Contribution rows ordered by ascending salary ceiling.
    pub brackets: Vec<SssBracket>,
    /// Contribution for salaries above the highest ceiling.
    pub above_ceiling_contribution: Decimal,
}

impl SssTable {
    /// Returns the employee contribution for a monthly salary.
    ///
    /// Picks the first bracket whose ceiling is at or above the salary,
    /// falling back to the over-ceiling contribution.
    pub fn contribution_for(&self, monthly_salary: Decimal) -> Decimal {
        self.brackets
            .iter()
            .find(|b| monthly_salary <= b.salary_ceiling)
            .map(|b| b.contribution)
            .unwrap_or(self.above_ceiling_contribution)
    }
}

/// PhilHealth premium parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PhilHealthConfig {
    /// Premium rate applied to the monthly salary.
    pub premium_rate: Decimal,
    /// The employee's share of the premium.
    pub employee_share: Decimal,
    /// Floor for the employee's monthly contribution.
    pub min_contribution: Decimal,
    /// Ceiling for the employee's monthly contribution.
    pub max_contribution: Decimal,
}

/// Pag-IBIG contribution parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PagibigConfig {
    /// Salary at or below which the lower rate applies.
    pub salary_threshold: Decimal,
    /// Contribution rate for salaries at or below the threshold.
    pub rate_below_threshold: Decimal,
    /// Contribution rate for salaries above the threshold.
    pub rate_above_threshold: Decimal,
    /// Cap on the monthly contribution at the higher rate.
    pub max_contribution: Decimal,
}

/// One bracket of the annual withholding tax table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxBracket {
    /// The highest annual salary this bracket applies to. The top bracket
    /// leaves this unset.
    #[serde(default)]
    pub annual_ceiling: Option<Decimal>,
    /// Fixed tax owed at the bottom of the bracket.
    pub base_tax: Decimal,
    /// Rate applied to the excess over the bracket floor.
    pub marginal_rate: Decimal,
    /// The annual salary the excess is measured from.
    pub excess_over: Decimal,
}

/// The progressive annual withholding tax table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxTable {
    /// Brackets ordered by ascending ceiling, ending with one open bracket.
    pub brackets: Vec<TaxBracket>,
}

impl TaxTable {
    /// Returns the annual tax owed on an annual salary.
    pub fn annual_tax_for(&self, annual_salary: Decimal) -> Decimal {
        self.brackets
            .iter()
            .find(|b| match b.annual_ceiling {
                Some(ceiling) => annual_salary <= ceiling,
                None => true,
            })
            .map(|b| b.base_tax + b.marginal_rate * (annual_salary - b.excess_over))
            .unwrap_or(Decimal::ZERO)
    }
}

/// The contributions configuration file structure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContributionsConfig {
    /// SSS contribution schedule.
    pub sss: SssTable,
    /// PhilHealth premium parameters.
    pub philhealth: PhilHealthConfig,
    /// Pag-IBIG contribution parameters.
    pub pagibig: PagibigConfig,
}

/// The complete payroll configuration.
///
/// Aggregates the work schedule, the contribution schedules, and the tax
/// table. [`PayrollConfig::default`] carries the statutory values in force,
/// so most deployments never load a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollConfig {
    /// Work schedule and timekeeping policy.
    schedule: WorkSchedule,
    /// SSS contribution schedule.
    sss: SssTable,
    /// PhilHealth premium parameters.
    philhealth: PhilHealthConfig,
    /// Pag-IBIG contribution parameters.
    pagibig: PagibigConfig,
    /// Annual withholding tax table.
    tax: TaxTable,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(
        schedule: WorkSchedule,
        sss: SssTable,
        philhealth: PhilHealthConfig,
        pagibig: PagibigConfig,
        tax: TaxTable,
    ) -> Self {
        Self {
            schedule,
            sss,
            philhealth,
            pagibig,
            tax,
        }
    }

    /// Returns the work schedule.
    pub fn schedule(&self) -> &WorkSchedule {
        &self.schedule
    }

    /// Returns the SSS contribution schedule.
    pub fn sss(&self) -> &SssTable {
        &self.sss
    }

    /// Returns the PhilHealth premium parameters.
    pub fn philhealth(&self) -> &PhilHealthConfig {
        &self.philhealth
    }

    /// Returns the Pag-IBIG contribution parameters.
    pub fn pagibig(&self) -> &PagibigConfig {
        &self.pagibig
    }

    /// Returns the annual withholding tax table.
    pub fn tax(&self) -> &TaxTable {
        &self.tax
    }

    /// Checks the configuration for internal consistency.
    ///
    /// Returns a description of the first problem found: zero schedule
    /// divisors, times out of order, empty or unordered bracket tables, or
    /// a tax table whose top bracket is not open-ended.
    pub fn validate(&self) -> Result<(), String> {
        if self.schedule.working_days_per_month == 0 {
            return Err("working_days_per_month must be positive".to_string());
        }
        if self.schedule.working_hours_per_day == 0 {
            return Err("working_hours_per_day must be positive".to_string());
        }
        if self.schedule.late_threshold < self.schedule.scheduled_start {
            return Err("late_threshold must not precede scheduled_start".to_string());
        }
        if self.schedule.scheduled_end <= self.schedule.late_threshold {
            return Err("scheduled_end must follow late_threshold".to_string());
        }
        if self.schedule.overtime_multiplier <= Decimal::ZERO {
            return Err("overtime_multiplier must be positive".to_string());
        }

        if self.sss.brackets.is_empty() {
            return Err("sss table has no brackets".to_string());
        }
        for pair in self.sss.brackets.windows(2) {
            if pair[1].salary_ceiling <= pair[0].salary_ceiling {
                return Err(format!(
                    "sss brackets out of order at ceiling {}",
                    pair[1].salary_ceiling
                ));
            }
        }

        if self.philhealth.min_contribution > self.philhealth.max_contribution {
            return Err("philhealth min_contribution exceeds max_contribution".to_string());
        }

        if self.tax.brackets.is_empty() {
            return Err("tax table has no brackets".to_string());
        }
        for pair in self.tax.brackets.windows(2) {
            match (pair[0].annual_ceiling, pair[1].annual_ceiling) {
                (Some(lower), Some(upper)) if upper <= lower => {
                    return Err(format!("tax brackets out of order at ceiling {}", upper));
                }
                (None, _) => {
                    return Err("open tax bracket must come last".to_string());
                }
                _ => {}
            }
        }
        if let Some(last) = self.tax.brackets.last() {
            if last.annual_ceiling.is_some() {
                return Err("tax table must end with an open bracket".to_string());
            }
        }

        Ok(())
    }
}

// literal arguments below are always in range
fn hms(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

impl Default for PayrollConfig {
    fn default() -> Self {
        // contributions in tenths of a peso
        const SSS_ROWS: [(i64, i64); 12] = [
            (4000, 1800),
            (4750, 2025),
            (5500, 2250),
            (6250, 2475),
            (7000, 2700),
            (7750, 2925),
            (8500, 3150),
            (9250, 3375),
            (10000, 3600),
            (15000, 5400),
            (20000, 7200),
            (25000, 9000),
        ];

        // (annual ceiling, base tax, marginal rate in %, excess over)
        const TAX_ROWS: [(Option<i64>, i64, i64, i64); 6] = [
            (Some(250_000), 0, 0, 0),
            (Some(400_000), 0, 15, 250_000),
            (Some(800_000), 22_500, 20, 400_000),
            (Some(2_000_000), 102_500, 25, 800_000),
            (Some(8_000_000), 402_500, 30, 2_000_000),
            (None, 2_202_500, 35, 8_000_000),
        ];

        Self {
            schedule: WorkSchedule {
                working_days_per_month: 22,
                working_hours_per_day: 8,
                scheduled_start: hms(8, 0),
                late_threshold: hms(8, 15),
                scheduled_end: hms(17, 0),
                overtime_multiplier: Decimal::new(125, 2),
            },
            sss: SssTable {
                brackets: SSS_ROWS
                    .iter()
                    .map(|&(ceiling, contribution)| SssBracket {
                        salary_ceiling: Decimal::from(ceiling),
                        contribution: Decimal::new(contribution, 1),
                    })
                    .collect(),
                above_ceiling_contribution: Decimal::from(1125),
            },
            philhealth: PhilHealthConfig {
                premium_rate: Decimal::new(5, 2),
                employee_share: Decimal::new(5, 1),
                min_contribution: Decimal::from(500),
                max_contribution: Decimal::from(5000),
            },
            pagibig: PagibigConfig {
                salary_threshold: Decimal::from(1500),
                rate_below_threshold: Decimal::new(1, 2),
                rate_above_threshold: Decimal::new(2, 2),
                max_contribution: Decimal::from(200),
            },
            tax: TaxTable {
                brackets: TAX_ROWS
                    .iter()
                    .map(|&(ceiling, base, rate, over)| TaxBracket {
                        annual_ceiling: ceiling.map(Decimal::from),
                        base_tax: Decimal::from(base),
                        marginal_rate: Decimal::new(rate, 2),
                        excess_over: Decimal::from(over),
                    })
                    .collect(),
            },
        }
    }
}
