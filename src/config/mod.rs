//! Configuration loading and management for the payroll engine.
//!
//! This module provides functionality to load payroll configuration from
//! YAML files, including the work schedule, contribution schedules, and
//! the withholding tax table. [`PayrollConfig::default`] carries the
//! statutory values, so loading a directory is only needed when a
//! deployment overrides them.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/ph").unwrap();
//! println!("Working days: {}", loader.config().schedule().working_days_per_month);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    PagibigConfig, PayrollConfig, PhilHealthConfig, SssBracket, SssTable, TaxBracket, TaxTable,
    WorkSchedule,
};
