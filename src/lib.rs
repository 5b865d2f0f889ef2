//! Payroll computation engine for Philippine statutory payroll.
//!
//! This crate computes a payslip for one employee over one pay period:
//! attendance earnings, approved overtime, allowances, late/undertime and
//! unpaid-leave deductions, and the government-mandated contributions
//! (SSS, PhilHealth, Pag-IBIG, withholding tax).

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod sources;
