//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll calculation.
//!
//! The taxonomy follows the failure semantics of the calculator: validation
//! and lookup failures are fatal and surface as [`PayrollError`]; failures of
//! optional collaborators (overtime, leave) never appear here because the
//! engine degrades those contributions to zero instead of propagating.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All fatal conditions are surfaced through this type, carrying a
/// human-readable message and, where applicable, the underlying cause.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::InvalidEmployeeId { employee_id: -1 };
/// assert_eq!(
///     error.to_string(),
///     "Invalid employee id -1: must be a positive integer"
/// );
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// The requested employee id is zero or negative.
    #[error("Invalid employee id {employee_id}: must be a positive integer")]
    InvalidEmployeeId {
        /// The rejected employee id.
        employee_id: i64,
    },

    /// The pay period dates are not usable for a calculation.
    #[error("Invalid pay period {start} to {end}: {message}")]
    InvalidPeriod {
        /// The requested period start.
        start: NaiveDate,
        /// The requested period end.
        end: NaiveDate,
        /// A description of what made the period invalid.
        message: String,
    },

    /// No employee exists with the requested id.
    #[error("Employee {employee_id} not found")]
    EmployeeNotFound {
        /// The employee id that was not found.
        employee_id: i64,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A required data source failed while serving a lookup.
    ///
    /// Raised for the employee directory and the attendance source, which are
    /// mandatory collaborators. Optional sources degrade instead.
    #[error("Failed to load {context}")]
    SourceUnavailable {
        /// What was being loaded (e.g. "attendance records").
        context: String,
        /// The underlying data source error.
        #[source]
        source: SourceError,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A post-computation invariant did not hold.
    ///
    /// Signals an internal logic defect (negative gross pay or negative total
    /// deductions), never bad input.
    #[error("Payroll invariant violated: {message}")]
    InvariantViolation {
        /// A description of the violated invariant.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

/// An error raised by a data source collaborator.
///
/// Concrete implementations (a SQL DAO, a CSV import, an HTTP client) wrap
/// their driver errors in this type so the engine stays independent of any
/// particular storage backend.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SourceError {
    message: String,
    #[source]
    cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SourceError {
    /// Creates a source error from a message alone.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Creates a source error wrapping an underlying driver error.
    pub fn with_cause(
        message: impl Into<String>,
        cause: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }

    /// Returns the human-readable message for this error.
    pub fn message(&self) -> &str {
        &self.message
    }
}
