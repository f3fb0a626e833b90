//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while producing a salary slip.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// Calculation methods only ever fail with [`PayrollError::MissingEmployee`],
/// [`PayrollError::InvalidDependantCount`], or an error handed back by the
/// danger-zone collaborator. The configuration variants are raised while
/// loading rate tables.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::InvalidDependantCount { count: -1 };
/// assert_eq!(error.to_string(), "Invalid dependant count: -1 (must not be negative)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayrollError {
    /// No employee was supplied to a calculation.
    #[error("Employee is required")]
    MissingEmployee,

    /// The employee carries a negative dependant count.
    #[error("Invalid dependant count: {count} (must not be negative)")]
    InvalidDependantCount {
        /// The rejected dependant count.
        count: i32,
    },

    /// The danger-zone collaborator failed to answer.
    #[error("Danger zone lookup failed for duty station '{duty_station}': {message}")]
    DangerZoneLookup {
        /// The duty station that was being looked up.
        duty_station: String,
        /// A description of the failure.
        message: String,
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

    /// A configuration value breaks a rule invariant.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
