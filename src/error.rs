//! Error types for the salary calculator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The default salary calculation never fails; these errors surface from the
//! strict calculation path and from rate table loading.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the salary calculator.
///
/// # Example
///
/// ```
/// use salary_calculator::error::CalculatorError;
///
/// let error = CalculatorError::RateNotFound {
///     designation: "Intern".to_string(),
/// };
/// assert_eq!(error.to_string(), "No rate defined for designation 'Intern'");
/// ```
#[derive(Debug, Error)]
pub enum CalculatorError {
    /// Rate table file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Rate table file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A rate table entry was unusable.
    #[error("Invalid rate {rate} for designation '{designation}'")]
    InvalidRate {
        /// The designation the rate belongs to.
        designation: String,
        /// The offending rate.
        rate: Decimal,
    },

    /// The rate table has no rate for the designation.
    #[error("No rate defined for designation '{designation}'")]
    RateNotFound {
        /// The designation that was looked up.
        designation: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return CalculatorError.
pub type CalculatorResult<T> = Result<T, CalculatorError>;
