//! Employee model.
//!
//! This module defines the Employee record read by the salary calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CalculatorError, CalculatorResult};

/// Represents an employee whose pay is being calculated.
///
/// The record is owned by the caller and only ever read by the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// The employee's role label (e.g., "Developer", "Manager").
    ///
    /// `None` models a missing or null designation.
    #[serde(default)]
    pub designation: Option<String>,
    /// The number of hours worked.
    ///
    /// Hours times rate must fit in a `Decimal` (about 7.9e28); beyond that
    /// the lenient calculation caps the salary at `Decimal::MAX`.
    #[serde(alias = "workingHours")]
    pub working_hours: Decimal,
}

impl Employee {
    /// Creates an employee with the given designation and working hours.
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_calculator::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::new("Developer", Decimal::from(8));
    /// assert_eq!(employee.designation(), Some("Developer"));
    /// ```
    pub fn new(designation: impl Into<String>, working_hours: Decimal) -> Self {
        Self {
            designation: Some(designation.into()),
            working_hours,
        }
    }

    /// Returns the designation as a string slice, if present.
    pub fn designation(&self) -> Option<&str> {
        self.designation.as_deref()
    }

    /// Checks the record for values the strict calculation refuses.
    ///
    /// Returns `InvalidEmployee` if the designation is missing or empty,
    /// or if the working hours are negative.
    pub fn validate(&self) -> CalculatorResult<()> {
        match self.designation() {
            None => {
                return Err(CalculatorError::InvalidEmployee {
                    field: "designation".to_string(),
                    message: "is missing".to_string(),
                });
            }
            Some(d) if d.is_empty() => {
                return Err(CalculatorError::InvalidEmployee {
                    field: "designation".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
            Some(_) => {}
        }

        if self.working_hours < Decimal::ZERO {
            return Err(CalculatorError::InvalidEmployee {
                field: "working_hours".to_string(),
                message: format!("must not be negative, got {}", self.working_hours),
            });
        }

        Ok(())
    }
}
