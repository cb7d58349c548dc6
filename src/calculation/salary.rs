//! Salary calculation functionality.
//!
//! This module computes an employee's pay as working hours multiplied by the
//! hourly rate for their designation. Unrecognized designations are paid
//! zero rather than treated as an error; [`SalaryCalculator::calculate_salary_checked`]
//! offers the strict alternative.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::{CalculatorError, CalculatorResult};
use crate::models::{AuditStep, Employee};

use super::rate_table::RateTable;

/// The result of a salary calculation, including the amount and audit step.
#[derive(Debug, Clone)]
pub struct SalaryCalculation {
    /// The calculated salary. Zero when no rate matched.
    pub amount: Decimal,
    /// The hourly rate applied, or `None` if the designation was not recognized.
    pub rate: Option<Decimal>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes salaries from a rate table.
///
/// The calculator holds no state besides its rate table; every call is
/// independent and reads only its input.
///
/// # Examples
///
/// ```
/// use salary_calculator::calculation::SalaryCalculator;
/// use salary_calculator::models::Employee;
/// use rust_decimal::Decimal;
///
/// let calculator = SalaryCalculator::default();
///
/// let developer = Employee::new("Developer", Decimal::from(8));
/// assert_eq!(calculator.calculate_salary(&developer), Decimal::from(8000));
///
/// let intern = Employee::new("Intern", Decimal::from(8));
/// assert_eq!(calculator.calculate_salary(&intern), Decimal::ZERO);
/// ```
#[derive(Debug, Clone)]
pub struct SalaryCalculator {
    rate_table: RateTable,
}

impl Default for SalaryCalculator {
    fn default() -> Self {
        Self::new(RateTable::standard())
    }
}

impl SalaryCalculator {
    /// Creates a calculator over the given rate table.
    pub fn new(rate_table: RateTable) -> Self {
        Self { rate_table }
    }

    /// Returns the rate table in use.
    pub fn rate_table(&self) -> &RateTable {
        &self.rate_table
    }

    fn lookup(&self, employee: &Employee) -> Option<Decimal> {
        employee
            .designation()
            .and_then(|designation| self.rate_table.rate_for(designation))
    }

    /// Calculates an employee's salary.
    ///
    /// Returns `working_hours * rate` when the designation is in the table,
    /// and zero otherwise (including a missing designation or a casing
    /// mismatch). Negative hours are not rejected.
    ///
    /// A product beyond the `Decimal` range (about 7.9e28) is capped at
    /// `Decimal::MAX`, or `Decimal::MIN` for a negative product, and a
    /// warning is logged. Use [`SalaryCalculator::calculate_salary_checked`]
    /// to get an error instead.
    pub fn calculate_salary(&self, employee: &Employee) -> Decimal {
        pay_for(employee, self.lookup(employee))
    }

    /// Calculates an employee's salary, rejecting input the lenient path accepts.
    ///
    /// # Returns
    ///
    /// Returns the salary, or an error if:
    /// - The designation is missing or empty (`InvalidEmployee`)
    /// - The working hours are negative (`InvalidEmployee`)
    /// - The designation has no rate in the table (`RateNotFound`)
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_calculator::calculation::SalaryCalculator;
    /// use salary_calculator::error::CalculatorError;
    /// use salary_calculator::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let calculator = SalaryCalculator::default();
    /// let result = calculator.calculate_salary_checked(&Employee::new("CEO", Decimal::from(8)));
    /// assert!(matches!(result, Err(CalculatorError::RateNotFound { .. })));
    /// ```
    pub fn calculate_salary_checked(&self, employee: &Employee) -> CalculatorResult<Decimal> {
        employee.validate()?;

        let designation = employee.designation().unwrap_or_default();
        let rate =
            self.rate_table
                .rate_for(designation)
                .ok_or_else(|| CalculatorError::RateNotFound {
                    designation: designation.to_string(),
                })?;

        employee
            .working_hours
            .checked_mul(rate)
            .ok_or_else(|| CalculatorError::InvalidEmployee {
                field: "working_hours".to_string(),
                message: format!(
                    "{} hours at {} overflows the salary amount",
                    employee.working_hours, rate
                ),
            })
    }

    /// Calculates an employee's salary and records an audit step.
    ///
    /// Semantics match [`SalaryCalculator::calculate_salary`].
    ///
    /// # Arguments
    ///
    /// * `employee` - The employee to calculate pay for
    /// * `step_number` - The step number for audit trail sequencing
    pub fn calculate_salary_with_audit(
        &self,
        employee: &Employee,
        step_number: u32,
    ) -> SalaryCalculation {
        let rate = self.lookup(employee);
        let amount = pay_for(employee, rate);
        let designation = employee.designation();
        let hours = employee.working_hours.normalize();

        let (output, reasoning) = match rate {
            Some(rate) => (
                serde_json::json!({
                    "amount": amount.normalize().to_string(),
                    "rate": rate.normalize().to_string(),
                    "rate_found": true
                }),
                format!(
                    "{} hours x {} = {}",
                    hours,
                    rate.normalize(),
                    amount.normalize()
                ),
            ),
            None => (
                serde_json::json!({
                    "amount": "0",
                    "rate_found": false
                }),
                match designation {
                    Some(d) => format!("No rate defined for designation '{}' - salary is 0", d),
                    None => "No designation provided - salary is 0".to_string(),
                },
            ),
        };

        let audit_step = AuditStep {
            step_number,
            rule_id: "salary_calculation".to_string(),
            rule_name: "Salary Calculation".to_string(),
            input: serde_json::json!({
                "designation": designation,
                "working_hours": hours.to_string()
            }),
            output,
            reasoning,
        };

        SalaryCalculation {
            amount,
            rate,
            audit_step,
        }
    }
}

/// Multiplies hours by the looked-up rate, or pays zero when there is none.
fn pay_for(employee: &Employee, rate: Option<Decimal>) -> Decimal {
    let amount = match rate {
        Some(rate) => employee.working_hours.checked_mul(rate).unwrap_or_else(|| {
            let capped = if employee.working_hours.is_sign_negative() != rate.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            };
            warn!(
                designation = ?employee.designation(),
                working_hours = %employee.working_hours,
                rate = %rate,
                capped = %capped,
                "Salary exceeds the representable range, capping"
            );
            capped
        }),
        None => {
            debug!(
                designation = ?employee.designation(),
                "No rate for designation, salary defaults to zero"
            );
            Decimal::ZERO
        }
    };

    debug!(
        designation = ?employee.designation(),
        working_hours = %employee.working_hours,
        amount = %amount,
        "Calculated salary"
    );
    amount
}

/// Calculates an employee's salary against the standard rate table.
///
/// Developers earn 1000 per hour and managers 2000 per hour; any other
/// designation earns zero.
///
/// # Examples
///
/// ```
/// use salary_calculator::calculation::calculate_salary;
/// use salary_calculator::models::Employee;
/// use rust_decimal::Decimal;
///
/// let manager = Employee::new("Manager", Decimal::from(8));
/// assert_eq!(calculate_salary(&manager), Decimal::from(16000));
/// ```
pub fn calculate_salary(employee: &Employee) -> Decimal {
    SalaryCalculator::default().calculate_salary(employee)
}
