//! Calculation logic for the salary calculator.
//!
//! This module contains the designation rate table and the salary
//! calculation built on it.

mod rate_table;
mod salary;

pub(crate) use rate_table::CONFIG_SOURCE_UNKNOWN;
pub use rate_table::{DEVELOPER, MANAGER, RateTable, developer_rate, manager_rate};
pub use salary::{SalaryCalculation, SalaryCalculator, calculate_salary};
