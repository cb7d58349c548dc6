//! Designation rate table.
//!
//! This module provides the explicit mapping from designation label to hourly
//! rate that the salary calculation consults.

use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::config::RateTableConfig;
use crate::error::{CalculatorError, CalculatorResult};

/// Designation label for developers.
pub const DEVELOPER: &str = "Developer";

/// Designation label for managers.
pub const MANAGER: &str = "Manager";

/// Path reported for configuration errors raised without a file at hand.
pub(crate) const CONFIG_SOURCE_UNKNOWN: &str = "<config>";

/// Returns the standard hourly rate for developers (1000).
pub fn developer_rate() -> Decimal {
    Decimal::new(1000, 0)
}

/// Returns the standard hourly rate for managers (2000).
pub fn manager_rate() -> Decimal {
    Decimal::new(2000, 0)
}

/// A fixed mapping from designation label to hourly rate.
///
/// Lookups are exact and case-sensitive: "developer" does not match
/// "Developer".
///
/// # Examples
///
/// ```
/// use salary_calculator::calculation::RateTable;
/// use rust_decimal::Decimal;
///
/// let table = RateTable::standard();
/// assert_eq!(table.rate_for("Manager"), Some(Decimal::from(2000)));
/// assert_eq!(table.rate_for("manager"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateTable {
    rates: HashMap<String, Decimal>,
}

impl RateTable {
    /// Creates an empty rate table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the standard table: Developer at 1000 and Manager at 2000.
    pub fn standard() -> Self {
        Self::new()
            .with_rate(DEVELOPER, developer_rate())
            .with_rate(MANAGER, manager_rate())
    }

    /// Builds a rate table from a deserialized configuration.
    ///
    /// Returns `ConfigParseError` for an empty designation label and
    /// `InvalidRate` for a negative rate.
    pub fn from_config(config: RateTableConfig) -> CalculatorResult<Self> {
        let mut rates = HashMap::with_capacity(config.rates.len());

        for (designation, rate) in config.rates {
            if designation.is_empty() {
                return Err(CalculatorError::ConfigParseError {
                    path: CONFIG_SOURCE_UNKNOWN.to_string(),
                    message: "rates: designation label must not be empty".to_string(),
                });
            }
            if rate < Decimal::ZERO {
                return Err(CalculatorError::InvalidRate { designation, rate });
            }
            rates.insert(designation, rate);
        }

        Ok(Self { rates })
    }

    /// Returns the table with `designation` set to `rate`.
    pub fn with_rate(mut self, designation: impl Into<String>, rate: Decimal) -> Self {
        self.rates.insert(designation.into(), rate);
        self
    }

    /// Looks up the hourly rate for a designation.
    pub fn rate_for(&self, designation: &str) -> Option<Decimal> {
        self.rates.get(designation).copied()
    }

    /// Returns the recognized designations in sorted order.
    pub fn designations(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.rates.keys().map(String::as_str).collect();
        labels.sort_unstable();
        labels
    }

    /// Returns the number of designations in the table.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the table holds no designations.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_rates() {
        let table = RateTable::standard();
        assert_eq!(table.rate_for("Developer"), Some(Decimal::from(1000)));
        assert_eq!(table.rate_for("Manager"), Some(Decimal::from(2000)));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = RateTable::standard();
        assert_eq!(table.rate_for("developer"), None);
        assert_eq!(table.rate_for("MANAGER"), None);
    }

    #[test]
    fn test_lookup_does_not_trim() {
        let table = RateTable::standard();
        assert_eq!(table.rate_for(" Developer"), None);
        assert_eq!(table.rate_for("Developer "), None);
    }

    #[test]
    fn test_unknown_and_empty_designations_have_no_rate() {
        let table = RateTable::standard();
        assert_eq!(table.rate_for("Intern"), None);
        assert_eq!(table.rate_for(""), None);
    }

    #[test]
    fn test_with_rate_extends_without_touching_existing() {
        let table = RateTable::standard().with_rate("Tester", Decimal::from(750));
        assert_eq!(table.rate_for("Tester"), Some(Decimal::from(750)));
        assert_eq!(table.rate_for("Developer"), Some(Decimal::from(1000)));
        assert_eq!(table.designations(), vec!["Developer", "Manager", "Tester"]);
    }

    #[test]
    fn test_empty_table() {
        let table = RateTable::new();
        assert!(table.is_empty());
        assert!(table.designations().is_empty());
    }

    #[test]
    fn test_from_config_rejects_empty_label() {
        let mut rates = HashMap::new();
        rates.insert(String::new(), Decimal::from(10));

        match RateTable::from_config(RateTableConfig { rates }) {
            Err(CalculatorError::ConfigParseError { path, message }) => {
                assert_eq!(path, "<config>");
                assert_eq!(message, "rates: designation label must not be empty");
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_from_config_rejects_negative_rate() {
        let mut rates = HashMap::new();
        rates.insert("Developer".to_string(), Decimal::from(-1));

        let result = RateTable::from_config(RateTableConfig { rates });
        assert!(matches!(result, Err(CalculatorError::InvalidRate { .. })));
    }

    #[test]
    fn test_from_config_accepts_zero_rate() {
        let mut rates = HashMap::new();
        rates.insert("Volunteer".to_string(), Decimal::ZERO);

        let table = RateTable::from_config(RateTableConfig { rates }).unwrap();
        assert_eq!(table.rate_for("Volunteer"), Some(Decimal::ZERO));
    }
}
