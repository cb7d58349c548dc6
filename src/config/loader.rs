//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a rate table
//! from YAML.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::calculation::{CONFIG_SOURCE_UNKNOWN, RateTable};
use crate::error::{CalculatorError, CalculatorResult};

use super::types::RateTableConfig;

/// Loads and provides access to a configured rate table.
///
/// # Example
///
/// ```no_run
/// use salary_calculator::config::ConfigLoader;
/// use salary_calculator::calculation::SalaryCalculator;
///
/// let loader = ConfigLoader::load("./config/standard_rates.yaml")?;
/// let calculator = SalaryCalculator::new(loader.into_rate_table());
/// # Ok::<(), salary_calculator::error::CalculatorError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rate_table: RateTable,
}

impl ConfigLoader {
    /// Loads a rate table from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or is missing `rates` (`ConfigParseError`)
    /// - An entry has an empty label (`ConfigParseError`)
    /// - An entry has a negative rate (`InvalidRate`)
    pub fn load<P: AsRef<Path>>(path: P) -> CalculatorResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| CalculatorError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::parse(&content, &path_str)?;
        info!(
            path = %path_str,
            rates = loader.rate_table.len(),
            "Loaded rate table"
        );
        Ok(loader)
    }

    /// Parses a rate table from an in-memory YAML document.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_calculator::config::ConfigLoader;
    /// use rust_decimal::Decimal;
    ///
    /// let loader = ConfigLoader::from_yaml_str("rates:\n  Tester: 500\n")?;
    /// assert_eq!(loader.rate_table().rate_for("Tester"), Some(Decimal::from(500)));
    /// # Ok::<(), salary_calculator::error::CalculatorError>(())
    /// ```
    pub fn from_yaml_str(yaml: &str) -> CalculatorResult<Self> {
        Self::parse(yaml, "<inline>")
    }

    fn parse(content: &str, path: &str) -> CalculatorResult<Self> {
        let config: RateTableConfig =
            serde_yaml::from_str(content).map_err(|e| CalculatorError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        let rate_table = RateTable::from_config(config).map_err(|e| match e {
            CalculatorError::ConfigParseError {
                path: source,
                message,
            } if source == CONFIG_SOURCE_UNKNOWN => CalculatorError::ConfigParseError {
                path: path.to_string(),
                message,
            },
            other => other,
        })?;
        Ok(Self { rate_table })
    }

    /// Returns the loaded rate table.
    pub fn rate_table(&self) -> &RateTable {
        &self.rate_table
    }

    /// Consumes the loader, returning the rate table.
    pub fn into_rate_table(self) -> RateTable {
        self.rate_table
    }
}
