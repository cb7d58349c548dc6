//! Configuration loading for the salary calculator.
//!
//! This module provides functionality to load a rate table from a YAML file
//! in place of the built-in standard table.
//!
//! # Example
//!
//! ```no_run
//! use salary_calculator::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/standard_rates.yaml").unwrap();
//! println!("Loaded {} rates", loader.rate_table().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::RateTableConfig;
