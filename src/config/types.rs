//! Configuration types for rate table files.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// Rate table file structure.
///
/// ```yaml
/// rates:
///   Developer: 1000
///   Manager: 2000
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RateTableConfig {
    /// Map of designation label to hourly rate.
    pub rates: HashMap<String, Decimal>,
}
