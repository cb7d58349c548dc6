//! Audit record for salary calculations.
//!
//! Each calculation can emit an [`AuditStep`] capturing what went in, what
//! came out, and a human-readable explanation of the decision.

use serde::{Deserialize, Serialize};

/// A single step in an audit trace recording a calculation decision.
///
/// # Example
///
/// ```
/// use salary_calculator::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "salary_calculation".to_string(),
///     rule_name: "Salary Calculation".to_string(),
///     input: serde_json::json!({ "designation": "Developer", "working_hours": "8" }),
///     output: serde_json::json!({ "amount": "8000" }),
///     reasoning: "8 hours x 1000 = 8000".to_string(),
/// };
/// assert_eq!(step.rule_id, "salary_calculation");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}
