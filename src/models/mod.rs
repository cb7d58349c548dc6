//! Core data models for the salary calculator.
//!
//! This module contains the domain models consumed and produced by the
//! calculation functions.

mod audit;
mod employee;

pub use audit::AuditStep;
pub use employee::Employee;
