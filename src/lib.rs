//! Salary Calculator
//!
//! This crate computes an employee's pay from their designation and the hours
//! they worked, using a fixed table of hourly rates keyed by designation.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
