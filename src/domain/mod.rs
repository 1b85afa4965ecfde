//! Core domain types and return calculations.

pub mod valuation;
pub mod transaction;
pub mod returns;
pub mod portfolio;
pub mod config_validation;
pub mod error;
