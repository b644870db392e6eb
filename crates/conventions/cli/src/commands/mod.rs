//! CLI command implementations

pub mod check;
pub mod config;
pub mod predicates;
pub mod units;
