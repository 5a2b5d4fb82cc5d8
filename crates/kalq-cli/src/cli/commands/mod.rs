//! Subcommand implementations.

pub mod calc;
pub mod config;
pub mod eval;
