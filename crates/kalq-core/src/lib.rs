//! Core calculator logic: expression evaluation, modes, history, config.

pub mod config;
pub mod expr;
pub mod history;
pub mod logging;
pub mod modes;
pub mod plot;
pub mod result;
