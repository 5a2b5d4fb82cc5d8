//! Full-screen TUI for the kalq calculator.

pub mod expr_buffer;
pub mod render;
pub mod runtime;
pub mod selection;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
use kalq_core::config::Config;
use kalq_core::modes::Mode;
pub use runtime::CalcRuntime;
use tracing::info;

/// Runs the interactive calculator.
///
/// `mode_override` takes precedence over the configured start mode.
pub fn run_calculator(config: &Config, mode_override: Option<Mode>) -> Result<()> {
    // The calculator renders to stdout and needs a real terminal.
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The calculator requires a terminal.\n\
             Use `kalq eval --expr '...'` for non-interactive evaluation."
        );
    }

    let mut runtime = CalcRuntime::new(config)?;
    if let Some(mode) = mode_override {
        runtime.state.engine.mode = mode;
        runtime.state.selection.clamp(mode.grid());
    }
    info!(
        mode = runtime.state.engine.mode.display_name(),
        "calculator started"
    );

    runtime.run()
}
