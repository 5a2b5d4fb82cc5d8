//! Interactive calculator (the default command).

use anyhow::{Result, anyhow};
use kalq_core::config::Config;
use kalq_core::modes::Mode;

/// Launches the TUI, holding the log guard for the whole session.
pub fn run(config: &Config, mode_override: Option<&str>) -> Result<()> {
    let mode = mode_override
        .map(|name| {
            Mode::from_name(name).ok_or_else(|| {
                anyhow!(
                    "unknown mode '{name}' (expected standard, programmer, \
                     logic-gate, regex, or base-conversion)"
                )
            })
        })
        .transpose()?;

    let _guard = kalq_core::logging::init_file_logging(&config.log_filter)?;

    kalq_tui::run_calculator(config, mode)
}
