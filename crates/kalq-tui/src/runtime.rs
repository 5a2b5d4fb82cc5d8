//! Event-loop runtime: owns the terminal and the state.
//!
//! One iteration = full redraw, one blocking read of the next terminal
//! event, one synchronous pass through the reducer. No async runtime and
//! no background work; evaluation is bounded and runs inline.

use std::io::Stdout;

use anyhow::{Context, Result};
use crossterm::event;
use kalq_core::config::Config;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::state::AppState;
use crate::{render, terminal, update};

/// Full-screen calculator runtime.
pub struct CalcRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
}

impl CalcRuntime {
    /// Sets up the terminal and builds the initial state.
    pub fn new(config: &Config) -> Result<Self> {
        // The hook must be in place before entering the alternate screen.
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        Ok(Self {
            terminal,
            state: AppState::new(config),
        })
    }

    /// Runs the main event loop until the quit flag is set.
    pub fn run(&mut self) -> Result<()> {
        while !self.state.should_quit {
            self.terminal.draw(|frame| {
                render::render(&self.state, frame);
            })?;

            let event = event::read().context("Failed to read terminal event")?;
            update::update(&mut self.state, &event);
        }
        Ok(())
    }
}

impl Drop for CalcRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
