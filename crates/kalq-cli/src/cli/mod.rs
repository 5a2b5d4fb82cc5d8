//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use kalq_core::config::Config;

mod commands;

#[derive(Parser)]
#[command(name = "kalq")]
#[command(version)]
#[command(about = "Terminal calculator with sandboxed expression evaluation")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Start in a specific mode (standard, programmer, logic-gate, regex,
    /// base-conversion)
    #[arg(long, value_name = "MODE")]
    mode: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Evaluate one expression and print the result
    Eval {
        /// The expression to evaluate
        #[arg(short, long)]
        expr: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load().context("load config")?;

    // default to the interactive calculator
    let Some(command) = cli.command else {
        return commands::calc::run(&config, cli.mode.as_deref());
    };

    match command {
        Commands::Eval { expr } => commands::eval::run(&expr),
        Commands::Config { command } => match command {
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
