//! Configuration management.
//!
//! Loads configuration from ${KALQ_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::modes::Mode;

/// Returns the default config template with comments.
///
/// Embedded from default_config.toml at compile time; `kalq config init`
/// writes it out verbatim.
pub fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Mode the calculator starts in.
    pub start_mode: String,

    /// Env-filter string for the file log (overridden by KALQ_LOG).
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_mode: Mode::Standard.display_name().to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// The configured start mode, falling back to Standard on bad names.
    pub fn start_mode(&self) -> Mode {
        Mode::from_name(&self.start_mode).unwrap_or_default()
    }

    /// Writes the default template to `path` unless it already exists.
    ///
    /// Returns true when the file was created.
    pub fn init_at(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(true)
    }
}

pub mod paths {
    //! Path resolution for kalq configuration and log directories.
    //!
    //! KALQ_HOME resolution order:
    //! 1. KALQ_HOME environment variable (if set)
    //! 2. ~/.config/kalq (default)

    use std::path::PathBuf;

    /// Returns the kalq home directory.
    pub fn kalq_home() -> PathBuf {
        if let Ok(home) = std::env::var("KALQ_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("kalq"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        kalq_home().join("config.toml")
    }

    /// Returns the directory the file log is written to.
    pub fn log_dir() -> PathBuf {
        kalq_home().join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.start_mode(), Mode::Standard);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn partial_files_fill_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "start_mode = \"logic-gate\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.start_mode(), Mode::LogicGate);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn template_parses_to_defaults() {
        let config: Config = toml::from_str(default_config_template()).unwrap();
        assert_eq!(config.start_mode(), Mode::Standard);
    }

    #[test]
    fn init_creates_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        assert!(Config::init_at(&path).unwrap());
        assert!(!Config::init_at(&path).unwrap());
        assert!(path.exists());
    }

    #[test]
    fn unknown_start_mode_falls_back_to_standard() {
        let config = Config {
            start_mode: "quantum".to_string(),
            ..Config::default()
        };
        assert_eq!(config.start_mode(), Mode::Standard);
    }
}
