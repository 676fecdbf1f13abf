//! Configuration file lookup and logging setup

use anyhow::{Context, Result};
use common::LoggingConfig;
use domain::{LoggingSettings, ProgramConfig, DEFAULT_CONFIG_FILE};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load `path` if given (it must exist), else `rural-edu.toml` in the working
/// directory when present, else the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<ProgramConfig> {
    let path = match path {
        Some(path) => path,
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if !default.is_file() {
                debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                return Ok(ProgramConfig::default());
            }
            default
        }
    };

    let document = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    ProgramConfig::from_toml_str(&document)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

pub fn logging_config(settings: &LoggingSettings) -> Result<LoggingConfig> {
    LoggingConfig::from_level_str(&settings.level, settings.json)
}
