//! Configuration I/O operations

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use super::types::Config;

/// Get the config file path (~/.config/ansifence/config.toml)
pub fn config_path() -> Result<PathBuf> {
    let config_dir = config_dir()?;
    Ok(config_dir.join("config.toml"))
}

/// Get the config directory path (~/.config/ansifence)
fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("ansifence"))
}

/// Load configuration from file, or return defaults if not found
pub fn load() -> Result<Config> {
    let config_path = config_path()?;

    if config_path.exists() {
        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
        debug!(path = ?config_path, "loaded config");
        Ok(config)
    } else {
        Ok(Config::default())
    }
}
