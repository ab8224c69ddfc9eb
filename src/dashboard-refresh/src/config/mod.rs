//! Configuration loading.
//!
//! Settings come from three layers, highest first: command line flags,
//! environment variables and an optional `dashboard.toml` file.

mod error;
mod file;
mod trigger_config;

pub use error::ConfigError;
pub use file::{ConfigFile, CredentialConfig};
pub use trigger_config::{ConfigOverrides, HttpMethod, TriggerConfig, DEFAULT_TIMEOUT_SECS};

use std::path::Path;
use tracing::{debug, info};

/// Default config file name.
pub const DEFAULT_CONFIG_FILE: &str = "dashboard.toml";

/// Loads the config file if it exists.
///
/// A missing file is not an error and yields `None`.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file exists but can't be read or parsed.
pub fn load_config_file(path: &Path) -> Result<Option<ConfigFile>, ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "No config file found");
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
        path: path.display().to_string(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::TomlError {
        path: path.display().to_string(),
        source,
    })?;

    info!(path = %path.display(), "Loaded config file");
    Ok(Some(parsed))
}
