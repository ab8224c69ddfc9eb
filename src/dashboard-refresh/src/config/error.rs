//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading or resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse config '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// No layer supplied a base URL.
    #[error("No base URL configured; pass --base-url, set DASHBOARD_BASE_URL or add base-url to the config file")]
    MissingBaseUrl,

    /// Timeout of zero seconds.
    #[error("Timeout must be at least 1 second")]
    ZeroTimeout,
}
