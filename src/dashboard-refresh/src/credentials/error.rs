//! Credential acquisition error types.

use thiserror::Error;

/// Errors that can occur while obtaining an access token.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// Environment variable is not set or not valid unicode.
    #[error("Environment variable '{var}' is not set")]
    MissingEnv { var: String },

    /// The provider produced an empty token.
    #[error("Empty token from {source_name}")]
    EmptyToken { source_name: String },

    /// The token command could not be started.
    #[error("Failed to run token command '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The token command exited unsuccessfully.
    #[error("Token command '{program}' exited with {status}: {stderr}")]
    CommandFailed {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    /// The token command wrote something other than UTF-8.
    #[error("Token command '{program}' produced non UTF-8 output")]
    InvalidOutput { program: String },
}
