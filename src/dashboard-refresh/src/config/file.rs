//! Config file deserialization.

use super::HttpMethod;
use serde::Deserialize;

/// Parsed contents of a `dashboard.toml` file.
///
/// Every key is optional; missing values fall back to command line flags,
/// environment variables or built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConfigFile {
    /// Root address of the dashboard service.
    pub base_url: Option<String>,

    /// HTTP method used for the refresh call.
    pub method: Option<HttpMethod>,

    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,

    /// Where the access token comes from.
    pub credential: Option<CredentialConfig>,
}

/// Source of the access token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "source", rename_all = "kebab-case", deny_unknown_fields)]
pub enum CredentialConfig {
    /// A fixed token.
    Static {
        /// The token value.
        token: String,
    },

    /// A token read from an environment variable on every refresh.
    Env {
        /// Variable name (e.g., "DASHBOARD_TOKEN").
        var: String,
    },

    /// A token printed by a command run on every refresh.
    Command {
        /// Program to run (e.g., "gcloud").
        program: String,
        /// Arguments passed to the program.
        #[serde(default)]
        args: Vec<String>,
    },
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self::Env {
            var: crate::credentials::DEFAULT_TOKEN_ENV.to_string(),
        }
    }
}
