//! Token read from an environment variable.

use super::{AccessToken, CredentialError, CredentialProvider};
use async_trait::async_trait;
use tracing::debug;

/// Default variable the token is read from.
pub const DEFAULT_TOKEN_ENV: &str = "DASHBOARD_TOKEN";

/// Reads the token from an environment variable on every request.
#[derive(Debug, Clone)]
pub struct EnvCredential {
    var: String,
}

impl EnvCredential {
    /// Creates a provider for the given variable name.
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// Reads the variable now.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::MissingEnv`] if the variable is unset and
    /// [`CredentialError::EmptyToken`] if it is blank.
    pub fn read(&self) -> Result<AccessToken, CredentialError> {
        let value = std::env::var(&self.var).map_err(|_| CredentialError::MissingEnv {
            var: self.var.clone(),
        })?;
        let token = AccessToken::new(value.trim());
        if token.is_blank() {
            return Err(CredentialError::EmptyToken {
                source_name: format!("environment variable '{}'", self.var),
            });
        }

        debug!(var = %self.var, "Read token from environment");
        Ok(token)
    }
}

impl Default for EnvCredential {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_ENV)
    }
}

#[async_trait]
impl CredentialProvider for EnvCredential {
    async fn token(&self) -> Result<AccessToken, CredentialError> {
        self.read()
    }
}
