//! Credential providers.
//!
//! A token is requested from the provider on every refresh; nothing is
//! cached and expiry is left to whoever issues the token.

mod command;
mod env;
mod error;
mod token;

pub use command::CommandCredential;
pub use env::{EnvCredential, DEFAULT_TOKEN_ENV};
pub use error::CredentialError;
pub use token::AccessToken;

use crate::config::CredentialConfig;
use async_trait::async_trait;

/// Issues an authorization token on demand.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Obtains a token for one outbound call.
    async fn token(&self) -> Result<AccessToken, CredentialError>;
}

/// Returns the same token on every request.
#[derive(Debug, Clone)]
pub struct StaticCredential {
    token: AccessToken,
}

impl StaticCredential {
    /// Creates a provider around an already issued token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: AccessToken::new(token),
        }
    }
}

#[async_trait]
impl CredentialProvider for StaticCredential {
    async fn token(&self) -> Result<AccessToken, CredentialError> {
        if self.token.is_blank() {
            return Err(CredentialError::EmptyToken {
                source_name: "static configuration".to_string(),
            });
        }
        Ok(self.token.clone())
    }
}

/// Builds the provider described by a credential configuration.
pub fn provider_from_config(config: &CredentialConfig) -> Box<dyn CredentialProvider> {
    match config {
        CredentialConfig::Static { token } => Box::new(StaticCredential::new(token.clone())),
        CredentialConfig::Env { var } => Box::new(EnvCredential::new(var.clone())),
        CredentialConfig::Command { program, args } => {
            Box::new(CommandCredential::new(program.clone(), args.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_returns_token() {
        let token = StaticCredential::new("abc123").token().await.unwrap();
        assert_eq!(token.expose(), "abc123");
    }

    #[tokio::test]
    async fn static_blank_is_an_error() {
        let result = StaticCredential::new("").token().await;
        assert!(matches!(result, Err(CredentialError::EmptyToken { .. })));
    }

    #[tokio::test]
    async fn builds_static_provider_from_config() {
        let provider = provider_from_config(&CredentialConfig::Static {
            token: "configured".to_string(),
        });
        assert_eq!(provider.token().await.unwrap().expose(), "configured");
    }
}
