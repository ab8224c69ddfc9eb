//! Token printed by an external command.

use super::{AccessToken, CredentialError, CredentialProvider};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

/// Runs a command on every request and uses its trimmed stdout as the token.
///
/// Typical use is an OAuth helper such as `gcloud auth print-access-token`.
#[derive(Debug, Clone)]
pub struct CommandCredential {
    program: String,
    args: Vec<String>,
}

impl CommandCredential {
    /// Creates a provider for the given program and arguments.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

#[async_trait]
impl CredentialProvider for CommandCredential {
    async fn token(&self) -> Result<AccessToken, CredentialError> {
        debug!(program = %self.program, "Running token command");

        let output = Command::new(&self.program)
            .args(&self.args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| CredentialError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(CredentialError::CommandFailed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout =
            String::from_utf8(output.stdout).map_err(|_| CredentialError::InvalidOutput {
                program: self.program.clone(),
            })?;
        let token = AccessToken::new(stdout.trim());
        if token.is_blank() {
            return Err(CredentialError::EmptyToken {
                source_name: format!("command '{}'", self.program),
            });
        }

        Ok(token)
    }
}
