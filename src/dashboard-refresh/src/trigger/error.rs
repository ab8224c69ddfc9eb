//! Refresh error types.

use crate::credentials::CredentialError;
use crate::transport::TransportError;
use thiserror::Error;

/// Errors that can occur during a dashboard refresh.
#[derive(Debug, Error)]
pub enum RefreshError {
    /// No token could be obtained.
    #[error("refresh failed: auth: {0}")]
    Credential(#[from] CredentialError),

    /// The outbound call could not be made.
    #[error("refresh failed: network: {0}")]
    Transport(#[from] TransportError),
}
