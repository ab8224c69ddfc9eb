//! Transport error types.

use thiserror::Error;

/// Errors raised while issuing the outbound call.
///
/// Messages carry the target URL without its query string so the token
/// never ends up in logs.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The target is not an absolute URL.
    #[error("Invalid target URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request could not be sent or no response arrived.
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
