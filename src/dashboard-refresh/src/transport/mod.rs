//! Outbound call transports.

mod error;
mod http;

pub use error::TransportError;
pub use http::{encode_url, HttpTransport};

use crate::request::RequestSpec;
use async_trait::async_trait;

/// Issues a [`RequestSpec`] as a single outbound call.
///
/// Implementations report whether the call could be made, not what the
/// remote service answered.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the request once.
    async fn send(&self, request: &RequestSpec) -> Result<(), TransportError>;
}
