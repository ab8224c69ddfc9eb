//! reqwest-backed transport.

use super::{Transport, TransportError};
use crate::config::HttpMethod;
use crate::request::RequestSpec;
use async_trait::async_trait;
use reqwest::{Client, Method};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Sends requests over HTTP, with parameters in the query string.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    method: HttpMethod,
}

impl HttpTransport {
    /// Builds a transport with the given method and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Client`] if the TLS backend can't be set up.
    pub fn new(method: HttpMethod, timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TransportError::Client(e.without_url()))?;
        Ok(Self { client, method })
    }
}

/// Combines the target and parameters into the URL put on the wire.
///
/// # Errors
///
/// Returns [`TransportError::InvalidUrl`] if `target_url` is not absolute.
pub fn encode_url(request: &RequestSpec) -> Result<Url, TransportError> {
    Url::parse_with_params(&request.target_url, &request.parameters).map_err(|source| {
        TransportError::InvalidUrl {
            url: request.target_url.clone(),
            source,
        }
    })
}

fn to_reqwest(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &RequestSpec) -> Result<(), TransportError> {
        let url = encode_url(request)?;
        debug!(method = %self.method, url = %request.target_url, "Sending request");

        let response = self
            .client
            .request(to_reqwest(self.method), url)
            .send()
            .await
            .map_err(|e| TransportError::Request {
                url: request.target_url.clone(),
                source: e.without_url(),
            })?;

        info!(
            url = %request.target_url,
            status = %response.status(),
            "Refresh request dispatched"
        );
        Ok(())
    }
}
