//! The dashboard refresh trigger.

mod error;

pub use error::RefreshError;

use crate::config::TriggerConfig;
use crate::credentials::{provider_from_config, CredentialProvider};
use crate::request::RequestSpec;
use crate::transport::{HttpTransport, Transport, TransportError};
use tracing::info;

/// Fires one refresh call for `base_url`, carrying `token` as `apiKey`.
///
/// The response is not inspected: any answer from the server counts as
/// done. Only a failure to make the call at all is returned.
///
/// # Errors
///
/// Returns whatever the transport reports.
pub async fn refresh(
    transport: &dyn Transport,
    base_url: &str,
    token: &str,
) -> Result<(), TransportError> {
    let request = RequestSpec::dashboard_refresh(base_url, token);
    transport.send(&request).await
}

/// Binds a base URL to a credential provider and a transport.
///
/// Each [`refresh`](Self::refresh) asks the provider for a new token and
/// sends exactly one request. Nothing is kept between calls.
pub struct DashboardRefreshTrigger {
    base_url: String,
    credentials: Box<dyn CredentialProvider>,
    transport: Box<dyn Transport>,
}

impl DashboardRefreshTrigger {
    /// Creates a trigger from explicit collaborators.
    pub fn new(
        base_url: impl Into<String>,
        credentials: Box<dyn CredentialProvider>,
        transport: Box<dyn Transport>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            credentials,
            transport,
        }
    }

    /// Creates a trigger using the configured credential source over HTTP.
    ///
    /// # Errors
    ///
    /// Returns [`RefreshError::Transport`] if the HTTP client can't be built.
    pub fn from_config(config: &TriggerConfig) -> Result<Self, RefreshError> {
        let transport = HttpTransport::new(config.method(), config.timeout())?;
        Ok(Self::new(
            config.base_url(),
            provider_from_config(config.credential()),
            Box::new(transport),
        ))
    }

    /// Obtains a fresh token and fires the refresh call.
    ///
    /// # Errors
    ///
    /// Returns [`RefreshError::Credential`] if no token could be obtained, in
    /// which case nothing is sent, or [`RefreshError::Transport`] if the call
    /// could not be made.
    pub async fn refresh(&self) -> Result<(), RefreshError> {
        let token = self.credentials.token().await?;
        info!(base_url = %self.base_url, "Refreshing dashboard");
        refresh(self.transport.as_ref(), &self.base_url, token.expose()).await?;
        Ok(())
    }
}
