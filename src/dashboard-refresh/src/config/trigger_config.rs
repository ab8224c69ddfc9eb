//! Resolved trigger settings.

use super::{ConfigError, ConfigFile, CredentialConfig};
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// Default request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP method used for the refresh call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    #[default]
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
            Self::Post => f.write_str("POST"),
        }
    }
}

/// Values supplied on the command line or through the environment.
///
/// These take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Root address of the dashboard service.
    pub base_url: Option<String>,
    /// A fixed token, replacing the configured credential source.
    pub token: Option<String>,
    /// HTTP method.
    pub method: Option<HttpMethod>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

/// Configuration for a dashboard refresh trigger.
#[derive(Debug, Clone)]
pub struct TriggerConfig {
    /// Root address of the dashboard service. Not validated.
    base_url: String,
    /// HTTP method for the refresh call.
    method: HttpMethod,
    /// Request timeout.
    timeout: Duration,
    /// Where the token comes from.
    credential: CredentialConfig,
}

impl TriggerConfig {
    /// Creates a configuration with default method, timeout and credential source.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            method: HttpMethod::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            credential: CredentialConfig::default(),
        }
    }

    /// Merges overrides on top of an optional config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingBaseUrl`] if neither layer names a base
    /// URL. An explicitly empty base URL is accepted. Returns
    /// [`ConfigError::ZeroTimeout`] if the timeout resolves to zero.
    pub fn resolve(
        file: Option<ConfigFile>,
        overrides: ConfigOverrides,
    ) -> Result<Self, ConfigError> {
        let file = file.unwrap_or_default();
        let base_url = overrides
            .base_url
            .or(file.base_url)
            .ok_or(ConfigError::MissingBaseUrl)?;

        let mut config = Self::new(base_url);
        if let Some(method) = overrides.method.or(file.method) {
            config = config.with_method(method);
        }
        if let Some(secs) = overrides.timeout_secs.or(file.timeout_secs) {
            if secs == 0 {
                return Err(ConfigError::ZeroTimeout);
            }
            config = config.with_timeout(Duration::from_secs(secs));
        }
        let credential = match overrides.token {
            Some(token) => Some(CredentialConfig::Static { token }),
            None => file.credential,
        };
        if let Some(credential) = credential {
            config = config.with_credential(credential);
        }
        Ok(config)
    }

    /// Sets the HTTP method.
    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the credential source.
    pub fn with_credential(mut self, credential: CredentialConfig) -> Self {
        self.credential = credential;
        self
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the HTTP method.
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the credential source.
    pub fn credential(&self) -> &CredentialConfig {
        &self.credential
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_with_base(base_url: &str) -> ConfigFile {
        ConfigFile {
            base_url: Some(base_url.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_apply_without_file() {
        let config = TriggerConfig::resolve(
            None,
            ConfigOverrides {
                base_url: Some("https://example.com".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(config.base_url(), "https://example.com");
        assert_eq!(config.method(), HttpMethod::Post);
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.credential(), &CredentialConfig::default());
    }

    #[test]
    fn overrides_win_over_file() {
        let file = ConfigFile {
            base_url: Some("https://file.example.com".to_string()),
            method: Some(HttpMethod::Get),
            timeout_secs: Some(5),
            credential: Some(CredentialConfig::Env {
                var: "FILE_TOKEN".to_string(),
            }),
        };
        let overrides = ConfigOverrides {
            base_url: Some("https://flag.example.com".to_string()),
            token: Some("flag-token".to_string()),
            method: Some(HttpMethod::Post),
            timeout_secs: Some(60),
        };

        let config = TriggerConfig::resolve(Some(file), overrides).unwrap();

        assert_eq!(config.base_url(), "https://flag.example.com");
        assert_eq!(config.method(), HttpMethod::Post);
        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert_eq!(
            config.credential(),
            &CredentialConfig::Static {
                token: "flag-token".to_string()
            }
        );
    }

    #[test]
    fn file_fills_missing_overrides() {
        let mut file = file_with_base("https://file.example.com");
        file.method = Some(HttpMethod::Get);

        let config = TriggerConfig::resolve(Some(file), ConfigOverrides::default()).unwrap();

        assert_eq!(config.base_url(), "https://file.example.com");
        assert_eq!(config.method(), HttpMethod::Get);
    }

    #[test]
    fn missing_base_url_is_an_error() {
        let result = TriggerConfig::resolve(None, ConfigOverrides::default());
        assert!(matches!(result, Err(ConfigError::MissingBaseUrl)));
    }

    #[test]
    fn zero_timeout_is_an_error() {
        let mut file = file_with_base("https://example.com");
        file.timeout_secs = Some(0);

        let result = TriggerConfig::resolve(Some(file), ConfigOverrides::default());
        assert!(matches!(result, Err(ConfigError::ZeroTimeout)));
    }

    #[test]
    fn empty_base_url_is_accepted() {
        let config = TriggerConfig::resolve(Some(file_with_base("")), ConfigOverrides::default())
            .unwrap();
        assert_eq!(config.base_url(), "");
    }

    #[test]
    fn method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
    }
}
