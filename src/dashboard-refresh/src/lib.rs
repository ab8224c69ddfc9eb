#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod credentials;
pub mod menu;
pub mod request;
pub mod transport;
pub mod trigger;

pub use config::{
    load_config_file, ConfigError, ConfigFile, ConfigOverrides, CredentialConfig, HttpMethod,
    TriggerConfig,
};
pub use credentials::{
    provider_from_config, AccessToken, CommandCredential, CredentialError, CredentialProvider,
    EnvCredential, StaticCredential,
};
pub use menu::{dispatch, Menu, MenuAction, MenuItem};
pub use request::{RequestSpec, API_KEY_PARAM, ISSUES_PATH};
pub use transport::{HttpTransport, Transport, TransportError};
pub use trigger::{refresh, DashboardRefreshTrigger, RefreshError};
