//! Client configuration.
//!
//! All configuration is driven by environment variables, using the standard
//! AWS variable names where one exists.

use crate::types::Region;

/// Default `User-Agent` sent with every request.
const DEFAULT_USER_AGENT: &str = concat!("awsmobile-rs/", env!("CARGO_PKG_VERSION"));

/// Configuration shared by every service client.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Region requests are sent to.
    pub region: Region,
    /// Endpoint override (e.g. a local emulator). Replaces the resolved endpoint.
    pub endpoint_url: Option<String>,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Log level filter used by binaries.
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: Region::default(),
            endpoint_url: None,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `AWS_REGION` / `AWS_DEFAULT_REGION` | `us-east-1` |
    /// | `AWS_ENDPOINT_URL` | *(unset)* |
    /// | `AWSMOBILE_USER_AGENT` | `awsmobile-rs/<version>` |
    /// | `LOG_LEVEL` | `info` |
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = lookup("AWS_REGION").or_else(|| lookup("AWS_DEFAULT_REGION")) {
            if !v.is_empty() {
                config.region = Region::new(v);
            }
        }
        if let Some(v) = lookup("AWS_ENDPOINT_URL") {
            if !v.is_empty() {
                config.endpoint_url = Some(v);
            }
        }
        if let Some(v) = lookup("AWSMOBILE_USER_AGENT") {
            config.user_agent = v;
        }
        if let Some(v) = lookup("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }

    /// Set the region.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Region::new(region);
        self
    }

    /// Set the endpoint override.
    #[must_use]
    pub fn with_endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = Some(url.into());
        self
    }
}
