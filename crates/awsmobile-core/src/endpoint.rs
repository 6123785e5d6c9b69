//! Endpoint resolution.

use std::fmt;

use crate::config::ClientConfig;
use crate::protocol::ServiceMetadata;

/// Base URL requests for a service are sent to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    url: String,
}

impl Endpoint {
    /// Resolve the endpoint of `service` for the configured region, honoring
    /// the configured override.
    #[must_use]
    pub fn resolve(service: &ServiceMetadata, config: &ClientConfig) -> Self {
        if let Some(url) = &config.endpoint_url {
            return Self::new(url);
        }
        Self {
            url: format!(
                "https://{}.{}.{}",
                service.endpoint_prefix,
                config.region,
                config.region.dns_suffix()
            ),
        }
    }

    /// Use an explicit base URL. A trailing slash is dropped.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        let mut url = url.into();
        while url.ends_with('/') {
            url.pop();
        }
        Self { url }
    }

    /// Base URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Host (and port) part of the URL.
    #[must_use]
    pub fn authority(&self) -> &str {
        let rest = self
            .url
            .split_once("://")
            .map_or(self.url.as_str(), |(_, rest)| rest);
        rest.split('/').next().unwrap_or(rest)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Protocol;

    const SNS: ServiceMetadata = ServiceMetadata {
        service_name: "SNS",
        endpoint_prefix: "sns",
        protocol: Protocol::AwsQuery,
        target_prefix: None,
        api_version: "2010-03-31",
        xml_namespace: None,
    };

    #[test]
    fn test_should_resolve_regional_endpoint() {
        let config = ClientConfig::default().with_region("eu-west-1");
        let endpoint = Endpoint::resolve(&SNS, &config);
        assert_eq!(endpoint.url(), "https://sns.eu-west-1.amazonaws.com");
        assert_eq!(endpoint.authority(), "sns.eu-west-1.amazonaws.com");
    }

    #[test]
    fn test_should_honor_endpoint_override() {
        let config = ClientConfig::default().with_endpoint_url("http://localhost:4566/");
        let endpoint = Endpoint::resolve(&SNS, &config);
        assert_eq!(endpoint.url(), "http://localhost:4566");
        assert_eq!(endpoint.authority(), "localhost:4566");
    }
}
