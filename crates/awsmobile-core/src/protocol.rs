//! Wire protocols and static service metadata.

use std::fmt;

/// Wire protocol of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// JSON-RPC over POST /, `X-Amz-Target` dispatch, JSON 1.0.
    AwsJson10,
    /// JSON-RPC over POST /, `X-Amz-Target` dispatch, JSON 1.1.
    AwsJson11,
    /// REST bindings with JSON bodies.
    RestJson1,
    /// Form-encoded parameters, XML responses.
    AwsQuery,
}

impl Protocol {
    /// `Content-Type` of request bodies.
    #[must_use]
    pub fn content_type(self) -> &'static str {
        match self {
            Self::AwsJson10 => "application/x-amz-json-1.0",
            Self::AwsJson11 => "application/x-amz-json-1.1",
            Self::RestJson1 => "application/json",
            Self::AwsQuery => "application/x-www-form-urlencoded; charset=utf-8",
        }
    }

    /// Smithy protocol name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AwsJson10 => "awsJson1_0",
            Self::AwsJson11 => "awsJson1_1",
            Self::RestJson1 => "restJson1",
            Self::AwsQuery => "awsQuery",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceMetadata {
    /// Service name used in logs and error messages.
    pub service_name: &'static str,
    /// First DNS label of the regional endpoint.
    pub endpoint_prefix: &'static str,
    /// Wire protocol.
    pub protocol: Protocol,
    /// `X-Amz-Target` prefix for JSON-RPC services.
    pub target_prefix: Option<&'static str>,
    /// API version, sent as `Version` by query services.
    pub api_version: &'static str,
    /// Response XML namespace for query services.
    pub xml_namespace: Option<&'static str>,
}
