//! Protocol-independent transport request.

use bytes::Bytes;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE, HOST, USER_AGENT};
use http::{HeaderMap, HeaderName, HeaderValue, Method};

use crate::config::ClientConfig;
use crate::endpoint::Endpoint;
use crate::error::MarshalError;
use crate::uri::{ResolvedPath, encode_query_component};

/// The output of a marshaller: everything a transport needs to send a call.
#[derive(Debug, Clone)]
pub struct MarshalledRequest {
    /// Operation name, e.g. `SendChannelMessage`.
    pub operation: &'static str,
    /// HTTP method.
    pub method: Method,
    /// Resource path with raw label values.
    pub resource_path: String,
    /// Resource path with percent-encoded label values.
    pub encoded_path: String,
    /// Query-string parameters, in insertion order.
    pub parameters: Vec<(String, String)>,
    /// Request headers.
    pub headers: HeaderMap,
    /// Request body.
    pub body: Option<Bytes>,
}

impl MarshalledRequest {
    /// Start a request for `operation`.
    #[must_use]
    pub fn new(operation: &'static str, method: Method, path: ResolvedPath) -> Self {
        Self {
            operation,
            method,
            resource_path: path.literal,
            encoded_path: path.encoded,
            parameters: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Bind a header. `None` leaves the header unset; values are sent raw.
    pub fn with_header(mut self, name: &str, value: Option<&str>) -> Result<Self, MarshalError> {
        let Some(value) = value else {
            return Ok(self);
        };
        let invalid = || MarshalError::InvalidHeader {
            name: name.to_owned(),
        };
        let name = HeaderName::try_from(name).map_err(|_| invalid())?;
        let value = HeaderValue::try_from(value).map_err(|_| invalid())?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Bind a query-string parameter. `None` leaves it unset.
    #[must_use]
    pub fn with_parameter(mut self, name: &str, value: Option<impl Into<String>>) -> Self {
        if let Some(value) = value {
            self.parameters.push((name.to_owned(), value.into()));
        }
        self
    }

    /// Attach a body with its `Content-Type` and `Content-Length`.
    pub fn with_body(mut self, content_type: &str, body: Bytes) -> Result<Self, MarshalError> {
        let content_type = HeaderValue::try_from(content_type).map_err(|_| {
            MarshalError::InvalidHeader {
                name: CONTENT_TYPE.to_string(),
            }
        })?;
        self.headers.insert(CONTENT_TYPE, content_type);
        self.headers.insert(CONTENT_LENGTH, HeaderValue::from(body.len()));
        self.body = Some(body);
        Ok(self)
    }

    /// Header value as a string, if set and printable.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// First value of a query-string parameter.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Body as UTF-8 text, for logging and tests.
    #[must_use]
    pub fn body_str(&self) -> Option<&str> {
        self.body.as_deref().and_then(|b| std::str::from_utf8(b).ok())
    }

    /// Percent-encoded query string, without the leading `?`.
    #[must_use]
    pub fn query_string(&self) -> String {
        self.parameters
            .iter()
            .map(|(k, v)| format!("{}={}", encode_query_component(k), encode_query_component(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Full request URI against `endpoint`.
    #[must_use]
    pub fn uri(&self, endpoint: &Endpoint) -> String {
        let mut uri = format!("{}{}", endpoint.url(), self.encoded_path);
        if !self.parameters.is_empty() {
            uri.push('?');
            uri.push_str(&self.query_string());
        }
        uri
    }

    /// Build the `http::Request` a transport would send.
    pub fn into_http(
        self,
        endpoint: &Endpoint,
        config: &ClientConfig,
    ) -> Result<http::Request<Bytes>, MarshalError> {
        let uri = self.uri(endpoint);
        let mut builder = http::Request::builder().method(self.method).uri(&uri);

        if let Some(headers) = builder.headers_mut() {
            headers.extend(self.headers);
            let host = HeaderValue::try_from(endpoint.authority())
                .map_err(|_| MarshalError::InvalidUri(uri.clone()))?;
            headers.insert(HOST, host);
            let agent = HeaderValue::try_from(config.user_agent.as_str()).map_err(|_| {
                MarshalError::InvalidHeader {
                    name: USER_AGENT.to_string(),
                }
            })?;
            headers.insert(USER_AGENT, agent);
        }

        builder
            .body(self.body.unwrap_or_default())
            .map_err(|e| MarshalError::InvalidUri(format!("{uri}: {e}")))
    }
}
