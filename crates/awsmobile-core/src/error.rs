//! Error types for marshalling, unmarshalling and service errors.

use std::fmt;

use crate::enums::InvalidEnumValue;

/// Boxed error cause.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Client-side failure while turning an input shape into a request.
///
/// Always local, never retried.
#[derive(Debug, thiserror::Error)]
pub enum MarshalError {
    /// The top-level input shape was missing.
    #[error("invalid argument passed to marshall(...): {0} input cannot be null")]
    MissingInput(&'static str),

    /// Any failure while encoding the shape.
    #[error("unable to marshall request to {format}: {source}")]
    Serialization {
        /// Wire format being written.
        format: &'static str,
        /// Underlying cause.
        #[source]
        source: BoxError,
    },

    /// A header value could not be represented in HTTP.
    #[error("invalid value for header {name}")]
    InvalidHeader {
        /// Header name.
        name: String,
    },

    /// The resolved request URI is not valid.
    #[error("invalid request uri: {0}")]
    InvalidUri(String),
}

impl MarshalError {
    /// Wrap an encoding failure.
    pub fn serialization(
        format: &'static str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Serialization {
            format,
            source: Box::new(source),
        }
    }
}

/// Failure while turning a response body into an output shape.
#[derive(Debug, thiserror::Error)]
pub enum UnmarshalError {
    /// The JSON body is malformed at the top level or a scalar has the wrong type.
    #[error("unable to unmarshall JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// The XML body is malformed.
    #[error("unable to unmarshall XML response: {0}")]
    Xml(#[source] BoxError),

    /// An enum field carried a value outside its table.
    #[error(transparent)]
    InvalidEnum(#[from] InvalidEnumValue),

    /// The body does not match its `x-amz-crc32` header.
    #[error("response checksum mismatch: expected {expected}, computed {actual}")]
    ChecksumMismatch {
        /// Checksum announced by the service.
        expected: u32,
        /// Checksum of the received body.
        actual: u32,
    },

    /// A scalar could not be decoded (timestamp, number, blob, ...).
    #[error("invalid {kind} value: {value:?}")]
    InvalidValue {
        /// Kind of scalar expected.
        kind: &'static str,
        /// Raw wire text.
        value: String,
    },
}

impl UnmarshalError {
    /// Scalar decode failure.
    pub fn invalid_value(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            kind,
            value: value.into(),
        }
    }
}

/// A per-service error code table.
pub trait ErrorCode: Sized + Copy + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Wire error code.
    fn as_str(&self) -> &'static str;

    /// Look up a sanitized wire code.
    fn from_code(code: &str) -> Option<Self>;

    /// HTTP status the service uses for this code.
    fn default_status_code(&self) -> http::StatusCode;
}

/// Protocol-independent fields of an error response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorMetadata {
    /// Sanitized error code.
    pub code: Option<String>,
    /// Human readable message.
    pub message: Option<String>,
    /// Service request id.
    pub request_id: Option<String>,
    /// HTTP status of the response.
    pub status_code: http::StatusCode,
}

/// A typed service error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceError<C> {
    /// Modeled error code. `None` when the service returned a code this
    /// client does not know.
    pub code: Option<C>,
    /// Error code exactly as sent by the service.
    pub raw_code: String,
    /// Human readable message.
    pub message: String,
    /// HTTP status.
    pub status_code: http::StatusCode,
    /// Service request id.
    pub request_id: Option<String>,
}

impl<C: ErrorCode> ServiceError<C> {
    /// Create an error from a modeled code.
    #[must_use]
    pub fn new(code: C) -> Self {
        Self {
            raw_code: code.as_str().to_owned(),
            message: code.as_str().to_owned(),
            status_code: code.default_status_code(),
            code: Some(code),
            request_id: None,
        }
    }

    /// Create an error from a modeled code with a custom message.
    #[must_use]
    pub fn with_message(code: C, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::new(code)
        }
    }

    /// Build a typed error from parsed error metadata.
    #[must_use]
    pub fn from_metadata(meta: ErrorMetadata) -> Self {
        let raw_code = meta.code.unwrap_or_default();
        let code = C::from_code(&raw_code);
        if code.is_none() {
            tracing::warn!(
                code = %raw_code,
                status = meta.status_code.as_u16(),
                "unmodeled service error code"
            );
        }
        Self {
            code,
            message: meta.message.unwrap_or_default(),
            status_code: meta.status_code,
            request_id: meta.request_id,
            raw_code,
        }
    }

    /// Whether this error carries the given code.
    #[must_use]
    pub fn is(&self, code: C) -> bool {
        self.code.is_some_and(|c| c.as_str() == code.as_str())
    }
}

impl<C> fmt::Display for ServiceError<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = if self.raw_code.is_empty() {
            "UnknownError"
        } else {
            &self.raw_code
        };
        write!(f, "{code} ({}): {}", self.status_code.as_u16(), self.message)?;
        if let Some(id) = &self.request_id {
            write!(f, " [request id: {id}]")?;
        }
        Ok(())
    }
}

impl<C: fmt::Debug> std::error::Error for ServiceError<C> {}

/// Result of invoking an operation.
#[derive(Debug)]
pub enum SdkError<E> {
    /// The input could not be marshalled.
    Marshal(MarshalError),
    /// The response could not be unmarshalled.
    Unmarshal(UnmarshalError),
    /// The service returned an error response.
    Service(E),
}

impl<E> SdkError<E> {
    /// The service error, if that is what this is.
    pub fn as_service_error(&self) -> Option<&E> {
        match self {
            Self::Service(e) => Some(e),
            _ => None,
        }
    }

    /// Consume into the service error, if that is what this is.
    pub fn into_service_error(self) -> Option<E> {
        match self {
            Self::Service(e) => Some(e),
            _ => None,
        }
    }
}

impl<E> From<MarshalError> for SdkError<E> {
    fn from(e: MarshalError) -> Self {
        Self::Marshal(e)
    }
}

impl<E> From<UnmarshalError> for SdkError<E> {
    fn from(e: UnmarshalError) -> Self {
        Self::Unmarshal(e)
    }
}

impl<E> From<InvalidEnumValue> for SdkError<E> {
    fn from(e: InvalidEnumValue) -> Self {
        Self::Unmarshal(e.into())
    }
}

impl<E: fmt::Display> fmt::Display for SdkError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Marshal(e) => write!(f, "marshal error: {e}"),
            Self::Unmarshal(e) => write!(f, "unmarshal error: {e}"),
            Self::Service(e) => write!(f, "service error: {e}"),
        }
    }
}

impl<E> std::error::Error for SdkError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Marshal(e) => Some(e),
            Self::Unmarshal(e) => Some(e),
            Self::Service(e) => Some(e),
        }
    }
}
