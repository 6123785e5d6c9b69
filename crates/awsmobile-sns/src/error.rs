//! SNS error codes.
//!
//! Query services report errors in an `<ErrorResponse>` document. The codes
//! carry no `Exception` suffix.

use std::fmt;

use awsmobile_core::{ErrorCode, ServiceError};

/// Modeled SNS error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SnsErrorCode {
    /// A request parameter does not comply with the associated constraints.
    InvalidParameter,
    /// A parameter value is out of range or malformed.
    InvalidParameterValue,
    /// The requested resource does not exist.
    NotFound,
    /// The caller is not authorized for the action.
    AuthorizationError,
    /// An internal service error occurred.
    InternalError,
    /// The request rate exceeds the account limit.
    Throttled,
    /// The account already has the maximum number of topics.
    TopicLimitExceeded,
    /// The resource already has the maximum number of tags.
    TagLimitExceeded,
    /// Tags conflict with the account's tag policy.
    TagPolicy,
    /// Two requests updated the same resource at once.
    ConcurrentAccess,
    /// The credential signature is not valid.
    InvalidSecurity,
    /// The KMS key used for encryption is disabled.
    KmsDisabled,
}

impl SnsErrorCode {
    /// Returns the short error code string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidParameter => "InvalidParameter",
            Self::InvalidParameterValue => "InvalidParameterValue",
            Self::NotFound => "NotFound",
            Self::AuthorizationError => "AuthorizationError",
            Self::InternalError => "InternalError",
            Self::Throttled => "Throttled",
            Self::TopicLimitExceeded => "TopicLimitExceeded",
            Self::TagLimitExceeded => "TagLimitExceeded",
            Self::TagPolicy => "TagPolicy",
            Self::ConcurrentAccess => "ConcurrentAccess",
            Self::InvalidSecurity => "InvalidSecurity",
            Self::KmsDisabled => "KMSDisabled",
        }
    }

    /// Parse an error code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "InvalidParameter" => Some(Self::InvalidParameter),
            "InvalidParameterValue" => Some(Self::InvalidParameterValue),
            "NotFound" => Some(Self::NotFound),
            "AuthorizationError" => Some(Self::AuthorizationError),
            "InternalError" => Some(Self::InternalError),
            "Throttled" => Some(Self::Throttled),
            "TopicLimitExceeded" => Some(Self::TopicLimitExceeded),
            "TagLimitExceeded" => Some(Self::TagLimitExceeded),
            "TagPolicy" => Some(Self::TagPolicy),
            "ConcurrentAccess" => Some(Self::ConcurrentAccess),
            "InvalidSecurity" => Some(Self::InvalidSecurity),
            "KMSDisabled" => Some(Self::KmsDisabled),
            _ => None,
        }
    }

    /// Returns the default HTTP status code for this error.
    #[must_use]
    pub fn default_status_code(&self) -> http::StatusCode {
        match self {
            Self::NotFound => http::StatusCode::NOT_FOUND,
            Self::AuthorizationError | Self::TopicLimitExceeded | Self::InvalidSecurity => {
                http::StatusCode::FORBIDDEN
            }
            Self::InternalError => http::StatusCode::INTERNAL_SERVER_ERROR,
            Self::Throttled => http::StatusCode::TOO_MANY_REQUESTS,
            _ => http::StatusCode::BAD_REQUEST,
        }
    }
}

impl fmt::Display for SnsErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorCode for SnsErrorCode {
    fn as_str(&self) -> &'static str {
        Self::as_str(self)
    }

    fn from_code(code: &str) -> Option<Self> {
        Self::from_code(code)
    }

    fn default_status_code(&self) -> http::StatusCode {
        Self::default_status_code(self)
    }
}

/// An SNS service error.
pub type SnsError = ServiceError<SnsErrorCode>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_keep_wire_spelling() {
        assert_eq!(SnsErrorCode::KmsDisabled.as_str(), "KMSDisabled");
        assert_eq!(SnsErrorCode::from_code("KMSDisabled"), Some(SnsErrorCode::KmsDisabled));
        assert_eq!(SnsErrorCode::from_code("NotFoundException"), None);
    }
}
