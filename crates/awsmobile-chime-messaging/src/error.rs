//! Chime SDK Messaging error codes.
//!
//! Errors arrive as JSON bodies with a `Code` member and an
//! `x-amzn-ErrorType` header.

use std::fmt;

use awsmobile_core::{ErrorCode, ServiceError};

/// Modeled Chime SDK Messaging error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ChimeMessagingErrorCode {
    /// The input parameters don't match the service's restrictions.
    BadRequestException,
    /// The request could not be processed because of conflict in the current state.
    ConflictException,
    /// The client is permanently forbidden from making the request.
    ForbiddenException,
    /// One or more of the resources in the request does not exist.
    NotFoundException,
    /// The request exceeds the resource limit.
    ResourceLimitExceededException,
    /// The service encountered an unexpected error.
    ServiceFailureException,
    /// The service is currently unavailable.
    ServiceUnavailableException,
    /// The client exceeded its request rate limit.
    ThrottledClientException,
    /// The client is not currently authorized to make the request.
    UnauthorizedClientException,
}

impl ChimeMessagingErrorCode {
    /// Returns the short error code string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequestException => "BadRequestException",
            Self::ConflictException => "ConflictException",
            Self::ForbiddenException => "ForbiddenException",
            Self::NotFoundException => "NotFoundException",
            Self::ResourceLimitExceededException => "ResourceLimitExceededException",
            Self::ServiceFailureException => "ServiceFailureException",
            Self::ServiceUnavailableException => "ServiceUnavailableException",
            Self::ThrottledClientException => "ThrottledClientException",
            Self::UnauthorizedClientException => "UnauthorizedClientException",
        }
    }

    /// Parse a sanitized error code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "BadRequestException" => Some(Self::BadRequestException),
            "ConflictException" => Some(Self::ConflictException),
            "ForbiddenException" => Some(Self::ForbiddenException),
            "NotFoundException" => Some(Self::NotFoundException),
            "ResourceLimitExceededException" => Some(Self::ResourceLimitExceededException),
            "ServiceFailureException" => Some(Self::ServiceFailureException),
            "ServiceUnavailableException" => Some(Self::ServiceUnavailableException),
            "ThrottledClientException" => Some(Self::ThrottledClientException),
            "UnauthorizedClientException" => Some(Self::UnauthorizedClientException),
            _ => None,
        }
    }

    /// Returns the default HTTP status code for this error.
    #[must_use]
    pub fn default_status_code(&self) -> http::StatusCode {
        match self {
            Self::BadRequestException | Self::ResourceLimitExceededException => {
                http::StatusCode::BAD_REQUEST
            }
            Self::ConflictException => http::StatusCode::CONFLICT,
            Self::ForbiddenException => http::StatusCode::FORBIDDEN,
            Self::NotFoundException => http::StatusCode::NOT_FOUND,
            Self::ServiceFailureException => http::StatusCode::INTERNAL_SERVER_ERROR,
            Self::ServiceUnavailableException => http::StatusCode::SERVICE_UNAVAILABLE,
            Self::ThrottledClientException => http::StatusCode::TOO_MANY_REQUESTS,
            Self::UnauthorizedClientException => http::StatusCode::UNAUTHORIZED,
        }
    }
}

impl fmt::Display for ChimeMessagingErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorCode for ChimeMessagingErrorCode {
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

/// A Chime SDK Messaging service error.
pub type ChimeMessagingError = ServiceError<ChimeMessagingErrorCode>;
