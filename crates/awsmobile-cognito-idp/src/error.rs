//! Cognito Identity Provider error codes.

use std::fmt;

use awsmobile_core::{ErrorCode, ServiceError};

/// Modeled Cognito Identity Provider error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CognitoIdpErrorCode {
    /// A parameter is invalid.
    InvalidParameterException,
    /// The requested resource does not exist.
    ResourceNotFoundException,
    /// The user is not authorized.
    NotAuthorizedException,
    /// The user made too many requests for this operation.
    TooManyRequestsException,
    /// A password reset is required.
    PasswordResetRequiredException,
    /// The user does not exist.
    UserNotFoundException,
    /// The user is not confirmed.
    UserNotConfirmedException,
    /// Internal service error.
    InternalErrorException,
    /// The user pool configuration is invalid.
    InvalidUserPoolConfigurationException,
    /// The request was blocked by a web ACL.
    ForbiddenException,
}

impl CognitoIdpErrorCode {
    /// Returns the short error code string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidParameterException => "InvalidParameterException",
            Self::ResourceNotFoundException => "ResourceNotFoundException",
            Self::NotAuthorizedException => "NotAuthorizedException",
            Self::TooManyRequestsException => "TooManyRequestsException",
            Self::PasswordResetRequiredException => "PasswordResetRequiredException",
            Self::UserNotFoundException => "UserNotFoundException",
            Self::UserNotConfirmedException => "UserNotConfirmedException",
            Self::InternalErrorException => "InternalErrorException",
            Self::InvalidUserPoolConfigurationException => {
                "InvalidUserPoolConfigurationException"
            }
            Self::ForbiddenException => "ForbiddenException",
        }
    }

    /// Parse a sanitized error code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "InvalidParameterException" => Some(Self::InvalidParameterException),
            "ResourceNotFoundException" => Some(Self::ResourceNotFoundException),
            "NotAuthorizedException" => Some(Self::NotAuthorizedException),
            "TooManyRequestsException" => Some(Self::TooManyRequestsException),
            "PasswordResetRequiredException" => Some(Self::PasswordResetRequiredException),
            "UserNotFoundException" => Some(Self::UserNotFoundException),
            "UserNotConfirmedException" => Some(Self::UserNotConfirmedException),
            "InternalErrorException" => Some(Self::InternalErrorException),
            "InvalidUserPoolConfigurationException" => {
                Some(Self::InvalidUserPoolConfigurationException)
            }
            "ForbiddenException" => Some(Self::ForbiddenException),
            _ => None,
        }
    }

    /// Returns the default HTTP status code for this error.
    #[must_use]
    pub fn default_status_code(&self) -> http::StatusCode {
        match self {
            Self::InternalErrorException => http::StatusCode::INTERNAL_SERVER_ERROR,
            Self::ForbiddenException => http::StatusCode::FORBIDDEN,
            Self::TooManyRequestsException => http::StatusCode::TOO_MANY_REQUESTS,
            Self::ResourceNotFoundException | Self::UserNotFoundException => {
                http::StatusCode::NOT_FOUND
            }
            _ => http::StatusCode::BAD_REQUEST,
        }
    }
}

impl fmt::Display for CognitoIdpErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorCode for CognitoIdpErrorCode {
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

/// A Cognito Identity Provider service error.
pub type CognitoIdpError = ServiceError<CognitoIdpErrorCode>;
