//! Comprehend error codes.

use std::fmt;

use awsmobile_core::{ErrorCode, ServiceError};

/// Modeled Comprehend error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ComprehendErrorCode {
    /// An internal server error occurred.
    InternalServerException,
    /// The request is invalid.
    InvalidRequestException,
    /// The text exceeds the size limit.
    TextSizeLimitExceededException,
    /// The language of the text is not supported.
    UnsupportedLanguageException,
}

impl ComprehendErrorCode {
    /// Returns the short error code string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InternalServerException => "InternalServerException",
            Self::InvalidRequestException => "InvalidRequestException",
            Self::TextSizeLimitExceededException => "TextSizeLimitExceededException",
            Self::UnsupportedLanguageException => "UnsupportedLanguageException",
        }
    }

    /// Parse a sanitized error code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "InternalServerException" => Some(Self::InternalServerException),
            "InvalidRequestException" => Some(Self::InvalidRequestException),
            "TextSizeLimitExceededException" => Some(Self::TextSizeLimitExceededException),
            "UnsupportedLanguageException" => Some(Self::UnsupportedLanguageException),
            _ => None,
        }
    }

    /// Returns the default HTTP status code for this error.
    #[must_use]
    pub fn default_status_code(&self) -> http::StatusCode {
        match self {
            Self::InternalServerException => http::StatusCode::INTERNAL_SERVER_ERROR,
            _ => http::StatusCode::BAD_REQUEST,
        }
    }
}

impl fmt::Display for ComprehendErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorCode for ComprehendErrorCode {
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

/// A Comprehend service error.
pub type ComprehendError = ServiceError<ComprehendErrorCode>;
