//! Translate error codes.

use std::fmt;

use awsmobile_core::{ErrorCode, ServiceError};

/// Modeled Translate error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TranslateErrorCode {
    /// The request is not valid.
    InvalidRequestException,
    /// A parameter value is not valid.
    InvalidParameterValueException,
    /// The text exceeds the size limit.
    TextSizeLimitExceededException,
    /// Too many requests.
    TooManyRequestsException,
    /// The source and target languages cannot be paired.
    UnsupportedLanguagePairException,
    /// The requested display language is not supported.
    UnsupportedDisplayLanguageCodeException,
    /// The source language could not be detected with enough confidence.
    DetectedLanguageLowConfidenceException,
    /// A named resource, such as a terminology, does not exist.
    ResourceNotFoundException,
    /// A service limit was exceeded.
    LimitExceededException,
    /// An internal server error occurred.
    InternalServerException,
    /// The service is temporarily unavailable.
    ServiceUnavailableException,
}

impl TranslateErrorCode {
    /// Returns the short error code string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidRequestException => "InvalidRequestException",
            Self::InvalidParameterValueException => "InvalidParameterValueException",
            Self::TextSizeLimitExceededException => "TextSizeLimitExceededException",
            Self::TooManyRequestsException => "TooManyRequestsException",
            Self::UnsupportedLanguagePairException => "UnsupportedLanguagePairException",
            Self::UnsupportedDisplayLanguageCodeException => {
                "UnsupportedDisplayLanguageCodeException"
            }
            Self::DetectedLanguageLowConfidenceException => {
                "DetectedLanguageLowConfidenceException"
            }
            Self::ResourceNotFoundException => "ResourceNotFoundException",
            Self::LimitExceededException => "LimitExceededException",
            Self::InternalServerException => "InternalServerException",
            Self::ServiceUnavailableException => "ServiceUnavailableException",
        }
    }

    /// Parse a sanitized error code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "InvalidRequestException" => Some(Self::InvalidRequestException),
            "InvalidParameterValueException" => Some(Self::InvalidParameterValueException),
            "TextSizeLimitExceededException" => Some(Self::TextSizeLimitExceededException),
            "TooManyRequestsException" => Some(Self::TooManyRequestsException),
            "UnsupportedLanguagePairException" => Some(Self::UnsupportedLanguagePairException),
            "UnsupportedDisplayLanguageCodeException" => {
                Some(Self::UnsupportedDisplayLanguageCodeException)
            }
            "DetectedLanguageLowConfidenceException" => {
                Some(Self::DetectedLanguageLowConfidenceException)
            }
            "ResourceNotFoundException" => Some(Self::ResourceNotFoundException),
            "LimitExceededException" => Some(Self::LimitExceededException),
            "InternalServerException" => Some(Self::InternalServerException),
            "ServiceUnavailableException" => Some(Self::ServiceUnavailableException),
            _ => None,
        }
    }

    /// Returns the default HTTP status code for this error.
    #[must_use]
    pub fn default_status_code(&self) -> http::StatusCode {
        match self {
            Self::ResourceNotFoundException => http::StatusCode::NOT_FOUND,
            Self::TooManyRequestsException => http::StatusCode::TOO_MANY_REQUESTS,
            Self::InternalServerException => http::StatusCode::INTERNAL_SERVER_ERROR,
            Self::ServiceUnavailableException => http::StatusCode::SERVICE_UNAVAILABLE,
            _ => http::StatusCode::BAD_REQUEST,
        }
    }
}

impl fmt::Display for TranslateErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorCode for TranslateErrorCode {
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

/// A Translate service error.
pub type TranslateError = ServiceError<TranslateErrorCode>;
