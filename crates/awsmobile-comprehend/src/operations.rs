//! Comprehend operations.

use std::fmt;

use crate::error::ComprehendError;
use crate::input::{DetectDominantLanguageInput, DetectSentimentInput};
use crate::output::{DetectDominantLanguageOutput, DetectSentimentOutput};

/// All supported Comprehend operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComprehendOperation {
    /// Detect the overall sentiment of a text.
    DetectSentiment,
    /// Detect the dominant language of a text.
    DetectDominantLanguage,
}

impl ComprehendOperation {
    /// Every operation, in declaration order.
    pub const ALL: &'static [Self] = &[Self::DetectSentiment, Self::DetectDominantLanguage];

    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DetectSentiment => "DetectSentiment",
            Self::DetectDominantLanguage => "DetectDominantLanguage",
        }
    }

    /// Parse an operation name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "DetectSentiment" => Some(Self::DetectSentiment),
            "DetectDominantLanguage" => Some(Self::DetectDominantLanguage),
            _ => None,
        }
    }
}

impl fmt::Display for ComprehendOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

awsmobile_core::operation! {
    DetectSentiment {
        service: &crate::METADATA,
        input: DetectSentimentInput,
        output: DetectSentimentOutput,
        error: ComprehendError,
        parse: awsmobile_json::parse_response,
    }
}

awsmobile_core::operation! {
    DetectDominantLanguage {
        service: &crate::METADATA,
        input: DetectDominantLanguageInput,
        output: DetectDominantLanguageOutput,
        error: ComprehendError,
        parse: awsmobile_json::parse_response,
    }
}
