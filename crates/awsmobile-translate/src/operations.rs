//! Translate operations.

use std::fmt;

use crate::error::TranslateError;
use crate::input::{ListLanguagesInput, TranslateDocumentInput, TranslateTextInput};
use crate::output::{ListLanguagesOutput, TranslateDocumentOutput, TranslateTextOutput};

/// All supported Translate operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslateOperation {
    /// Translate a text.
    TranslateText,
    /// Translate a small document.
    TranslateDocument,
    /// List supported languages.
    ListLanguages,
}

impl TranslateOperation {
    /// Every operation, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::TranslateText,
        Self::TranslateDocument,
        Self::ListLanguages,
    ];

    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TranslateText => "TranslateText",
            Self::TranslateDocument => "TranslateDocument",
            Self::ListLanguages => "ListLanguages",
        }
    }

    /// Parse an operation name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "TranslateText" => Some(Self::TranslateText),
            "TranslateDocument" => Some(Self::TranslateDocument),
            "ListLanguages" => Some(Self::ListLanguages),
            _ => None,
        }
    }
}

impl fmt::Display for TranslateOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

awsmobile_core::operation! {
    TranslateText {
        service: &crate::METADATA,
        input: TranslateTextInput,
        output: TranslateTextOutput,
        error: TranslateError,
        parse: awsmobile_json::parse_response,
    }
}

awsmobile_core::operation! {
    TranslateDocument {
        service: &crate::METADATA,
        input: TranslateDocumentInput,
        output: TranslateDocumentOutput,
        error: TranslateError,
        parse: awsmobile_json::parse_response,
    }
}

awsmobile_core::operation! {
    ListLanguages {
        service: &crate::METADATA,
        input: ListLanguagesInput,
        output: ListLanguagesOutput,
        error: TranslateError,
        parse: awsmobile_json::parse_response,
    }
}
