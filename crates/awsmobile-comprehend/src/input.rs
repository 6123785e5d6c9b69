//! Comprehend request shapes.

use serde::{Deserialize, Serialize};

use crate::types::LanguageCode;

/// Input for `DetectSentiment`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectSentimentInput {
    /// UTF-8 text, at most 5 000 bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
}

awsmobile_core::with_setters!(DetectSentimentInput {
    with_text: text: String,
    with_language_code: language_code: LanguageCode,
});

/// Input for `DetectDominantLanguage`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectDominantLanguageInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

awsmobile_core::with_setters!(DetectDominantLanguageInput {
    with_text: text: String,
});
