//! Translate request shapes.

use serde::{Deserialize, Serialize};

use crate::types::{DisplayLanguageCode, Document, TranslationSettings};

/// Input for `TranslateText`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TranslateTextInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminology_names: Option<Vec<String>>,
    /// Source language, or `auto` to detect it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<TranslationSettings>,
}

awsmobile_core::with_setters!(TranslateTextInput {
    with_text: text: String,
    with_terminology_names: terminology_names: Vec<String>,
    with_source_language_code: source_language_code: String,
    with_target_language_code: target_language_code: String,
    with_settings: settings: TranslationSettings,
});

/// Input for `TranslateDocument`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TranslateDocumentInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Document>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminology_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<TranslationSettings>,
}

awsmobile_core::with_setters!(TranslateDocumentInput {
    with_document: document: Document,
    with_terminology_names: terminology_names: Vec<String>,
    with_source_language_code: source_language_code: String,
    with_target_language_code: target_language_code: String,
    with_settings: settings: TranslationSettings,
});

/// Input for `ListLanguages`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListLanguagesInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_language_code: Option<DisplayLanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

awsmobile_core::with_setters!(ListLanguagesInput {
    with_display_language_code: display_language_code: DisplayLanguageCode,
    with_next_token: next_token: String,
    with_max_results: max_results: i32,
});
