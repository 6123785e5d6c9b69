//! Translate result shapes.

use serde::{Deserialize, Serialize};

use crate::types::{
    AppliedTerminology, DisplayLanguageCode, Language, TranslatedDocument, TranslationSettings,
};

/// Result of `TranslateText`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TranslateTextOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language_code: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsmobile_json::container::list"
    )]
    pub applied_terminologies: Option<Vec<AppliedTerminology>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsmobile_json::container::shape"
    )]
    pub applied_settings: Option<TranslationSettings>,
}

/// Result of `TranslateDocument`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TranslateDocumentOutput {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsmobile_json::container::shape"
    )]
    pub translated_document: Option<TranslatedDocument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language_code: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsmobile_json::container::list"
    )]
    pub applied_terminologies: Option<Vec<AppliedTerminology>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsmobile_json::container::shape"
    )]
    pub applied_settings: Option<TranslationSettings>,
}

/// Result of `ListLanguages`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListLanguagesOutput {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsmobile_json::container::list"
    )]
    pub languages: Option<Vec<Language>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_language_code: Option<DisplayLanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}
