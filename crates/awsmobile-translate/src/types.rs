//! Shared Translate shapes and enums.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

awsmobile_core::sdk_enum! {
    /// Formality of the translated text.
    pub enum Formality {
        Formal => "FORMAL",
        Informal => "INFORMAL",
    }
}

awsmobile_core::sdk_enum! {
    /// Profanity handling.
    pub enum Profanity {
        Mask => "MASK",
    }
}

awsmobile_core::sdk_enum! {
    /// Brevity of the translated text.
    pub enum Brevity {
        On => "ON",
    }
}

awsmobile_core::sdk_enum! {
    /// Language the names in a language listing are written in.
    pub enum DisplayLanguageCode {
        De => "de",
        En => "en",
        Es => "es",
        Fr => "fr",
        It => "it",
        Ja => "ja",
        Ko => "ko",
        Pt => "pt",
        Zh => "zh",
        ZhTw => "zh-TW",
    }
}

// ---------------------------------------------------------------------------
// Shapes
// ---------------------------------------------------------------------------

/// Optional translation settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TranslationSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formality: Option<Formality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profanity: Option<Profanity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brevity: Option<Brevity>,
}

/// A source/target term pair of a custom terminology.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Term {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_text: Option<String>,
}

/// A terminology applied to a translation and the terms that matched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AppliedTerminology {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsmobile_json::container::list"
    )]
    pub terms: Option<Vec<Term>>,
}

/// A supported language.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Language {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

/// Document content to translate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Document {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "awsmobile_core::blob::base64"
    )]
    pub content: Option<Bytes>,
    /// `text/html`, `text/plain` or the docx media type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

/// A translated document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TranslatedDocument {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "awsmobile_core::blob::base64"
    )]
    pub content: Option<Bytes>,
}
