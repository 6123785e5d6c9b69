//! Shared Comprehend shapes and enums.

use serde::{Deserialize, Serialize};

awsmobile_core::sdk_enum! {
    /// Languages supported by the synchronous detection APIs.
    pub enum LanguageCode {
        En => "en",
        Es => "es",
        Fr => "fr",
        De => "de",
        It => "it",
        Pt => "pt",
        Ar => "ar",
        Hi => "hi",
        Ja => "ja",
        Ko => "ko",
        Zh => "zh",
        ZhTw => "zh-TW",
    }
}

awsmobile_core::sdk_enum! {
    /// Overall sentiment of a text.
    pub enum SentimentType {
        Positive => "POSITIVE",
        Negative => "NEGATIVE",
        Neutral => "NEUTRAL",
        Mixed => "MIXED",
    }
}

/// Confidence of each sentiment, between 0 and 1.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SentimentScore {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positive: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neutral: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mixed: Option<f32>,
}

/// A detected language. The code is an RFC 5646 tag and may name a language
/// outside [`LanguageCode`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DominantLanguage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}
