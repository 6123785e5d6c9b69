//! Comprehend result shapes.

use serde::{Deserialize, Serialize};

use crate::types::{DominantLanguage, SentimentScore, SentimentType};

/// Result of `DetectSentiment`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectSentimentOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentType>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsmobile_json::container::shape"
    )]
    pub sentiment_score: Option<SentimentScore>,
}

/// Result of `DetectDominantLanguage`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectDominantLanguageOutput {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsmobile_json::container::list"
    )]
    pub languages: Option<Vec<DominantLanguage>>,
}

impl DetectDominantLanguageOutput {
    /// The language with the highest score.
    #[must_use]
    pub fn best(&self) -> Option<&DominantLanguage> {
        self.languages.as_deref()?.iter().max_by(|a, b| {
            a.score
                .unwrap_or_default()
                .total_cmp(&b.score.unwrap_or_default())
        })
    }
}
