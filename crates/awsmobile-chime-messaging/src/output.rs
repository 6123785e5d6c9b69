//! Chime SDK Messaging result shapes.

use serde::{Deserialize, Serialize};

use crate::types::{ChannelMessage, ChannelMessageStatusStructure, ChannelMessageSummary};

/// Result of `SendChannelMessage`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SendChannelMessageOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsmobile_json::container::shape"
    )]
    pub status: Option<ChannelMessageStatusStructure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_channel_id: Option<String>,
}

/// Result of `GetChannelMessage`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetChannelMessageOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_arn: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsmobile_json::container::shape"
    )]
    pub channel_message: Option<ChannelMessage>,
}

/// Result of `ListChannelMessages`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListChannelMessagesOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsmobile_json::container::list"
    )]
    pub channel_messages: Option<Vec<ChannelMessageSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_channel_id: Option<String>,
}

/// Result of `DeleteChannelMessage`. The service returns no body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteChannelMessageOutput {}
