//! Chime SDK Messaging request shapes.
//!
//! Members bound to the path, the `x-amz-chime-bearer` header or the query
//! string are never written to the JSON body. They still deserialize, so a
//! complete input can be read from a single JSON document.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{
    ChannelMessagePersistenceType, ChannelMessageType, MessageAttributeValue,
    PushNotificationConfiguration, SortOrder, Target,
};

/// Input for `SendChannelMessage`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SendChannelMessageInput {
    /// Path label `{channelArn}`.
    #[serde(skip_serializing)]
    pub channel_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub message_type: Option<ChannelMessageType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistence: Option<ChannelMessagePersistenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    /// Idempotency token. Generated when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
    /// Header `x-amz-chime-bearer`.
    #[serde(skip_serializing)]
    pub chime_bearer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_notification: Option<PushNotificationConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_attributes: Option<HashMap<String, MessageAttributeValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Vec<Target>>,
}

awsmobile_core::with_setters!(SendChannelMessageInput {
    with_channel_arn: channel_arn: String,
    with_content: content: String,
    with_message_type: message_type: ChannelMessageType,
    with_persistence: persistence: ChannelMessagePersistenceType,
    with_metadata: metadata: String,
    with_client_request_token: client_request_token: String,
    with_chime_bearer: chime_bearer: String,
    with_push_notification: push_notification: PushNotificationConfiguration,
    with_message_attributes: message_attributes: HashMap<String, MessageAttributeValue>,
    with_sub_channel_id: sub_channel_id: String,
    with_content_type: content_type: String,
    with_target: target: Vec<Target>,
});

/// Input for `GetChannelMessage`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetChannelMessageInput {
    /// Path label `{channelArn}`.
    #[serde(skip_serializing)]
    pub channel_arn: Option<String>,
    /// Path label `{messageId}`.
    #[serde(skip_serializing)]
    pub message_id: Option<String>,
    /// Header `x-amz-chime-bearer`.
    #[serde(skip_serializing)]
    pub chime_bearer: Option<String>,
    /// Query parameter `sub-channel-id`.
    #[serde(skip_serializing)]
    pub sub_channel_id: Option<String>,
}

awsmobile_core::with_setters!(GetChannelMessageInput {
    with_channel_arn: channel_arn: String,
    with_message_id: message_id: String,
    with_chime_bearer: chime_bearer: String,
    with_sub_channel_id: sub_channel_id: String,
});

/// Input for `ListChannelMessages`. Everything but the channel is bound to
/// the query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListChannelMessagesInput {
    #[serde(skip_serializing)]
    pub channel_arn: Option<String>,
    #[serde(skip_serializing)]
    pub sort_order: Option<SortOrder>,
    #[serde(
        default,
        skip_serializing,
        with = "awsmobile_core::timestamp::iso8601"
    )]
    pub not_before: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing,
        with = "awsmobile_core::timestamp::iso8601"
    )]
    pub not_after: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub max_results: Option<i32>,
    #[serde(skip_serializing)]
    pub next_token: Option<String>,
    #[serde(skip_serializing)]
    pub chime_bearer: Option<String>,
    #[serde(skip_serializing)]
    pub sub_channel_id: Option<String>,
}

awsmobile_core::with_setters!(ListChannelMessagesInput {
    with_channel_arn: channel_arn: String,
    with_sort_order: sort_order: SortOrder,
    with_not_before: not_before: DateTime<Utc>,
    with_not_after: not_after: DateTime<Utc>,
    with_max_results: max_results: i32,
    with_next_token: next_token: String,
    with_chime_bearer: chime_bearer: String,
    with_sub_channel_id: sub_channel_id: String,
});

/// Input for `DeleteChannelMessage`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteChannelMessageInput {
    #[serde(skip_serializing)]
    pub channel_arn: Option<String>,
    #[serde(skip_serializing)]
    pub message_id: Option<String>,
    #[serde(skip_serializing)]
    pub chime_bearer: Option<String>,
    #[serde(skip_serializing)]
    pub sub_channel_id: Option<String>,
}

awsmobile_core::with_setters!(DeleteChannelMessageInput {
    with_channel_arn: channel_arn: String,
    with_message_id: message_id: String,
    with_chime_bearer: chime_bearer: String,
    with_sub_channel_id: sub_channel_id: String,
});
