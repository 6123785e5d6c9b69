//! SNS request shapes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{MessageAttributeValue, Tag};

/// Input for `Publish`. Exactly one of `topic_arn`, `target_arn` or
/// `phone_number` is expected by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PublishInput {
    pub topic_arn: Option<String>,
    pub target_arn: Option<String>,
    pub phone_number: Option<String>,
    pub message: Option<String>,
    pub subject: Option<String>,
    /// `json` to send a different message per protocol.
    pub message_structure: Option<String>,
    pub message_attributes: Option<HashMap<String, MessageAttributeValue>>,
    pub message_deduplication_id: Option<String>,
    pub message_group_id: Option<String>,
}

awsmobile_core::with_setters!(PublishInput {
    with_topic_arn: topic_arn: String,
    with_target_arn: target_arn: String,
    with_phone_number: phone_number: String,
    with_message: message: String,
    with_subject: subject: String,
    with_message_structure: message_structure: String,
    with_message_attributes: message_attributes: HashMap<String, MessageAttributeValue>,
    with_message_deduplication_id: message_deduplication_id: String,
    with_message_group_id: message_group_id: String,
});

/// Input for `CreateTopic`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTopicInput {
    pub name: Option<String>,
    pub attributes: Option<HashMap<String, String>>,
    pub tags: Option<Vec<Tag>>,
    pub data_protection_policy: Option<String>,
}

awsmobile_core::with_setters!(CreateTopicInput {
    with_name: name: String,
    with_attributes: attributes: HashMap<String, String>,
    with_tags: tags: Vec<Tag>,
    with_data_protection_policy: data_protection_policy: String,
});

/// Input for `GetTopicAttributes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetTopicAttributesInput {
    pub topic_arn: Option<String>,
}

awsmobile_core::with_setters!(GetTopicAttributesInput {
    with_topic_arn: topic_arn: String,
});

/// Input for `ListTopics`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTopicsInput {
    pub next_token: Option<String>,
}

awsmobile_core::with_setters!(ListTopicsInput {
    with_next_token: next_token: String,
});
