//! Shared Chime SDK Messaging shapes and enums.
//!
//! Shapes use `PascalCase` JSON member names. Timestamps travel as epoch
//! seconds; nested shapes, lists and maps are decoded leniently so that a
//! non-container wire value leaves the field unset.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

awsmobile_core::sdk_enum! {
    /// Kind of a channel message.
    pub enum ChannelMessageType {
        /// A regular message, visible to members.
        Standard => "STANDARD",
        /// A control message, delivered but not persisted to history.
        Control => "CONTROL",
    }
}

awsmobile_core::sdk_enum! {
    /// Whether a message is kept in channel history.
    pub enum ChannelMessagePersistenceType {
        Persistent => "PERSISTENT",
        NonPersistent => "NON_PERSISTENT",
    }
}

awsmobile_core::sdk_enum! {
    /// Delivery status of a message.
    pub enum ChannelMessageStatus {
        Sent => "SENT",
        Pending => "PENDING",
        Failed => "FAILED",
        Denied => "DENIED",
    }
}

awsmobile_core::sdk_enum! {
    /// Order of a message listing.
    pub enum SortOrder {
        Ascending => "ASCENDING",
        Descending => "DESCENDING",
    }
}

awsmobile_core::sdk_enum! {
    /// Push notification delivery type.
    pub enum PushNotificationType {
        Default => "DEFAULT",
        Voip => "VOIP",
    }
}

// ---------------------------------------------------------------------------
// Shapes
// ---------------------------------------------------------------------------

/// A user or bot identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Identity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Values of a message attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MessageAttributeValue {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsmobile_json::container::list"
    )]
    pub string_values: Option<Vec<String>>,
}

/// Push notification sent along with a message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PushNotificationConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub notification_type: Option<PushNotificationType>,
}

/// Status of a message and the reason for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChannelMessageStatusStructure {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<ChannelMessageStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// A member a targeted message is delivered to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Target {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_arn: Option<String>,
}

/// A message as stored in a channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChannelMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub message_type: Option<ChannelMessageType>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "awsmobile_core::timestamp::epoch_seconds"
    )]
    pub created_timestamp: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "awsmobile_core::timestamp::epoch_seconds"
    )]
    pub last_edited_timestamp: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "awsmobile_core::timestamp::epoch_seconds"
    )]
    pub last_updated_timestamp: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsmobile_json::container::shape"
    )]
    pub sender: Option<Identity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redacted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistence: Option<ChannelMessagePersistenceType>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsmobile_json::container::shape"
    )]
    pub status: Option<ChannelMessageStatusStructure>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsmobile_json::container::map"
    )]
    pub message_attributes: Option<HashMap<String, MessageAttributeValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsmobile_json::container::list"
    )]
    pub target: Option<Vec<Target>>,
}

/// A message as it appears in a listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChannelMessageSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub message_type: Option<ChannelMessageType>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "awsmobile_core::timestamp::epoch_seconds"
    )]
    pub created_timestamp: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "awsmobile_core::timestamp::epoch_seconds"
    )]
    pub last_updated_timestamp: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "awsmobile_core::timestamp::epoch_seconds"
    )]
    pub last_edited_timestamp: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsmobile_json::container::shape"
    )]
    pub sender: Option<Identity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redacted: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsmobile_json::container::shape"
    )]
    pub status: Option<ChannelMessageStatusStructure>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsmobile_json::container::map"
    )]
    pub message_attributes: Option<HashMap<String, MessageAttributeValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsmobile_json::container::list"
    )]
    pub target: Option<Vec<Target>>,
}

#[cfg(test)]
mod tests {
    use awsmobile_core::SdkEnum;

    use super::*;

    #[test]
    fn test_should_round_trip_every_enum_constant() {
        for v in ChannelMessageType::VALUES {
            assert_eq!(ChannelMessageType::from_value(v.as_str()).unwrap(), *v);
        }
        for v in ChannelMessagePersistenceType::VALUES {
            assert_eq!(ChannelMessagePersistenceType::from_value(v.as_str()).unwrap(), *v);
        }
        for v in ChannelMessageStatus::VALUES {
            assert_eq!(ChannelMessageStatus::from_value(v.as_str()).unwrap(), *v);
        }
        for v in SortOrder::VALUES {
            assert_eq!(SortOrder::from_value(v.as_str()).unwrap(), *v);
        }
        for v in PushNotificationType::VALUES {
            assert_eq!(PushNotificationType::from_value(v.as_str()).unwrap(), *v);
        }
    }

    #[test]
    fn test_should_reject_invalid_enum_values() {
        assert!(ChannelMessageType::from_optional(None).is_err());
        assert!(ChannelMessageType::from_value("").is_err());
        assert!(ChannelMessageType::from_value("not-a-real-value").is_err());
        assert!(SortOrder::from_value("ascending").is_err());
    }

    #[test]
    fn test_should_decode_message_with_unknown_members() {
        let json = r#"{
            "ChannelArn": "arn:aws:chime:us-east-1:1:app-instance/a/channel/c",
            "MessageId": "m-1",
            "Type": "STANDARD",
            "CreatedTimestamp": 1621074030.25,
            "Sender": {"Arn": "arn:user", "Name": "Ann"},
            "Status": {"Value": "SENT"},
            "MessageAttributes": {"topic": {"StringValues": ["a", "b"]}},
            "Target": [{"MemberArn": "arn:member"}],
            "SomethingNew": {"Nested": true}
        }"#;
        let message: ChannelMessage = serde_json::from_str(json).unwrap();

        assert_eq!(message.message_id.as_deref(), Some("m-1"));
        assert_eq!(message.message_type, Some(ChannelMessageType::Standard));
        assert_eq!(
            message.created_timestamp.unwrap().timestamp_millis(),
            1_621_074_030_250
        );
        assert_eq!(message.sender.unwrap().name.as_deref(), Some("Ann"));
        assert_eq!(
            message.status.unwrap().value,
            Some(ChannelMessageStatus::Sent)
        );
        assert_eq!(
            message.message_attributes.unwrap()["topic"].string_values,
            Some(vec!["a".to_owned(), "b".to_owned()])
        );
        assert_eq!(
            message.target.unwrap()[0].member_arn.as_deref(),
            Some("arn:member")
        );
    }

    #[test]
    fn test_should_skip_non_container_nested_values() {
        let json = r#"{"MessageId": "m-1", "Sender": "oops", "Target": {}, "MessageAttributes": null}"#;
        let message: ChannelMessage = serde_json::from_str(json).unwrap();
        assert_eq!(message.message_id.as_deref(), Some("m-1"));
        assert!(message.sender.is_none());
        assert!(message.target.is_none());
        assert!(message.message_attributes.is_none());
    }

    #[test]
    fn test_should_fail_on_unknown_enum_in_message() {
        let json = r#"{"Type": "URGENT"}"#;
        assert!(serde_json::from_str::<ChannelMessage>(json).is_err());
    }

    #[test]
    fn test_should_round_trip_summary() {
        let summary = ChannelMessageSummary {
            message_id: Some("m-2".to_owned()),
            content: Some("hello".to_owned()),
            message_type: Some(ChannelMessageType::Control),
            created_timestamp: DateTime::from_timestamp(1_621_074_030, 0),
            redacted: Some(false),
            status: Some(ChannelMessageStatusStructure {
                value: Some(ChannelMessageStatus::Pending),
                detail: Some("queued".to_owned()),
            }),
            message_attributes: Some(HashMap::from([(
                "k".to_owned(),
                MessageAttributeValue {
                    string_values: Some(vec!["v".to_owned()]),
                },
            )])),
            ..ChannelMessageSummary::default()
        };
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains(r#""CreatedTimestamp":1621074030"#));
        assert!(!json.contains("null"));
        let back: ChannelMessageSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }
}
