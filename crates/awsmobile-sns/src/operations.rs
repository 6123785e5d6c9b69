//! SNS operations.

use std::fmt;

use crate::error::SnsError;
use crate::input::{CreateTopicInput, GetTopicAttributesInput, ListTopicsInput, PublishInput};
use crate::output::{CreateTopicResult, GetTopicAttributesResult, ListTopicsResult, PublishResult};

/// All supported SNS operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnsOperation {
    /// Send a message to a topic, endpoint or phone number.
    Publish,
    /// Create a topic (idempotent by name).
    CreateTopic,
    /// Read the attributes of a topic.
    GetTopicAttributes,
    /// List topics, 100 at a time.
    ListTopics,
}

impl SnsOperation {
    /// Every operation, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::Publish,
        Self::CreateTopic,
        Self::GetTopicAttributes,
        Self::ListTopics,
    ];

    /// Returns the AWS action name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Publish => "Publish",
            Self::CreateTopic => "CreateTopic",
            Self::GetTopicAttributes => "GetTopicAttributes",
            Self::ListTopics => "ListTopics",
        }
    }

    /// Parse an action name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Publish" => Some(Self::Publish),
            "CreateTopic" => Some(Self::CreateTopic),
            "GetTopicAttributes" => Some(Self::GetTopicAttributes),
            "ListTopics" => Some(Self::ListTopics),
            _ => None,
        }
    }
}

impl fmt::Display for SnsOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

awsmobile_core::operation! {
    Publish {
        service: &crate::METADATA,
        input: PublishInput,
        output: PublishResult,
        error: SnsError,
        parse: awsmobile_xml::parse_response,
    }
}

awsmobile_core::operation! {
    CreateTopic {
        service: &crate::METADATA,
        input: CreateTopicInput,
        output: CreateTopicResult,
        error: SnsError,
        parse: awsmobile_xml::parse_response,
    }
}

awsmobile_core::operation! {
    GetTopicAttributes {
        service: &crate::METADATA,
        input: GetTopicAttributesInput,
        output: GetTopicAttributesResult,
        error: SnsError,
        parse: awsmobile_xml::parse_response,
    }
}

awsmobile_core::operation! {
    ListTopics {
        service: &crate::METADATA,
        input: ListTopicsInput,
        output: ListTopicsResult,
        error: SnsError,
        parse: awsmobile_xml::parse_response,
    }
}
