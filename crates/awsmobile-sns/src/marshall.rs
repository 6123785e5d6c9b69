//! `awsQuery` request marshallers.

use awsmobile_core::{Marshall, MarshalError, MarshalledRequest};
use awsmobile_xml::{QueryMarshall, QueryWriter, query_request};

use crate::METADATA;
use crate::input::{CreateTopicInput, GetTopicAttributesInput, ListTopicsInput, PublishInput};

impl QueryMarshall for PublishInput {
    fn write_query(&self, writer: &mut QueryWriter, prefix: &str) {
        writer.field(prefix, "TopicArn", self.topic_arn.as_ref());
        writer.field(prefix, "TargetArn", self.target_arn.as_ref());
        writer.field(prefix, "PhoneNumber", self.phone_number.as_ref());
        writer.field(prefix, "Message", self.message.as_ref());
        writer.field(prefix, "Subject", self.subject.as_ref());
        writer.field(prefix, "MessageStructure", self.message_structure.as_ref());
        writer.map(
            prefix,
            "MessageAttributes",
            self.message_attributes.as_ref(),
            "Name",
            "Value",
        );
        writer.field(
            prefix,
            "MessageDeduplicationId",
            self.message_deduplication_id.as_ref(),
        );
        writer.field(prefix, "MessageGroupId", self.message_group_id.as_ref());
    }
}

impl QueryMarshall for CreateTopicInput {
    fn write_query(&self, writer: &mut QueryWriter, prefix: &str) {
        writer.field(prefix, "Name", self.name.as_ref());
        writer.map(prefix, "Attributes", self.attributes.as_ref(), "key", "value");
        writer.list(prefix, "Tags", self.tags.as_deref());
        writer.field(
            prefix,
            "DataProtectionPolicy",
            self.data_protection_policy.as_ref(),
        );
    }
}

impl QueryMarshall for GetTopicAttributesInput {
    fn write_query(&self, writer: &mut QueryWriter, prefix: &str) {
        writer.field(prefix, "TopicArn", self.topic_arn.as_ref());
    }
}

impl QueryMarshall for ListTopicsInput {
    fn write_query(&self, writer: &mut QueryWriter, prefix: &str) {
        writer.field(prefix, "NextToken", self.next_token.as_ref());
    }
}

macro_rules! query_action {
    ($($input:ty => $operation:literal),+ $(,)?) => {
        $(
            impl Marshall for $input {
                const OPERATION: &'static str = $operation;

                fn marshall(&self) -> Result<MarshalledRequest, MarshalError> {
                    query_request(&METADATA, Self::OPERATION, self)
                }
            }
        )+
    };
}

query_action! {
    PublishInput => "Publish",
    CreateTopicInput => "CreateTopic",
    GetTopicAttributesInput => "GetTopicAttributes",
    ListTopicsInput => "ListTopics",
}
