//! SNS result shapes and their XML readers and writers.
//!
//! Each reader matches its members at the depth handed to it by
//! [`unmarshall_struct`], so a `<TopicArn>` nested inside a list member is
//! never mistaken for a member of the result itself.

use std::collections::HashMap;
use std::io::{self, Write};

use awsmobile_xml::serialize::{write_optional_text, write_shape_list, write_string_map};
use awsmobile_xml::{
    MapEntryUnmarshaller, StaxContext, XmlError, XmlMarshall, XmlUnmarshall,
    unmarshall_list_member, unmarshall_struct,
};
use quick_xml::Writer;

use crate::types::Topic;

/// Result of `Publish`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublishResult {
    pub message_id: Option<String>,
    /// Set for FIFO topics only.
    pub sequence_number: Option<String>,
}

impl XmlUnmarshall for PublishResult {
    fn unmarshall(ctx: &mut StaxContext<'_>) -> Result<Option<Self>, XmlError> {
        unmarshall_struct(ctx, |out: &mut Self, ctx, depth| {
            if ctx.test_expression("MessageId", depth) {
                out.message_id = String::unmarshall(ctx)?;
                return Ok(true);
            }
            if ctx.test_expression("SequenceNumber", depth) {
                out.sequence_number = String::unmarshall(ctx)?;
                return Ok(true);
            }
            Ok(false)
        })
    }
}

impl XmlMarshall for PublishResult {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_text(writer, "MessageId", self.message_id.as_deref())?;
        write_optional_text(writer, "SequenceNumber", self.sequence_number.as_deref())
    }
}

/// Result of `CreateTopic`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateTopicResult {
    pub topic_arn: Option<String>,
}

impl XmlUnmarshall for CreateTopicResult {
    fn unmarshall(ctx: &mut StaxContext<'_>) -> Result<Option<Self>, XmlError> {
        unmarshall_struct(ctx, |out: &mut Self, ctx, depth| {
            if ctx.test_expression("TopicArn", depth) {
                out.topic_arn = String::unmarshall(ctx)?;
                return Ok(true);
            }
            Ok(false)
        })
    }
}

impl XmlMarshall for CreateTopicResult {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_text(writer, "TopicArn", self.topic_arn.as_deref())
    }
}

/// Result of `GetTopicAttributes`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetTopicAttributesResult {
    pub attributes: Option<HashMap<String, String>>,
}

impl XmlUnmarshall for GetTopicAttributesResult {
    fn unmarshall(ctx: &mut StaxContext<'_>) -> Result<Option<Self>, XmlError> {
        unmarshall_struct(ctx, |out: &mut Self, ctx, depth| {
            if ctx.test_expression("Attributes", depth) {
                out.attributes.get_or_insert_with(HashMap::new);
                return Ok(true);
            }
            if ctx.test_expression("Attributes/entry", depth) {
                MapEntryUnmarshaller::KEY_VALUE.insert_into(&mut out.attributes, ctx)?;
                return Ok(true);
            }
            Ok(false)
        })
    }
}

impl XmlMarshall for GetTopicAttributesResult {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_string_map(writer, "Attributes", self.attributes.as_ref(), "key", "value")
    }
}

/// Result of `ListTopics`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListTopicsResult {
    pub topics: Option<Vec<Topic>>,
    pub next_token: Option<String>,
}

impl XmlUnmarshall for ListTopicsResult {
    fn unmarshall(ctx: &mut StaxContext<'_>) -> Result<Option<Self>, XmlError> {
        unmarshall_struct(ctx, |out: &mut Self, ctx, depth| {
            if ctx.test_expression("Topics", depth) {
                out.topics.get_or_insert_with(Vec::new);
                return Ok(true);
            }
            if ctx.test_expression("Topics/member", depth) {
                unmarshall_list_member(&mut out.topics, ctx)?;
                return Ok(true);
            }
            if ctx.test_expression("NextToken", depth) {
                out.next_token = String::unmarshall(ctx)?;
                return Ok(true);
            }
            Ok(false)
        })
    }
}

impl XmlMarshall for ListTopicsResult {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_shape_list(writer, "Topics", self.topics.as_deref())?;
        write_optional_text(writer, "NextToken", self.next_token.as_deref())
    }
}
