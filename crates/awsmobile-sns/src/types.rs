//! Shared SNS shapes.

use std::io::{self, Write};

use awsmobile_xml::serialize::write_optional_text;
use awsmobile_xml::{
    QueryMarshall, QueryWriter, StaxContext, XmlError, XmlMarshall, XmlUnmarshall,
    unmarshall_struct,
};
use bytes::Bytes;
use quick_xml::Writer;
use serde::{Deserialize, Serialize};

/// A typed message attribute. `DataType` is `String`, `String.Array`,
/// `Number` or `Binary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MessageAttributeValue {
    pub data_type: Option<String>,
    pub string_value: Option<String>,
    #[serde(default, with = "awsmobile_core::blob::base64")]
    pub binary_value: Option<Bytes>,
}

impl MessageAttributeValue {
    /// A `String` attribute.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            data_type: Some("String".to_owned()),
            string_value: Some(value.into()),
            binary_value: None,
        }
    }

    /// A `Binary` attribute.
    #[must_use]
    pub fn binary(value: impl Into<Bytes>) -> Self {
        Self {
            data_type: Some("Binary".to_owned()),
            string_value: None,
            binary_value: Some(value.into()),
        }
    }
}

impl QueryMarshall for MessageAttributeValue {
    fn write_query(&self, writer: &mut QueryWriter, prefix: &str) {
        writer.field(prefix, "DataType", self.data_type.as_ref());
        writer.field(prefix, "StringValue", self.string_value.as_ref());
        writer.field(prefix, "BinaryValue", self.binary_value.as_ref());
    }
}

/// A topic tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl Tag {
    /// A tag with both members set.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}

impl QueryMarshall for Tag {
    fn write_query(&self, writer: &mut QueryWriter, prefix: &str) {
        writer.field(prefix, "Key", self.key.as_ref());
        writer.field(prefix, "Value", self.value.as_ref());
    }
}

/// A topic in a listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Topic {
    pub topic_arn: Option<String>,
}

impl XmlUnmarshall for Topic {
    fn unmarshall(ctx: &mut StaxContext<'_>) -> Result<Option<Self>, XmlError> {
        unmarshall_struct(ctx, |topic: &mut Self, ctx, depth| {
            if ctx.test_expression("TopicArn", depth) {
                topic.topic_arn = String::unmarshall(ctx)?;
                return Ok(true);
            }
            Ok(false)
        })
    }
}

impl XmlMarshall for Topic {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_text(writer, "TopicArn", self.topic_arn.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_flatten_binary_attribute() {
        let mut writer = QueryWriter::new("Publish", "2010-03-31");
        MessageAttributeValue::binary(Bytes::from_static(b"\x00\x01"))
            .write_query(&mut writer, "Value");
        assert_eq!(
            writer.params()[2..],
            [
                ("Value.DataType".to_owned(), "Binary".to_owned()),
                ("Value.BinaryValue".to_owned(), "AAE=".to_owned()),
            ]
        );
    }

    #[test]
    fn test_should_read_topic_member() {
        let mut ctx = StaxContext::new(b"<member><TopicArn>arn:t</TopicArn></member>");
        ctx.next_event().unwrap();
        let topic = Topic::unmarshall(&mut ctx).unwrap().unwrap();
        assert_eq!(topic.topic_arn.as_deref(), Some("arn:t"));
    }
}
