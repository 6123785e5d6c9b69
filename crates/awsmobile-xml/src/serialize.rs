//! Query response documents.
//!
//! The writer side of the query protocol mirrors what the unmarshallers read.
//! It is what a service (or a test double of one) sends back:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <PublishResponse xmlns="http://sns.amazonaws.com/doc/2010-03-31/">
//!   <PublishResult>
//!     <MessageId>94f20ce6-13c5-43a0-9a9e-ca52d816e90b</MessageId>
//!   </PublishResult>
//!   <ResponseMetadata>
//!     <RequestId>f187a3c1-376f-11df-8963-01868b7c937a</RequestId>
//!   </ResponseMetadata>
//! </PublishResponse>
//! ```

use std::collections::HashMap;
use std::fmt::Display;
use std::io::{self, Write};

use awsmobile_core::{TimestampFormat, blob};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};

use crate::error::XmlError;

/// A shape that can write its members as child elements.
pub trait XmlMarshall {
    /// Write the members of this value into the current element.
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()>;
}

/// Write a complete `<{Operation}Response>` document around `result`.
pub fn to_query_response<T: XmlMarshall>(
    operation: &str,
    namespace: &str,
    result: &T,
    request_id: &str,
) -> Result<Vec<u8>, XmlError> {
    let mut buf = Vec::with_capacity(512);
    let mut writer = Writer::new(&mut buf);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    writer
        .create_element(format!("{operation}Response"))
        .with_attribute(("xmlns", namespace))
        .write_inner_content(|w| {
            w.create_element(format!("{operation}Result"))
                .write_inner_content(|w| result.write_xml(w))?;
            w.create_element("ResponseMetadata").write_inner_content(|w| {
                write_text_element(w, "RequestId", request_id)
            })?;
            Ok(())
        })?;

    Ok(buf)
}

/// Write a simple `<tag>text</tag>` element.
pub fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    text: &str,
) -> io::Result<()> {
    writer
        .create_element(tag)
        .write_text_content(BytesText::new(text))?;
    Ok(())
}

/// Write `<tag>text</tag>` only if the value is `Some`.
pub fn write_optional_text<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<&str>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text_element(writer, tag, v)?;
    }
    Ok(())
}

/// Write `<tag>value</tag>` for an optional number or boolean.
pub fn write_optional_value<W: Write, V: Display>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<V>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text_element(writer, tag, &v.to_string())?;
    }
    Ok(())
}

/// Write `<tag>value</tag>` for an optional ISO-8601 timestamp.
pub fn write_optional_timestamp<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<&DateTime<Utc>>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text_element(writer, tag, &TimestampFormat::Iso8601.format(v))?;
    }
    Ok(())
}

/// Write `<tag>base64</tag>` for an optional blob.
pub fn write_optional_blob<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<&Bytes>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text_element(writer, tag, &blob::encode(v))?;
    }
    Ok(())
}

/// Write a nested shape element if the value is `Some`.
pub fn write_optional_shape<W: Write, T: XmlMarshall>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<&T>,
) -> io::Result<()> {
    if let Some(v) = value {
        writer
            .create_element(tag)
            .write_inner_content(|w| v.write_xml(w))?;
    }
    Ok(())
}

/// Write `<tag><member>..</member>..</tag>` for a list of shapes.
pub fn write_shape_list<W: Write, T: XmlMarshall>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<&[T]>,
) -> io::Result<()> {
    if let Some(items) = value {
        writer.create_element(tag).write_inner_content(|w| {
            for item in items {
                w.create_element("member")
                    .write_inner_content(|w| item.write_xml(w))?;
            }
            Ok(())
        })?;
    }
    Ok(())
}

/// Write `<tag><entry><key/><value/></entry>..</tag>` for a string map.
/// Entries are written in key order.
pub fn write_string_map<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<&HashMap<String, String>>,
    key_name: &str,
    value_name: &str,
) -> io::Result<()> {
    if let Some(map) = value {
        let mut entries: Vec<_> = map.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        writer.create_element(tag).write_inner_content(|w| {
            for (k, v) in entries {
                w.create_element("entry").write_inner_content(|w| {
                    write_text_element(w, key_name, k)?;
                    write_text_element(w, value_name, v)
                })?;
            }
            Ok(())
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::{StaxContext, XmlUnmarshall, from_query_response, unmarshall_struct};

    struct Echo {
        id: Option<String>,
        count: Option<i32>,
        tags: Option<HashMap<String, String>>,
    }

    impl XmlMarshall for Echo {
        fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
            write_optional_text(writer, "Id", self.id.as_deref())?;
            write_optional_value(writer, "Count", self.count)?;
            write_string_map(writer, "Tags", self.tags.as_ref(), "key", "value")?;
            Ok(())
        }
    }

    #[test]
    fn test_should_wrap_result_in_response_document() {
        let result = Echo {
            id: Some("a&b".to_owned()),
            count: None,
            tags: Some(HashMap::from([
                ("z".to_owned(), "1".to_owned()),
                ("a".to_owned(), "2".to_owned()),
            ])),
        };
        let xml = to_query_response("Test", "urn:test", &result, "req-7").unwrap();
        let text = std::str::from_utf8(&xml).unwrap();

        assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(text.contains("<TestResponse xmlns=\"urn:test\"><TestResult><Id>a&amp;b</Id>"));
        assert!(!text.contains("<Count>"));
        assert!(text.contains(
            "<Tags><entry><key>a</key><value>2</value></entry><entry><key>z</key><value>1</value></entry></Tags>"
        ));
        assert!(text.ends_with(
            "<ResponseMetadata><RequestId>req-7</RequestId></ResponseMetadata></TestResponse>"
        ));
    }

    #[derive(Debug, Default, PartialEq)]
    struct Owner {
        id: Option<String>,
    }

    impl XmlMarshall for Owner {
        fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
            write_optional_text(writer, "Id", self.id.as_deref())
        }
    }

    impl XmlUnmarshall for Owner {
        fn unmarshall(ctx: &mut StaxContext<'_>) -> Result<Option<Self>, XmlError> {
            unmarshall_struct(ctx, |out: &mut Self, ctx, depth| {
                if ctx.test_expression("Id", depth) {
                    out.id = String::unmarshall(ctx)?;
                    return Ok(true);
                }
                Ok(false)
            })
        }
    }

    #[derive(Debug, Default, PartialEq)]
    struct Upload {
        created: Option<DateTime<Utc>>,
        payload: Option<Bytes>,
        owner: Option<Owner>,
    }

    impl XmlMarshall for Upload {
        fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
            write_optional_timestamp(writer, "Created", self.created.as_ref())?;
            write_optional_blob(writer, "Payload", self.payload.as_ref())?;
            write_optional_shape(writer, "Owner", self.owner.as_ref())?;
            Ok(())
        }
    }

    impl XmlUnmarshall for Upload {
        fn unmarshall(ctx: &mut StaxContext<'_>) -> Result<Option<Self>, XmlError> {
            unmarshall_struct(ctx, |out: &mut Self, ctx, depth| {
                if ctx.test_expression("Created", depth) {
                    out.created = DateTime::<Utc>::unmarshall(ctx)?;
                    return Ok(true);
                }
                if ctx.test_expression("Payload", depth) {
                    out.payload = Bytes::unmarshall(ctx)?;
                    return Ok(true);
                }
                if ctx.test_expression("Owner", depth) {
                    out.owner = Owner::unmarshall(ctx)?;
                    return Ok(true);
                }
                Ok(false)
            })
        }
    }

    #[test]
    fn test_should_round_trip_timestamp_blob_and_nested_shape() {
        let result = Upload {
            created: Some(Utc.with_ymd_and_hms(2021, 5, 15, 10, 20, 30).unwrap()),
            payload: Some(Bytes::from_static(b"<p>hi</p>")),
            owner: Some(Owner {
                id: Some("o-1".to_owned()),
            }),
        };
        let xml = to_query_response("Upload", "urn:test", &result, "req-3").unwrap();
        let text = std::str::from_utf8(&xml).unwrap();

        assert!(text.contains("<Created>2021-05-15T10:20:30.000Z</Created>"));
        assert!(text.contains("<Payload>PHA+aGk8L3A+</Payload>"));
        assert!(text.contains("<Owner><Id>o-1</Id></Owner>"));

        let decoded = from_query_response::<Upload>(&xml).unwrap();
        assert_eq!(decoded.result, result);
        assert_eq!(decoded.request_id.as_deref(), Some("req-3"));
    }

    #[test]
    fn test_should_skip_absent_members_and_read_empty_blob_as_none() {
        let xml = to_query_response("Upload", "urn:test", &Upload::default(), "req-4").unwrap();
        let text = std::str::from_utf8(&xml).unwrap();
        assert!(text.contains("<UploadResult></UploadResult>") || text.contains("<UploadResult/>"));

        let decoded = from_query_response::<Upload>(
            b"<UploadResponse><UploadResult><Payload/><Created></Created></UploadResult></UploadResponse>",
        )
        .unwrap();
        assert_eq!(decoded.result, Upload::default());
    }
}
