//! XML error types and query-protocol error documents.

use std::io;

use awsmobile_core::{ErrorMetadata, InvalidEnumValue, UnmarshalError};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};

use crate::context::StaxContext;
use crate::unmarshall::{XmlUnmarshall, unmarshall_struct};

/// Errors that can occur while reading or writing XML.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// An I/O error during XML writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An error from the underlying quick-xml library.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// An unexpected XML element was encountered.
    #[error("unexpected XML element: {0}")]
    UnexpectedElement(String),

    /// An error parsing a value from XML text content.
    #[error("failed to parse value: {0}")]
    ParseError(String),

    /// An enum element carried a value outside its table.
    #[error(transparent)]
    InvalidEnum(#[from] InvalidEnumValue),
}

impl From<XmlError> for UnmarshalError {
    fn from(err: XmlError) -> Self {
        match err {
            XmlError::InvalidEnum(e) => Self::InvalidEnum(e),
            other => Self::Xml(Box::new(other)),
        }
    }
}

/// Request id metadata key.
pub(crate) const REQUEST_ID: &str = "RequestId";

#[derive(Debug, Default)]
struct ErrorDocument {
    code: Option<String>,
    message: Option<String>,
}

impl XmlUnmarshall for ErrorDocument {
    fn unmarshall(ctx: &mut StaxContext<'_>) -> Result<Option<Self>, XmlError> {
        unmarshall_struct(ctx, |doc: &mut Self, ctx, depth| {
            if ctx.test_expression("Code", depth) {
                doc.code = String::unmarshall(ctx)?;
                return Ok(true);
            }
            if ctx.test_expression("Message", depth) {
                doc.message = String::unmarshall(ctx)?;
                return Ok(true);
            }
            Ok(false)
        })
    }
}

/// Parse a query-protocol error document.
///
/// ```xml
/// <ErrorResponse>
///   <Error>
///     <Type>Sender</Type>
///     <Code>NotFound</Code>
///     <Message>Topic does not exist</Message>
///   </Error>
///   <RequestId>42d59b56-7407-4c4a-be0f-4c88daeea257</RequestId>
/// </ErrorResponse>
/// ```
///
/// A body that is not XML still yields metadata carrying the status.
#[must_use]
pub fn parse_error_document(status: http::StatusCode, body: &[u8]) -> ErrorMetadata {
    let mut ctx = StaxContext::new(body);
    ctx.register_metadata(REQUEST_ID, "RequestId", 2);

    let doc = match ErrorDocument::unmarshall(&mut ctx) {
        Ok(doc) => doc.unwrap_or_default(),
        Err(e) => {
            tracing::debug!(error = %e, "unreadable XML error document");
            ErrorDocument::default()
        }
    };

    ErrorMetadata {
        code: doc.code.map(|c| c.trim().to_owned()).filter(|c| !c.is_empty()),
        message: doc.message,
        request_id: ctx.metadata(REQUEST_ID).map(str::to_owned),
        status_code: status,
    }
}

/// Format a query-protocol error document.
pub fn error_to_xml(code: &str, message: &str, request_id: &str) -> Vec<u8> {
    let mut buf = Vec::with_capacity(256);
    if let Err(e) = write_error_xml(&mut buf, code, message, request_id) {
        tracing::error!(error = %e, "failed to serialize XML error document");
        buf.clear();
    }
    buf
}

fn write_error_xml(
    buf: &mut Vec<u8>,
    code: &str,
    message: &str,
    request_id: &str,
) -> io::Result<()> {
    let mut writer = Writer::new(buf);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    writer.create_element("ErrorResponse").write_inner_content(|w| {
        w.create_element("Error").write_inner_content(|w| {
            w.create_element("Type")
                .write_text_content(BytesText::new("Sender"))?;
            w.create_element("Code")
                .write_text_content(BytesText::new(code))?;
            w.create_element("Message")
                .write_text_content(BytesText::new(message))?;
            Ok(())
        })?;
        w.create_element("RequestId")
            .write_text_content(BytesText::new(request_id))?;
        Ok(())
    })?;

    Ok(())
}
