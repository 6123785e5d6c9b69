//! Shape unmarshallers driven by [`StaxContext`].

use std::collections::HashMap;

use awsmobile_core::{SdkEnum, TimestampFormat, blob};
use bytes::Bytes;
use chrono::{DateTime, Utc};

use crate::context::{StaxContext, XmlEvent};
use crate::error::{REQUEST_ID, XmlError};

/// A value that can be read from the element the context just opened.
///
/// Implementations consume everything up to and including the element's end
/// tag. `None` means the element carried no usable value: for shapes, an
/// element with no child elements.
pub trait XmlUnmarshall: Sized {
    /// Read the value of the element just opened.
    fn unmarshall(ctx: &mut StaxContext<'_>) -> Result<Option<Self>, XmlError>;
}

impl XmlUnmarshall for String {
    fn unmarshall(ctx: &mut StaxContext<'_>) -> Result<Option<Self>, XmlError> {
        ctx.read_text().map(Some)
    }
}

macro_rules! parsed_scalar {
    ($($ty:ty => $kind:literal),+ $(,)?) => {
        $(
            impl XmlUnmarshall for $ty {
                fn unmarshall(ctx: &mut StaxContext<'_>) -> Result<Option<Self>, XmlError> {
                    let text = ctx.read_text()?;
                    let text = text.trim();
                    if text.is_empty() {
                        return Ok(None);
                    }
                    text.parse::<$ty>().map(Some).map_err(|e| {
                        XmlError::ParseError(format!(concat!("invalid ", $kind, " '{}': {}"), text, e))
                    })
                }
            }
        )+
    };
}

parsed_scalar! {
    i32 => "integer",
    i64 => "long",
    f32 => "float",
    f64 => "double",
    bool => "boolean",
}

impl XmlUnmarshall for DateTime<Utc> {
    fn unmarshall(ctx: &mut StaxContext<'_>) -> Result<Option<Self>, XmlError> {
        let text = ctx.read_text()?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        TimestampFormat::Iso8601
            .parse(&text)
            .map(Some)
            .map_err(|e| XmlError::ParseError(e.to_string()))
    }
}

impl XmlUnmarshall for Bytes {
    fn unmarshall(ctx: &mut StaxContext<'_>) -> Result<Option<Self>, XmlError> {
        let text = ctx.read_text()?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        blob::decode(&text)
            .map(Some)
            .map_err(|e| XmlError::ParseError(e.to_string()))
    }
}

/// Read an enum element. Unknown or empty values fail the decode.
pub fn unmarshall_enum<E: SdkEnum>(ctx: &mut StaxContext<'_>) -> Result<Option<E>, XmlError> {
    let text = ctx.read_text()?;
    Ok(Some(E::from_value(&text)?))
}

/// Drive the depth-tracked loop of a structure unmarshaller.
///
/// `visit` is called for every element opened inside the structure with the
/// depth at which the structure's own members live, and returns whether it
/// consumed the element. Members are matched with
/// [`StaxContext::test_expression`] at that depth, so elements deeper in the
/// tree never shadow them.
///
/// At the start of a document the members are looked for two levels deeper,
/// inside the `<XResponse><XResult>` wrappers.
pub fn unmarshall_struct<'a, T, F>(
    ctx: &mut StaxContext<'a>,
    mut visit: F,
) -> Result<Option<T>, XmlError>
where
    T: Default,
    F: FnMut(&mut T, &mut StaxContext<'a>, usize) -> Result<bool, XmlError>,
{
    let original_depth = ctx.current_depth();
    let mut target_depth = original_depth + 1;
    if ctx.is_start_of_document() {
        target_depth += 2;
    }

    let mut shape = T::default();
    let mut is_container = false;

    loop {
        match ctx.next_event()? {
            XmlEvent::EndDocument => break,
            XmlEvent::StartElement(name) => {
                is_container = true;
                let depth = ctx.current_depth();
                if !visit(&mut shape, &mut *ctx, target_depth)? && depth == target_depth {
                    tracing::trace!(element = %name, depth, "skipping unknown element");
                }
            }
            XmlEvent::EndElement(_) => {
                if ctx.current_depth() < original_depth {
                    break;
                }
            }
            XmlEvent::Other => {}
        }
    }

    Ok(is_container.then_some(shape))
}

/// Read one `<member>` of a list and append it, creating the list on first use.
pub fn unmarshall_list_member<T: XmlUnmarshall>(
    list: &mut Option<Vec<T>>,
    ctx: &mut StaxContext<'_>,
) -> Result<(), XmlError> {
    let items = list.get_or_insert_with(Vec::new);
    if let Some(item) = T::unmarshall(ctx)? {
        items.push(item);
    }
    Ok(())
}

/// Reads one map `<entry>` with configurable key and value element names.
#[derive(Debug, Clone, Copy)]
pub struct MapEntryUnmarshaller {
    key_name: &'static str,
    value_name: &'static str,
}

impl MapEntryUnmarshaller {
    /// `<entry><key/><value/></entry>`.
    pub const KEY_VALUE: Self = Self::new("key", "value");

    /// Entry with custom element names, e.g. `Name`/`Value`.
    #[must_use]
    pub const fn new(key_name: &'static str, value_name: &'static str) -> Self {
        Self {
            key_name,
            value_name,
        }
    }

    /// Read the entry just opened. Entries missing a key or value yield `None`.
    pub fn unmarshall<V: XmlUnmarshall>(
        &self,
        ctx: &mut StaxContext<'_>,
    ) -> Result<Option<(String, V)>, XmlError> {
        let original_depth = ctx.current_depth();
        let target_depth = original_depth + 1;
        let mut key = None;
        let mut value = None;

        loop {
            match ctx.next_event()? {
                XmlEvent::EndDocument => break,
                XmlEvent::StartElement(_) => {
                    if ctx.test_expression(self.key_name, target_depth) {
                        key = String::unmarshall(ctx)?;
                    } else if ctx.test_expression(self.value_name, target_depth) {
                        value = V::unmarshall(ctx)?;
                    }
                }
                XmlEvent::EndElement(_) => {
                    if ctx.current_depth() < original_depth {
                        break;
                    }
                }
                XmlEvent::Other => {}
            }
        }

        Ok(key.zip(value))
    }

    /// Read the entry just opened into `map`, creating the map on first use.
    pub fn insert_into<V: XmlUnmarshall>(
        &self,
        map: &mut Option<HashMap<String, V>>,
        ctx: &mut StaxContext<'_>,
    ) -> Result<(), XmlError> {
        let entries = map.get_or_insert_with(HashMap::new);
        if let Some((k, v)) = self.unmarshall(ctx)? {
            entries.insert(k, v);
        }
        Ok(())
    }
}

/// A decoded query response.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryResponse<T> {
    /// The `<XResult>` shape.
    pub result: T,
    /// `ResponseMetadata/RequestId`.
    pub request_id: Option<String>,
}

/// Decode a complete `<XResponse>` document.
pub fn from_query_response<T>(xml: &[u8]) -> Result<QueryResponse<T>, XmlError>
where
    T: XmlUnmarshall + Default,
{
    let mut ctx = StaxContext::new(xml);
    ctx.register_metadata(REQUEST_ID, "ResponseMetadata/RequestId", 2);
    let result = T::unmarshall(&mut ctx)?.unwrap_or_default();
    Ok(QueryResponse {
        result,
        request_id: ctx.metadata(REQUEST_ID).map(str::to_owned),
    })
}
