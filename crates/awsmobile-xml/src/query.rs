//! Query-protocol request parameters.

use std::collections::HashMap;

use awsmobile_core::{MarshalError, MarshalledRequest, ServiceMetadata, TimestampFormat, UriTemplate, blob};
use bytes::Bytes;
use chrono::{DateTime, Utc};

/// A value that can be flattened into query parameters under a key prefix.
///
/// Scalars write a single `prefix=value` pair; shapes write one pair per set
/// member as `prefix.Member`.
pub trait QueryMarshall {
    /// Write this value under `prefix`.
    fn write_query(&self, writer: &mut QueryWriter, prefix: &str);
}

impl QueryMarshall for String {
    fn write_query(&self, writer: &mut QueryWriter, prefix: &str) {
        writer.push(prefix, self.clone());
    }
}

impl QueryMarshall for str {
    fn write_query(&self, writer: &mut QueryWriter, prefix: &str) {
        writer.push(prefix, self.to_owned());
    }
}

macro_rules! display_scalar {
    ($($ty:ty),+) => {
        $(
            impl QueryMarshall for $ty {
                fn write_query(&self, writer: &mut QueryWriter, prefix: &str) {
                    writer.push(prefix, self.to_string());
                }
            }
        )+
    };
}

display_scalar!(bool, i32, i64, f32, f64);

impl QueryMarshall for DateTime<Utc> {
    fn write_query(&self, writer: &mut QueryWriter, prefix: &str) {
        writer.push(prefix, TimestampFormat::Iso8601.format(self));
    }
}

impl QueryMarshall for Bytes {
    fn write_query(&self, writer: &mut QueryWriter, prefix: &str) {
        writer.push(prefix, blob::encode(self));
    }
}

/// Accumulates flattened `name=value` parameters in write order.
#[derive(Debug, Default)]
pub struct QueryWriter {
    params: Vec<(String, String)>,
}

impl QueryWriter {
    /// Start a request body with `Action` and `Version`.
    #[must_use]
    pub fn new(action: &str, version: &str) -> Self {
        Self {
            params: vec![
                ("Action".to_owned(), action.to_owned()),
                ("Version".to_owned(), version.to_owned()),
            ],
        }
    }

    /// Write a raw parameter.
    pub fn push(&mut self, name: &str, value: String) {
        self.params.push((name.to_owned(), value));
    }

    /// Write member `name` of the shape at `prefix`, if set.
    pub fn field<T: QueryMarshall + ?Sized>(&mut self, prefix: &str, name: &str, value: Option<&T>) {
        if let Some(value) = value {
            value.write_query(self, &member_key(prefix, name));
        }
    }

    /// Write a list as `name.member.1`, `name.member.2`, ... An empty list is
    /// written as `name=` so the service sees it was set.
    pub fn list<T: QueryMarshall>(&mut self, prefix: &str, name: &str, value: Option<&[T]>) {
        let Some(items) = value else {
            return;
        };
        let key = member_key(prefix, name);
        if items.is_empty() {
            self.push(&key, String::new());
            return;
        }
        for (i, item) in items.iter().enumerate() {
            item.write_query(self, &format!("{key}.member.{}", i + 1));
        }
    }

    /// Write a map as `name.entry.N.{key_name,value_name}`. Entries are
    /// written in key order.
    pub fn map<V: QueryMarshall>(
        &mut self,
        prefix: &str,
        name: &str,
        value: Option<&HashMap<String, V>>,
        key_name: &str,
        value_name: &str,
    ) {
        let Some(map) = value else {
            return;
        };
        let key = member_key(prefix, name);
        let mut entries: Vec<_> = map.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        for (i, (k, v)) in entries.into_iter().enumerate() {
            let entry = format!("{key}.entry.{}", i + 1);
            self.push(&format!("{entry}.{key_name}"), k.clone());
            v.write_query(self, &format!("{entry}.{value_name}"));
        }
    }

    /// Written parameters.
    #[must_use]
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Form-encode the parameters.
    #[must_use]
    pub fn into_body(self) -> Bytes {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (k, v) in &self.params {
            serializer.append_pair(k, v);
        }
        Bytes::from(serializer.finish())
    }
}

fn member_key(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_owned()
    } else {
        format!("{prefix}.{name}")
    }
}

/// Build a query-protocol request: `POST /` with a form-encoded body.
pub fn query_request<T: QueryMarshall>(
    service: &ServiceMetadata,
    operation: &'static str,
    input: &T,
) -> Result<MarshalledRequest, MarshalError> {
    let mut writer = QueryWriter::new(operation, service.api_version);
    input.write_query(&mut writer, "");

    MarshalledRequest::new(
        operation,
        http::Method::POST,
        UriTemplate::new("/").resolve(&[]),
    )
    .with_body(service.protocol.content_type(), writer.into_body())
}
