//! URI templates with `{label}` placeholders.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped in a path label: everything but RFC 3986 unreserved.
const LABEL: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Greedy labels (`{key+}`) keep their slashes.
const GREEDY_LABEL: &AsciiSet = &LABEL.remove(b'/');

/// Percent-encode a single path label.
#[must_use]
pub fn encode_label(value: &str) -> String {
    utf8_percent_encode(value, LABEL).to_string()
}

/// Percent-encode a query-string key or value.
#[must_use]
pub fn encode_query_component(value: &str) -> String {
    utf8_percent_encode(value, LABEL).to_string()
}

/// A resource path after placeholder substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// Path with raw label values.
    pub literal: String,
    /// Path with percent-encoded label values.
    pub encoded: String,
}

/// A request URI template such as `/channels/{channelArn}/messages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UriTemplate(&'static str);

impl UriTemplate {
    /// Wrap a template string.
    #[must_use]
    pub const fn new(template: &'static str) -> Self {
        Self(template)
    }

    /// The template as written.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Substitute labels. Labels missing from `values`, or bound to `None`,
    /// become empty strings.
    #[must_use]
    pub fn resolve(&self, values: &[(&str, Option<&str>)]) -> ResolvedPath {
        let mut literal = String::with_capacity(self.0.len());
        let mut encoded = String::with_capacity(self.0.len());
        let mut rest = self.0;

        while let Some(start) = rest.find('{') {
            let (head, tail) = rest.split_at(start);
            literal.push_str(head);
            encoded.push_str(head);

            let Some(end) = tail.find('}') else {
                literal.push_str(tail);
                encoded.push_str(tail);
                rest = "";
                break;
            };
            let label = &tail[1..end];
            let (name, greedy) = match label.strip_suffix('+') {
                Some(name) => (name, true),
                None => (label, false),
            };
            let value = values
                .iter()
                .find(|(n, _)| *n == name)
                .and_then(|(_, v)| *v)
                .unwrap_or_default();

            literal.push_str(value);
            let set = if greedy { GREEDY_LABEL } else { LABEL };
            encoded.extend(utf8_percent_encode(value, set));
            rest = &tail[end + 1..];
        }
        literal.push_str(rest);
        encoded.push_str(rest);

        ResolvedPath { literal, encoded }
    }
}
