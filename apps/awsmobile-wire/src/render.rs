//! Marshal an input document and format the resulting HTTP request.

use anyhow::{Context, Result};
use awsmobile_core::{ClientConfig, Operation};
use bytes::Bytes;
use serde::de::DeserializeOwned;

/// Decode `input` as the JSON form of `O::Input`, marshal it and format the
/// request `O` would send.
pub fn render<O>(input: &str, config: &ClientConfig) -> Result<String>
where
    O: Operation,
    O::Input: DeserializeOwned,
{
    let input: O::Input = serde_json::from_str(input)
        .with_context(|| format!("invalid input document for {}", O::NAME))?;
    let request = O::build_request(&input, config)
        .with_context(|| format!("failed to marshal {}", O::NAME))?;

    tracing::debug!(
        service = O::SERVICE.service_name,
        operation = O::NAME,
        uri = %request.uri(),
        "built request"
    );

    Ok(format_request(&request))
}

/// Format a request the way it would appear on the wire: request line,
/// headers, then the body after a blank line.
pub fn format_request(request: &http::Request<Bytes>) -> String {
    let mut out = format!("{} {}\n", request.method(), request.uri());
    for (name, value) in request.headers() {
        let value = value.to_str().unwrap_or("<non-ascii>");
        out.push_str(&format!("{name}: {value}\n"));
    }
    let body = request.body();
    if !body.is_empty() {
        out.push('\n');
        out.push_str(&String::from_utf8_lossy(body));
        out.push('\n');
    }
    out
}
