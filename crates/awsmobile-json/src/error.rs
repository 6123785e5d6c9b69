//! JSON error documents.

use awsmobile_core::ErrorMetadata;
use serde_json::Value;

/// Reduce a wire error code to its short name.
///
/// `aws.protocoltests.restjson#FooError:http://internal.amazon.com/` becomes
/// `FooError`.
#[must_use]
pub fn sanitize_error_code(raw: &str) -> &str {
    let code = raw.split(':').next().unwrap_or(raw);
    code.rsplit('#').next().unwrap_or(code).trim()
}

/// Parse the metadata of a JSON error response.
///
/// The code comes from the `x-amzn-ErrorType` header, then `__type`, then
/// `code`/`Code` in the body. A body that is not JSON still yields metadata
/// with the HTTP status.
#[must_use]
pub fn parse_error_metadata(
    status: http::StatusCode,
    headers: &http::HeaderMap,
    body: &[u8],
) -> ErrorMetadata {
    let doc: Option<Value> = serde_json::from_slice(body).ok();
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    };

    let code = header("x-amzn-errortype")
        .or_else(|| string_field(doc.as_ref(), &["__type", "code", "Code"]))
        .map(|raw| sanitize_error_code(&raw).to_owned())
        .filter(|code| !code.is_empty());

    ErrorMetadata {
        code,
        message: string_field(doc.as_ref(), &["message", "Message", "errorMessage"]),
        request_id: header("x-amzn-requestid").or_else(|| header("x-amz-request-id")),
        status_code: status,
    }
}

fn string_field(doc: Option<&Value>, names: &[&str]) -> Option<String> {
    let doc = doc?;
    names
        .iter()
        .find_map(|name| doc.get(*name).and_then(Value::as_str))
        .map(str::to_owned)
}
