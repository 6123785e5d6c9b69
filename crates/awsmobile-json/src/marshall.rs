//! Request bodies.

use awsmobile_core::{MarshalError, MarshalledRequest, ServiceMetadata, UriTemplate};
use bytes::Bytes;
use serde::Serialize;

/// Header carrying `{TargetPrefix}.{Operation}` for JSON-RPC services.
const TARGET_HEADER: &str = "X-Amz-Target";

/// Serialize a shape to a JSON body. Unset fields are omitted.
pub fn to_body<T: Serialize>(shape: &T) -> Result<Bytes, MarshalError> {
    serde_json::to_vec(shape)
        .map(Bytes::from)
        .map_err(|e| MarshalError::serialization("JSON", e))
}

/// Build a JSON-RPC request: `POST /` with `X-Amz-Target` and a body that is
/// always present (`{}` when no field is set).
pub fn rpc_request<T: Serialize>(
    service: &ServiceMetadata,
    operation: &'static str,
    input: &T,
) -> Result<MarshalledRequest, MarshalError> {
    let target = service
        .target_prefix
        .map(|prefix| format!("{prefix}.{operation}"));
    let body = to_body(input)?;

    MarshalledRequest::new(
        operation,
        http::Method::POST,
        UriTemplate::new("/").resolve(&[]),
    )
    .with_header(TARGET_HEADER, target.as_deref())?
    .with_body(service.protocol.content_type(), body)
}

/// Attach the JSON body of a REST request whose path, headers and query
/// string are already bound.
pub fn with_json_body<T: Serialize>(
    request: MarshalledRequest,
    service: &ServiceMetadata,
    input: &T,
) -> Result<MarshalledRequest, MarshalError> {
    let body = to_body(input)?;
    request.with_body(service.protocol.content_type(), body)
}
