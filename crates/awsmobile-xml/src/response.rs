//! Response dispatch for query services.

use awsmobile_core::{ErrorCode, SdkError, ServiceError, UnmarshalError};
use bytes::Bytes;

use crate::error::parse_error_document;
use crate::unmarshall::{XmlUnmarshall, from_query_response};

/// Decode a query service response: 2xx into `T`, anything else into a typed
/// service error.
pub fn parse_response<T, C>(
    response: &http::Response<Bytes>,
) -> Result<T, SdkError<ServiceError<C>>>
where
    T: XmlUnmarshall + Default,
    C: ErrorCode,
{
    let status = response.status();

    if status.is_success() {
        let decoded = from_query_response::<T>(response.body()).map_err(UnmarshalError::from)?;
        tracing::debug!(
            status = status.as_u16(),
            request_id = decoded.request_id.as_deref().unwrap_or_default(),
            "unmarshalled XML response"
        );
        return Ok(decoded.result);
    }

    let meta = parse_error_document(status, response.body());
    Err(SdkError::Service(ServiceError::from_metadata(meta)))
}
