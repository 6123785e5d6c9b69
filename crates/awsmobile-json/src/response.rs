//! Response dispatch for JSON services.

use awsmobile_core::{ErrorCode, SdkError, ServiceError, UnmarshalError};
use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::error::parse_error_metadata;
use crate::unmarshall::from_body;

/// Checksum header some JSON services attach to every response.
const CRC32_HEADER: &str = "x-amz-crc32";

/// Check the body against its `x-amz-crc32` header, when present.
pub fn verify_crc32(response: &http::Response<Bytes>) -> Result<(), UnmarshalError> {
    let Some(expected) = response
        .headers()
        .get(CRC32_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u32>().ok())
    else {
        return Ok(());
    };
    let actual = crc32fast::hash(response.body());
    if actual == expected {
        Ok(())
    } else {
        Err(UnmarshalError::ChecksumMismatch { expected, actual })
    }
}

/// Decode a JSON service response: 2xx into `T`, anything else into a typed
/// service error.
pub fn parse_response<T, C>(
    response: &http::Response<Bytes>,
) -> Result<T, SdkError<ServiceError<C>>>
where
    T: DeserializeOwned + Default,
    C: ErrorCode,
{
    verify_crc32(response)?;
    let status = response.status();

    if status.is_success() {
        let output = from_body(response.body())?;
        tracing::debug!(
            status = status.as_u16(),
            body_len = response.body().len(),
            "unmarshalled JSON response"
        );
        return Ok(output);
    }

    let meta = parse_error_metadata(status, response.headers(), response.body());
    Err(SdkError::Service(ServiceError::from_metadata(meta)))
}
