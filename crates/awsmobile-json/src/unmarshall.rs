//! Response bodies.

use awsmobile_core::UnmarshalError;
use serde::de::DeserializeOwned;

/// Decode a JSON response body into an output shape.
///
/// An empty body yields the default (all `None`) shape. Unknown members are
/// ignored.
pub fn from_body<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, UnmarshalError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    Ok(serde_json::from_slice(body)?)
}
