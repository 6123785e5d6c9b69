//! Lenient decoding of nested shapes, lists and maps.
//!
//! Use with `#[serde(default, deserialize_with = "awsmobile_json::container::shape")]`.
//! When the wire value is not the expected container (`null`, a string, a
//! number, ...) it is skipped and the field decodes to `None`. Errors inside a
//! well-formed container, such as an unknown enum value, still fail the decode.

use std::collections::HashMap;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A nested shape: must be a JSON object.
pub fn shape<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    decode_if(deserializer, Value::is_object)
}

/// A list: must be a JSON array.
pub fn list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    decode_if(deserializer, Value::is_array)
}

/// A map of string keys: must be a JSON object.
pub fn map<'de, D, T>(deserializer: D) -> Result<Option<HashMap<String, T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    decode_if(deserializer, Value::is_object)
}

fn decode_if<'de, D, T>(deserializer: D, is_container: fn(&Value) -> bool) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if !is_container(&value) {
        if !value.is_null() {
            tracing::trace!(value = %value, "skipping non-container value");
        }
        return Ok(None);
    }
    serde_json::from_value(value).map(Some).map_err(D::Error::custom)
}
