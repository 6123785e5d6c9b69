//! Blob fields, base64 on the wire.

use ::base64::Engine as _;
use ::base64::engine::general_purpose::STANDARD;
use bytes::Bytes;

use crate::error::UnmarshalError;

/// Encode bytes to standard base64.
#[must_use]
pub fn encode(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode standard base64.
pub fn decode(data: &str) -> Result<Bytes, UnmarshalError> {
    STANDARD
        .decode(data.trim())
        .map(Bytes::from)
        .map_err(|_| UnmarshalError::invalid_value("base64 blob", data))
}

/// Serde adapter for `Option<Bytes>` fields.
pub mod base64 {
    use bytes::Bytes;
    use serde::{Deserialize, Deserializer, Serializer, de};

    /// Serialize.
    pub fn serialize<S: Serializer>(value: &Option<Bytes>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(b) => serializer.serialize_str(&super::encode(b)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Bytes>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|s| super::decode(&s).map_err(de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_encode_and_decode_blob() {
        assert_eq!(encode(b"hello"), "aGVsbG8=");
        assert_eq!(decode("aGVsbG8=").unwrap(), Bytes::from_static(b"hello"));
    }

    #[test]
    fn test_should_reject_invalid_base64() {
        assert!(decode("not base64!").is_err());
    }

    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Doc {
        #[serde(default, with = "super::base64")]
        content: Option<Bytes>,
    }

    #[test]
    fn test_should_serialize_blob_field() {
        let doc = Doc {
            content: Some(Bytes::from_static(b"<p>hi</p>")),
        };
        let json = serde_json::to_string(&doc).unwrap();
        assert_eq!(json, r#"{"content":"PHA+aGk8L3A+"}"#);
        assert_eq!(serde_json::from_str::<Doc>(&json).unwrap(), doc);
    }
}
