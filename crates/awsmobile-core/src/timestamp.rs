//! Timestamp wire formats.
//!
//! The format of a timestamp is a property of the field, never inferred from
//! the value. Shapes pick one of the serde modules below with
//! `#[serde(default, with = "awsmobile_core::timestamp::epoch_seconds")]`.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::UnmarshalError;

/// Wire format of a timestamp field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimestampFormat {
    /// `2021-05-15T10:20:30.000Z`
    Iso8601,
    /// Seconds since the Unix epoch, with millisecond precision.
    EpochSeconds,
    /// HTTP date, `Sat, 15 May 2021 10:20:30 GMT`.
    Rfc822,
}

impl TimestampFormat {
    /// Render a timestamp.
    #[must_use]
    pub fn format(self, value: &DateTime<Utc>) -> String {
        match self {
            Self::Iso8601 => value.to_rfc3339_opts(SecondsFormat::Millis, true),
            Self::EpochSeconds => {
                let millis = value.timestamp_millis();
                if millis % 1000 == 0 {
                    (millis / 1000).to_string()
                } else {
                    let sign = if millis < 0 { "-" } else { "" };
                    let abs = millis.unsigned_abs();
                    format!("{sign}{}.{:03}", abs / 1000, abs % 1000)
                }
            }
            Self::Rfc822 => value.format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
        }
    }

    /// Parse a timestamp rendered in this format.
    pub fn parse(self, value: &str) -> Result<DateTime<Utc>, UnmarshalError> {
        let value = value.trim();
        let parsed = match self {
            Self::Iso8601 => DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|t| t.with_timezone(&Utc)),
            Self::EpochSeconds => value.parse::<f64>().ok().and_then(from_epoch_seconds),
            Self::Rfc822 => DateTime::parse_from_rfc2822(value)
                .ok()
                .map(|t| t.with_timezone(&Utc)),
        };
        parsed.ok_or_else(|| UnmarshalError::invalid_value(self.kind(), value))
    }

    fn kind(self) -> &'static str {
        match self {
            Self::Iso8601 => "ISO-8601 timestamp",
            Self::EpochSeconds => "epoch-seconds timestamp",
            Self::Rfc822 => "RFC-822 timestamp",
        }
    }
}

/// Seconds since the epoch as a float, millisecond precision.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn to_epoch_seconds(value: &DateTime<Utc>) -> f64 {
    value.timestamp_millis() as f64 / 1000.0
}

/// Timestamp from float seconds since the epoch, rounded to milliseconds.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn from_epoch_seconds(value: f64) -> Option<DateTime<Utc>> {
    if !value.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis((value * 1000.0).round() as i64)
}

/// `Option<DateTime<Utc>>` as a JSON number of epoch seconds.
///
/// Whole seconds are written as integers, otherwise as a float with
/// millisecond precision. Numbers and numeric strings are accepted on read.
pub mod epoch_seconds {
    use std::fmt;

    use chrono::{DateTime, Utc};
    use serde::{Deserializer, Serializer, de};

    use super::{TimestampFormat, from_epoch_seconds, to_epoch_seconds};

    /// Serialize.
    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(t) if t.timestamp_subsec_millis() == 0 => serializer.serialize_i64(t.timestamp()),
            Some(t) => serializer.serialize_f64(to_epoch_seconds(t)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        deserializer.deserialize_option(EpochVisitor)
    }

    struct EpochVisitor;

    impl<'de> de::Visitor<'de> for EpochVisitor {
        type Value = Option<DateTime<Utc>>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("seconds since the epoch")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
            d.deserialize_any(self)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            DateTime::from_timestamp(v, 0)
                .map(Some)
                .ok_or_else(|| E::custom(format!("timestamp out of range: {v}")))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            let v = i64::try_from(v).map_err(E::custom)?;
            self.visit_i64(v)
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            from_epoch_seconds(v)
                .map(Some)
                .ok_or_else(|| E::custom(format!("timestamp out of range: {v}")))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            TimestampFormat::EpochSeconds
                .parse(v)
                .map(Some)
                .map_err(E::custom)
        }
    }
}

macro_rules! string_timestamp_module {
    ($(#[$meta:meta])* $module:ident, $format:expr) => {
        $(#[$meta])*
        pub mod $module {
            use chrono::{DateTime, Utc};
            use serde::{Deserialize, Deserializer, Serializer, de};

            use super::TimestampFormat;

            /// Serialize.
            pub fn serialize<S: Serializer>(
                value: &Option<DateTime<Utc>>,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                match value {
                    Some(t) => serializer.serialize_str(&$format.format(t)),
                    None => serializer.serialize_none(),
                }
            }

            /// Deserialize.
            pub fn deserialize<'de, D: Deserializer<'de>>(
                deserializer: D,
            ) -> Result<Option<DateTime<Utc>>, D::Error> {
                Option::<String>::deserialize(deserializer)?
                    .map(|s| $format.parse(&s).map_err(de::Error::custom))
                    .transpose()
            }
        }
    };
}

string_timestamp_module!(
    /// `Option<DateTime<Utc>>` as an ISO-8601 string.
    iso8601,
    TimestampFormat::Iso8601
);

string_timestamp_module!(
    /// `Option<DateTime<Utc>>` as an RFC-822 HTTP date string.
    rfc822,
    TimestampFormat::Rfc822
);
