//! Closed string enums.
//!
//! Every enum shape in a service model is a fixed table of wire strings. The
//! [`sdk_enum!`](crate::sdk_enum) macro turns such a table into a Rust enum
//! whose decoding is strict: an unknown, empty or missing value is an error,
//! never a silent fallback.

use std::fmt;

/// A wire string that does not name a constant of the target enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidEnumValue {
    /// Name of the enum type being decoded.
    pub type_name: &'static str,
    /// The rejected value. Empty when the input was missing or empty.
    pub value: String,
}

impl InvalidEnumValue {
    /// Error for a missing or empty value.
    #[must_use]
    pub fn empty(type_name: &'static str) -> Self {
        Self {
            type_name,
            value: String::new(),
        }
    }

    /// Error for a value outside the enum's table.
    #[must_use]
    pub fn unknown(type_name: &'static str, value: impl Into<String>) -> Self {
        Self {
            type_name,
            value: value.into(),
        }
    }
}

impl fmt::Display for InvalidEnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            write!(f, "{} value cannot be null or empty", self.type_name)
        } else {
            write!(f, "cannot create {} from {:?}", self.type_name, self.value)
        }
    }
}

impl std::error::Error for InvalidEnumValue {}

/// A closed set of wire strings.
///
/// Implemented by [`sdk_enum!`](crate::sdk_enum); the implementation is a
/// static `match`, so lookups never allocate and no table is built at runtime.
pub trait SdkEnum: Sized + Copy + fmt::Debug + Send + Sync + 'static {
    /// Rust name of the enum, used in error messages.
    const TYPE_NAME: &'static str;

    /// Every constant, in declaration order.
    const VALUES: &'static [Self];

    /// Returns the exact wire string of this constant.
    fn as_str(&self) -> &'static str;

    /// Case-sensitive table lookup.
    fn lookup(value: &str) -> Option<Self>;

    /// Decode a wire string.
    fn from_value(value: &str) -> Result<Self, InvalidEnumValue> {
        if value.is_empty() {
            return Err(InvalidEnumValue::empty(Self::TYPE_NAME));
        }
        Self::lookup(value).ok_or_else(|| InvalidEnumValue::unknown(Self::TYPE_NAME, value))
    }

    /// Decode a possibly missing wire string. `None` is an error.
    fn from_optional(value: Option<&str>) -> Result<Self, InvalidEnumValue> {
        value.map_or_else(
            || Err(InvalidEnumValue::empty(Self::TYPE_NAME)),
            Self::from_value,
        )
    }
}

/// Declare a closed wire enum.
///
/// ```
/// awsmobile_core::sdk_enum! {
///     /// Message persistence.
///     pub enum Persistence {
///         Persistent => "PERSISTENT",
///         NonPersistent => "NON_PERSISTENT",
///     }
/// }
///
/// use awsmobile_core::SdkEnum;
///
/// assert_eq!(Persistence::from_value("PERSISTENT").unwrap(), Persistence::Persistent);
/// assert_eq!(Persistence::NonPersistent.to_string(), "NON_PERSISTENT");
/// assert!(Persistence::from_value("persistent").is_err());
/// ```
#[macro_export]
macro_rules! sdk_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Returns the wire string of this constant.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }

            /// Decode a wire string, rejecting empty and unknown values.
            pub fn from_value(value: &str) -> ::std::result::Result<Self, $crate::InvalidEnumValue> {
                <Self as $crate::SdkEnum>::from_value(value)
            }
        }

        impl $crate::SdkEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const VALUES: &'static [Self] = &[ $( Self::$variant, )+ ];

            fn as_str(&self) -> &'static str {
                $name::as_str(self)
            }

            fn lookup(value: &str) -> ::std::option::Option<Self> {
                match value {
                    $( $wire => ::std::option::Option::Some(Self::$variant), )+
                    _ => ::std::option::Option::None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::InvalidEnumValue;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::SdkEnum>::from_value(s)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let value = <::std::string::String as $crate::__private::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                <Self as $crate::SdkEnum>::from_value(&value)
                    .map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::sdk_enum! {
        /// Test enum.
        pub enum Brevity {
            On => "ON",
            Off => "OFF",
            ZhTw => "zh-TW",
        }
    }

    #[test]
    fn test_should_round_trip_every_constant() {
        for value in Brevity::VALUES {
            assert_eq!(Brevity::from_value(value.as_str()).unwrap(), *value);
            assert_eq!(value.to_string(), value.as_str());
        }
    }

    #[test]
    fn test_should_round_trip_every_wire_string() {
        for wire in ["ON", "OFF", "zh-TW"] {
            assert_eq!(Brevity::from_value(wire).unwrap().as_str(), wire);
        }
    }

    #[test]
    fn test_should_reject_missing_and_empty_values() {
        let err = Brevity::from_optional(None).unwrap_err();
        assert_eq!(err, InvalidEnumValue::empty("Brevity"));
        assert!(err.to_string().contains("cannot be null or empty"));

        assert!(Brevity::from_value("").is_err());
    }

    #[test]
    fn test_should_reject_unknown_and_differently_cased_values() {
        let err = Brevity::from_value("not-a-real-value").unwrap_err();
        assert_eq!(err.value, "not-a-real-value");
        assert!(Brevity::from_value("on").is_err());
        assert!(Brevity::from_value("O").is_err());
        assert!(Brevity::from_value("zh-tw").is_err());
    }

    #[test]
    fn test_should_parse_with_from_str() {
        let parsed: Brevity = "OFF".parse().unwrap();
        assert_eq!(parsed, Brevity::Off);
        assert!("nope".parse::<Brevity>().is_err());
    }

    #[test]
    fn test_should_serialize_as_wire_string() {
        assert_eq!(serde_json::to_string(&Brevity::ZhTw).unwrap(), "\"zh-TW\"");
        assert_eq!(
            serde_json::from_str::<Brevity>("\"ON\"").unwrap(),
            Brevity::On
        );
    }

    #[test]
    fn test_should_fail_deserializing_unknown_value() {
        let err = serde_json::from_str::<Brevity>("\"MAYBE\"").unwrap_err();
        assert!(err.to_string().contains("MAYBE"));
    }
}
