//! Shared Cognito Identity Provider shapes and enums.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

awsmobile_core::sdk_enum! {
    /// Whether a device is remembered.
    pub enum DeviceRememberedStatusType {
        Remembered => "remembered",
        NotRemembered => "not_remembered",
    }
}

/// A name/value attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A device tracked for a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeviceType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_key: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsmobile_json::container::list"
    )]
    pub device_attributes: Option<Vec<AttributeType>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "awsmobile_core::timestamp::epoch_seconds"
    )]
    pub device_create_date: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "awsmobile_core::timestamp::epoch_seconds"
    )]
    pub device_last_modified_date: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "awsmobile_core::timestamp::epoch_seconds"
    )]
    pub device_last_authenticated_date: Option<DateTime<Utc>>,
}

impl DeviceType {
    /// Value of the named device attribute.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.device_attributes
            .as_deref()?
            .iter()
            .find(|a| a.name.as_deref() == Some(name))
            .and_then(|a| a.value.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use awsmobile_core::SdkEnum;

    use super::*;

    #[test]
    fn test_should_round_trip_remembered_status() {
        for v in DeviceRememberedStatusType::VALUES {
            assert_eq!(DeviceRememberedStatusType::from_value(v.as_str()).unwrap(), *v);
        }
        assert_eq!(
            DeviceRememberedStatusType::NotRemembered.to_string(),
            "not_remembered"
        );
        assert!(DeviceRememberedStatusType::from_value("REMEMBERED").is_err());
    }

    #[test]
    fn test_should_decode_device_with_epoch_dates() {
        let json = r#"{
            "DeviceKey": "us-east-1_abc",
            "DeviceAttributes": [
                {"Name": "device_name", "Value": "phone"},
                {"Name": "last_ip_used", "Value": "10.0.0.1"}
            ],
            "DeviceCreateDate": 1621074030,
            "DeviceLastModifiedDate": 1621074030.5,
            "Extra": 1
        }"#;
        let device: DeviceType = serde_json::from_str(json).unwrap();
        assert_eq!(device.device_key.as_deref(), Some("us-east-1_abc"));
        assert_eq!(device.attribute("device_name"), Some("phone"));
        assert_eq!(device.attribute("missing"), None);
        assert_eq!(device.device_create_date.unwrap().timestamp(), 1_621_074_030);
        assert_eq!(
            device.device_last_modified_date.unwrap().timestamp_millis(),
            1_621_074_030_500
        );
        assert!(device.device_last_authenticated_date.is_none());
    }

    #[test]
    fn test_should_round_trip_device() {
        let device = DeviceType {
            device_key: Some("k".to_owned()),
            device_attributes: Some(vec![AttributeType {
                name: Some("n".to_owned()),
                value: Some("v".to_owned()),
            }]),
            device_create_date: DateTime::from_timestamp_millis(1_621_074_030_123),
            ..DeviceType::default()
        };
        let json = serde_json::to_string(&device).unwrap();
        assert!(json.contains(r#""DeviceCreateDate":1621074030.123"#));
        let back: DeviceType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, device);
    }
}
