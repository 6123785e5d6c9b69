//! Cognito Identity Provider result shapes.

use serde::{Deserialize, Serialize};

use crate::types::DeviceType;

/// Result of `GetDevice`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetDeviceOutput {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsmobile_json::container::shape"
    )]
    pub device: Option<DeviceType>,
}

/// Result of `ListDevices`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDevicesOutput {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsmobile_json::container::list"
    )]
    pub devices: Option<Vec<DeviceType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination_token: Option<String>,
}

/// Result of `UpdateDeviceStatus`. Carries no members.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateDeviceStatusOutput {}
