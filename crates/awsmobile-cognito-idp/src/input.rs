//! Cognito Identity Provider request shapes.

use awsmobile_core::SensitiveString;
use serde::{Deserialize, Serialize};

use crate::types::DeviceRememberedStatusType;

/// Input for `GetDevice`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetDeviceInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<SensitiveString>,
}

awsmobile_core::with_setters!(GetDeviceInput {
    with_device_key: device_key: String,
    with_access_token: access_token: SensitiveString,
});

/// Input for `ListDevices`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDevicesInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<SensitiveString>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    /// Token from a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination_token: Option<String>,
}

awsmobile_core::with_setters!(ListDevicesInput {
    with_access_token: access_token: SensitiveString,
    with_limit: limit: i32,
    with_pagination_token: pagination_token: String,
});

/// Input for `UpdateDeviceStatus`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateDeviceStatusInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<SensitiveString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_remembered_status: Option<DeviceRememberedStatusType>,
}

awsmobile_core::with_setters!(UpdateDeviceStatusInput {
    with_access_token: access_token: SensitiveString,
    with_device_key: device_key: String,
    with_device_remembered_status: device_remembered_status: DeviceRememberedStatusType,
});
