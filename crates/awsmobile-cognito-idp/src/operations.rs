//! Cognito Identity Provider operations.

use std::fmt;

use crate::error::CognitoIdpError;
use crate::input::{GetDeviceInput, ListDevicesInput, UpdateDeviceStatusInput};
use crate::output::{GetDeviceOutput, ListDevicesOutput, UpdateDeviceStatusOutput};

/// All supported Cognito Identity Provider operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CognitoIdpOperation {
    /// Get a remembered device.
    GetDevice,
    /// List the devices of the signed-in user.
    ListDevices,
    /// Change the remembered status of a device.
    UpdateDeviceStatus,
}

impl CognitoIdpOperation {
    /// Every operation, in declaration order.
    pub const ALL: &'static [Self] = &[Self::GetDevice, Self::ListDevices, Self::UpdateDeviceStatus];

    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetDevice => "GetDevice",
            Self::ListDevices => "ListDevices",
            Self::UpdateDeviceStatus => "UpdateDeviceStatus",
        }
    }

    /// Parse an operation name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "GetDevice" => Some(Self::GetDevice),
            "ListDevices" => Some(Self::ListDevices),
            "UpdateDeviceStatus" => Some(Self::UpdateDeviceStatus),
            _ => None,
        }
    }
}

impl fmt::Display for CognitoIdpOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

awsmobile_core::operation! {
    GetDevice {
        service: &crate::METADATA,
        input: GetDeviceInput,
        output: GetDeviceOutput,
        error: CognitoIdpError,
        parse: awsmobile_json::parse_response,
    }
}

awsmobile_core::operation! {
    ListDevices {
        service: &crate::METADATA,
        input: ListDevicesInput,
        output: ListDevicesOutput,
        error: CognitoIdpError,
        parse: awsmobile_json::parse_response,
    }
}

awsmobile_core::operation! {
    UpdateDeviceStatus {
        service: &crate::METADATA,
        input: UpdateDeviceStatusInput,
        output: UpdateDeviceStatusOutput,
        error: CognitoIdpError,
        parse: awsmobile_json::parse_response,
    }
}
