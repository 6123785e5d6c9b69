//! `awsJson1_1` request marshallers.

use awsmobile_core::{Marshall, MarshalError, MarshalledRequest};

use crate::METADATA;
use crate::input::{GetDeviceInput, ListDevicesInput, UpdateDeviceStatusInput};

macro_rules! json_rpc {
    ($($input:ty => $operation:literal),+ $(,)?) => {
        $(
            impl Marshall for $input {
                const OPERATION: &'static str = $operation;

                fn marshall(&self) -> Result<MarshalledRequest, MarshalError> {
                    awsmobile_json::rpc_request(&METADATA, Self::OPERATION, self)
                }
            }
        )+
    };
}

json_rpc! {
    GetDeviceInput => "GetDevice",
    ListDevicesInput => "ListDevices",
    UpdateDeviceStatusInput => "UpdateDeviceStatus",
}

#[cfg(test)]
mod tests {
    use awsmobile_core::marshall_request;

    use super::*;
    use crate::types::DeviceRememberedStatusType;

    #[test]
    fn test_should_marshall_update_device_status() {
        let input = UpdateDeviceStatusInput::default()
            .with_access_token("tok")
            .with_device_key("dev-1")
            .with_device_remembered_status(DeviceRememberedStatusType::NotRemembered);
        let req = marshall_request(Some(&input)).unwrap();

        assert_eq!(req.method, http::Method::POST);
        assert_eq!(req.resource_path, "/");
        assert_eq!(
            req.header("x-amz-target"),
            Some("AWSCognitoIdentityProviderService.UpdateDeviceStatus")
        );
        assert_eq!(req.header("content-type"), Some("application/x-amz-json-1.1"));
        assert_eq!(
            req.body_str(),
            Some(r#"{"AccessToken":"tok","DeviceKey":"dev-1","DeviceRememberedStatus":"not_remembered"}"#)
        );
    }

    #[test]
    fn test_should_send_empty_object_for_empty_input() {
        let req = ListDevicesInput::default().marshall().unwrap();
        assert_eq!(req.body_str(), Some("{}"));
        assert_eq!(req.header("content-length"), Some("2"));
    }

    #[test]
    fn test_should_fail_on_missing_input() {
        let err = marshall_request::<GetDeviceInput>(None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid argument passed to marshall(...): GetDevice input cannot be null"
        );
    }
}
