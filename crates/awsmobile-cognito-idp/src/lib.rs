//! Amazon Cognito Identity Provider device shapes for awsmobile.
//!
//! Remembered-device operations over `awsJson1_1`. Every call is a `POST /`
//! whose `X-Amz-Target` names the operation; access tokens are carried as
//! [`awsmobile_core::SensitiveString`] so they never reach the logs.
#![allow(missing_docs)]

pub mod error;
pub mod input;
mod marshall;
pub mod operations;
pub mod output;
pub mod types;

use awsmobile_core::{Protocol, ServiceMetadata};

pub use error::{CognitoIdpError, CognitoIdpErrorCode};
pub use operations::CognitoIdpOperation;

/// Service description.
pub const METADATA: ServiceMetadata = ServiceMetadata {
    service_name: "Cognito Identity Provider",
    endpoint_prefix: "cognito-idp",
    protocol: Protocol::AwsJson11,
    target_prefix: Some("AWSCognitoIdentityProviderService"),
    api_version: "2016-04-18",
    xml_namespace: None,
};
