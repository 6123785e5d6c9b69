//! Amazon Translate shapes for awsmobile.
//!
//! Real-time text and document translation plus the supported-language
//! listing, over `awsJson1_1`. Document content is a blob and travels
//! base64-encoded in the JSON body.
#![allow(missing_docs)]

pub mod error;
pub mod input;
mod marshall;
pub mod operations;
pub mod output;
pub mod types;

use awsmobile_core::{Protocol, ServiceMetadata};

pub use error::{TranslateError, TranslateErrorCode};
pub use operations::TranslateOperation;

/// Service description.
pub const METADATA: ServiceMetadata = ServiceMetadata {
    service_name: "Translate",
    endpoint_prefix: "translate",
    protocol: Protocol::AwsJson11,
    target_prefix: Some("AWSShineFrontendService_20170701"),
    api_version: "2017-07-01",
    xml_namespace: None,
};
