//! Amazon Comprehend detection shapes for awsmobile.
//!
//! Synchronous sentiment and dominant-language detection over `awsJson1_1`.
#![allow(missing_docs)]

pub mod error;
pub mod input;
mod marshall;
pub mod operations;
pub mod output;
pub mod types;

use awsmobile_core::{Protocol, ServiceMetadata};

pub use error::{ComprehendError, ComprehendErrorCode};
pub use operations::ComprehendOperation;

/// Service description.
pub const METADATA: ServiceMetadata = ServiceMetadata {
    service_name: "Comprehend",
    endpoint_prefix: "comprehend",
    protocol: Protocol::AwsJson11,
    target_prefix: Some("Comprehend_20171127"),
    api_version: "2017-11-27",
    xml_namespace: None,
};
