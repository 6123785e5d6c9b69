//! Amazon SNS shapes for awsmobile.
//!
//! SNS speaks the `awsQuery` protocol: requests are form-encoded parameters
//! (`Action`, `Version`, then the flattened input) and responses are XML
//! documents decoded with the depth-tracked unmarshallers of
//! [`awsmobile_xml`]. Result shapes can also be written back as response
//! documents, which is what the tests use to exercise the readers.
#![allow(missing_docs)]

pub mod error;
pub mod input;
mod marshall;
pub mod operations;
pub mod output;
pub mod types;

use awsmobile_core::{Protocol, ServiceMetadata};

pub use error::{SnsError, SnsErrorCode};
pub use operations::SnsOperation;

/// Service description.
pub const METADATA: ServiceMetadata = ServiceMetadata {
    service_name: "SNS",
    endpoint_prefix: "sns",
    protocol: Protocol::AwsQuery,
    target_prefix: None,
    api_version: "2010-03-31",
    xml_namespace: Some("http://sns.amazonaws.com/doc/2010-03-31/"),
};
