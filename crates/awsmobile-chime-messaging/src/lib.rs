//! Amazon Chime SDK Messaging shapes for awsmobile.
//!
//! Channel message operations over `restJson1`: labels are bound into the
//! request path, the caller identity travels in the `x-amz-chime-bearer`
//! header, list filters in the query string and the message itself in a JSON
//! body.
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

pub mod error;
pub mod input;
mod marshall;
pub mod operations;
pub mod output;
pub mod types;

use awsmobile_core::{Protocol, ServiceMetadata};

pub use error::{ChimeMessagingError, ChimeMessagingErrorCode};
pub use operations::ChimeMessagingOperation;

/// Service description.
pub const METADATA: ServiceMetadata = ServiceMetadata {
    service_name: "Chime SDK Messaging",
    endpoint_prefix: "messaging-chime",
    protocol: Protocol::RestJson1,
    target_prefix: None,
    api_version: "2021-05-15",
    xml_namespace: None,
};
