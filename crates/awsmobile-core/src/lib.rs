//! Core building blocks shared by every awsmobile service crate.
//!
//! Service crates describe their shapes as plain Rust structs and implement
//! [`Marshall`] and [`Operation`] on top of the pieces in this crate:
//!
//! - [`sdk_enum!`] generates closed, strictly-decoded wire enums
//! - [`operation!`] and [`with_setters!`] declare operations and input builders
//! - [`timestamp`] and [`blob`] hold the per-field wire encodings
//! - [`UriTemplate`] binds path labels with percent-encoding
//! - [`MarshalledRequest`] is the protocol-independent transport request
//! - [`ServiceError`] and [`ErrorCode`] map service error codes to typed errors
//! - [`ClientConfig`] and [`Endpoint`] resolve where a request is sent

pub mod blob;
mod config;
mod endpoint;
mod enums;
mod error;
mod operation;
mod protocol;
mod request;
mod sensitive;
mod setters;
pub mod timestamp;
mod types;
mod uri;

pub use config::ClientConfig;
pub use endpoint::Endpoint;
pub use enums::{InvalidEnumValue, SdkEnum};
pub use error::{ErrorCode, ErrorMetadata, MarshalError, SdkError, ServiceError, UnmarshalError};
pub use operation::{Marshall, Operation, marshall_request};
pub use protocol::{Protocol, ServiceMetadata};
pub use request::MarshalledRequest;
pub use sensitive::SensitiveString;
pub use timestamp::TimestampFormat;
pub use types::Region;
pub use uri::{ResolvedPath, UriTemplate, encode_label, encode_query_component};

#[doc(hidden)]
pub mod __private {
    pub use bytes;
    pub use http;
    pub use serde;
}
