//! JSON wire codec for `awsJson1_0`, `awsJson1_1` and `restJson1` services.
//!
//! Shapes are plain serde structs. Request bodies only carry the fields that
//! are set; responses are decoded leniently: unknown members are ignored and
//! a non-container value where a nested shape, list or map is expected
//! decodes to `None` (see [`container`]).

pub mod container;
mod error;
mod marshall;
mod response;
mod unmarshall;

pub use error::{parse_error_metadata, sanitize_error_code};
pub use marshall::{rpc_request, to_body, with_json_body};
pub use response::{parse_response, verify_crc32};
pub use unmarshall::from_body;
