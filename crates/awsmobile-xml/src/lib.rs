//! XML and query-protocol codec for `awsQuery` services.
//!
//! Requests are flattened into form parameters by [`QueryWriter`]. Responses
//! are decoded by a pull parser wrapped in [`StaxContext`], which tracks the
//! element stack so each shape only matches its own children:
//!
//! ```text
//! <PublishResponse>                 depth 1
//!   <PublishResult>                 depth 2
//!     <MessageId>...</MessageId>    depth 3  <- result fields
//!   </PublishResult>
//!   <ResponseMetadata>
//!     <RequestId>...</RequestId>    captured as metadata
//!   </ResponseMetadata>
//! </PublishResponse>
//! ```

mod context;
pub mod error;
mod query;
mod response;
pub mod serialize;
mod unmarshall;

pub use context::{StaxContext, XmlEvent};
pub use error::{XmlError, error_to_xml, parse_error_document};
pub use query::{QueryMarshall, QueryWriter, query_request};
pub use response::parse_response;
pub use serialize::{XmlMarshall, to_query_response};
pub use unmarshall::{
    MapEntryUnmarshaller, QueryResponse, XmlUnmarshall, from_query_response, unmarshall_enum,
    unmarshall_list_member, unmarshall_struct,
};
