//! Marshaller and operation traits.

use bytes::Bytes;

use crate::config::ClientConfig;
use crate::endpoint::Endpoint;
use crate::error::{MarshalError, SdkError};
use crate::protocol::ServiceMetadata;
use crate::request::MarshalledRequest;

/// An input shape that knows how to become a transport request.
pub trait Marshall {
    /// Operation this shape is the input of.
    const OPERATION: &'static str;

    /// Encode the shape. Implementations never see a missing input; see
    /// [`marshall_request`].
    fn marshall(&self) -> Result<MarshalledRequest, MarshalError>;
}

/// Marshal a possibly missing top-level input.
///
/// A missing input is a precondition violation and fails before anything is
/// encoded.
pub fn marshall_request<T: Marshall>(input: Option<&T>) -> Result<MarshalledRequest, MarshalError> {
    let input = input.ok_or(MarshalError::MissingInput(T::OPERATION))?;
    let request = input.marshall()?;
    tracing::debug!(
        operation = T::OPERATION,
        method = %request.method,
        path = %request.resource_path,
        body_len = request.body.as_ref().map_or(0, Bytes::len),
        "marshalled request"
    );
    Ok(request)
}

/// A service operation: input, output and error shapes bound together.
pub trait Operation {
    /// Operation name.
    const NAME: &'static str;

    /// Service the operation belongs to.
    const SERVICE: &'static ServiceMetadata;

    /// Input shape.
    type Input: Marshall;

    /// Output shape.
    type Output;

    /// Typed service error.
    type Error: std::error::Error;

    /// Decode a response: 2xx bodies into the output, anything else into the
    /// service error.
    fn parse_response(response: &http::Response<Bytes>)
    -> Result<Self::Output, SdkError<Self::Error>>;

    /// Marshal `input` into the HTTP request a transport would send.
    fn build_request(
        input: &Self::Input,
        config: &ClientConfig,
    ) -> Result<http::Request<Bytes>, MarshalError> {
        let endpoint = Endpoint::resolve(Self::SERVICE, config);
        marshall_request(Some(input))?.into_http(&endpoint, config)
    }
}

/// Declare an operation unit type and its [`Operation`] impl.
///
/// ```ignore
/// awsmobile_core::operation! {
///     /// Publish a message to a topic.
///     Publish {
///         service: &crate::METADATA,
///         input: PublishInput,
///         output: PublishResult,
///         error: SnsError,
///         parse: awsmobile_xml::parse_response,
///     }
/// }
/// ```
#[macro_export]
macro_rules! operation {
    (
        $(#[$meta:meta])*
        $name:ident {
            service: $service:expr,
            input: $input:ty,
            output: $output:ty,
            error: $error:ty,
            parse: $parse:path $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl $crate::Operation for $name {
            const NAME: &'static str = stringify!($name);
            const SERVICE: &'static $crate::ServiceMetadata = $service;

            type Input = $input;
            type Output = $output;
            type Error = $error;

            fn parse_response(
                response: &$crate::__private::http::Response<$crate::__private::bytes::Bytes>,
            ) -> ::std::result::Result<Self::Output, $crate::SdkError<Self::Error>> {
                $parse(response)
            }
        }
    };
}
