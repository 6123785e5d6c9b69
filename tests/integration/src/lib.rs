//! Cross-crate wire tests for the awsmobile service crates.
//!
//! Every test builds real `http` requests and decodes canned responses; no
//! network access is needed.
//!
//! ```text
//! cargo test -p awsmobile-integration
//! ```

use std::sync::Once;

use awsmobile_core::ClientConfig;
use bytes::Bytes;

static INIT: Once = Once::new();

/// Initialize tracing (once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Endpoint override the tests resolve requests against.
pub const ENDPOINT_URL: &str = "http://localhost:4566";

/// Client configuration pointing at [`ENDPOINT_URL`].
#[must_use]
pub fn local_config() -> ClientConfig {
    init_tracing();
    ClientConfig::default().with_endpoint_url(ENDPOINT_URL)
}

/// Build a canned response.
#[must_use]
pub fn response(status: u16, headers: &[(&str, &str)], body: impl Into<Bytes>) -> http::Response<Bytes> {
    init_tracing();
    let mut builder = http::Response::builder().status(status);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder
        .body(body.into())
        .expect("canned response should be valid")
}

/// Decode a form-encoded request body into its parameters, in order.
#[must_use]
pub fn form_params(request: &http::Request<Bytes>) -> Vec<(String, String)> {
    form_urlencoded::parse(request.body()).into_owned().collect()
}

/// Parse a JSON request body.
#[must_use]
pub fn json_body(request: &http::Request<Bytes>) -> serde_json::Value {
    serde_json::from_slice(request.body()).expect("request body should be JSON")
}

mod test_errors;
mod test_json_rpc;
mod test_query;
mod test_rest_json;
