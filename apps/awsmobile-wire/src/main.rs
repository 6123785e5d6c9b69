//! awsmobile-wire - print the request an operation would send.
//!
//! Reads a JSON input document, marshals it for the named operation and
//! prints the resulting HTTP request. Nothing is sent.
//!
//! # Usage
//!
//! ```text
//! echo '{"TopicArn": "arn:aws:sns:us-east-1:123456789012:alerts", "Message": "hi"}' \
//!     | awsmobile-wire sns:Publish --input -
//! awsmobile-wire translate:ListLanguages --region eu-west-1
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `AWS_REGION` | `us-east-1` | Region used for endpoint resolution |
//! | `AWS_ENDPOINT_URL` | *(unset)* | Endpoint override |
//! | `AWSMOBILE_USER_AGENT` | `awsmobile-rs/<version>` | `User-Agent` header |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

mod dispatch;
mod render;

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use awsmobile_core::ClientConfig;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "awsmobile-wire", version, about = "Print the wire request for an AWS operation")]
struct Cli {
    /// Operation as `service:Operation`, e.g. `sns:Publish`.
    operation: String,

    /// JSON input document. `-` reads stdin; omitted means `{}`.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Region override.
    #[arg(long)]
    region: Option<String>,

    /// Endpoint override.
    #[arg(long)]
    endpoint_url: Option<String>,
}

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
/// Logs go to stderr so stdout only carries the request.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        None => Ok("{}".to_owned()),
        Some(p) if p.as_os_str() == "-" => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read input from stdin")?;
            Ok(buf)
        }
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read input file {}", p.display())),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    if let Some(region) = cli.region {
        config = config.with_region(region);
    }
    if let Some(url) = cli.endpoint_url {
        config = config.with_endpoint_url(url);
    }

    init_tracing(&config.log_level)?;
    debug!(region = %config.region, endpoint = ?config.endpoint_url, "loaded configuration");

    let input = read_input(cli.input.as_ref())?;
    let request = dispatch::dispatch(&cli.operation, &input, &config)?;
    print!("{request}");

    Ok(())
}
