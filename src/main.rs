#![cfg(not(tarpaulin_include))]

use tracing_subscriber::EnvFilter;
use twalyze::{Config, app};

/// Main entry point for the web application
///
/// Reads configuration from the environment and serves the page and API.
/// `RUST_LOG` controls log output, defaulting to `info`.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    app::run(config).await
}
