//! Signup Registration API Server
//!
//! Run with: cargo run --bin signup-api
//!
//! # Configuration
//!
//! Reads `config.toml` from the default locations (see `signup config`).
//! Environment variables:
//! - `SIGNUP_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `SIGNUP_API_PORT`: Port to listen on (default: 3000)
//! - `SIGNUP_LOG_LEVEL`, `SIGNUP_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Overrides the log filter entirely

use signup::api::{serve, AppState};
use signup::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, source) = Config::resolve(&Config::default_paths());
    signup::logging::init(&config.logging, "tower_http=debug");
    source.log();

    tracing::info!("Starting registration API server v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::new(config.api.clone());

    tracing::info!("Starting server on {}", config.api.addr());
    serve(state, &config.api).await?;

    tracing::info!("Registration API server stopped");
    Ok(())
}
