// src/observability.rs
//! Tracing setup
//!
//! Logs go to stderr so stdout stays clean for the renderer output. The
//! filter defaults to `info` and honors `RUST_LOG`.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber. Call once, before anything
/// worth logging happens.
pub fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))
}
