// src/main.rs
//! Canteen simulation binary
//!
//! Usage: `canteen [philosophers] [max_interval_ms]`, defaults 64 and
//! 10000. Runs until externally terminated; a configuration error or a
//! liveness fault exits non-zero.

use anyhow::{Context, Result};
use canteen::observability::init_tracing;
use canteen::{Canteen, SimConfig, WaterfallRenderer};
use tracing::info;

fn main() -> Result<()> {
    init_tracing()?;

    let config = apply_args(SimConfig::load()?)?;
    info!(
        "Starting canteen v{}: {} philosophers, intervals up to {}ms",
        canteen::VERSION,
        config.philosophers,
        config.max_interval_ms
    );

    let renderer = WaterfallRenderer::stdout(config.philosophers);
    let canteen = Canteen::new(config, Box::new(renderer))?;
    canteen.run()?;

    info!("Simulation stopped");
    Ok(())
}

/// Positional overrides on top of file/env configuration. The interval is
/// clamped to the 2ms floor; the philosopher count is validated instead.
fn apply_args(mut config: SimConfig) -> Result<SimConfig> {
    let mut args = std::env::args().skip(1);

    if let Some(arg) = args.next() {
        config.philosophers = arg
            .parse()
            .with_context(|| format!("invalid philosopher count '{}'", arg))?;
    }

    if let Some(arg) = args.next() {
        let interval: u64 = arg
            .parse()
            .with_context(|| format!("invalid max interval '{}'", arg))?;
        config.max_interval_ms = interval.max(2);
    }

    Ok(config)
}
