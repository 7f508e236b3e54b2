// src/sim/canteen.rs
//! Canteen: wires forks, philosophers, and the monitor together
//!
//! Construction validates the parameters and lays the table; `run` seats
//! every philosopher on its own named thread and then drives the monitor's
//! drain loop on the calling thread. The philosopher threads are
//! fire-and-forget: the simulation has no natural completion and winds down
//! either through the stop token or with the process.

use crate::monitor::renderer::Renderer;
use crate::monitor::watcher::Monitor;
use crate::sim::philosopher::Philosopher;
use crate::table::ring::ForkRing;
use crate::utils::config::SimConfig;
use crate::utils::errors::{Result, SimError};
use crate::utils::stop::StopToken;
use std::sync::Arc;
use std::thread;
use tracing::{debug, info};

/// Idle intervals the monitor tolerates before declaring a liveness fault
const WATCHDOG_INTERVALS: u32 = 10;

/// The orchestrator owning the ring, the monitor, and the stop flag
pub struct Canteen {
    config: SimConfig,
    ring: Arc<ForkRing>,
    monitor: Monitor,
    stop: StopToken,
}

impl Canteen {
    /// Validate the configuration and lay the table.
    ///
    /// Fails with a configuration error before any thread exists.
    pub fn new(config: SimConfig, renderer: Box<dyn Renderer>) -> Result<Self> {
        config.validate()?;

        let stop = StopToken::new();
        let ring = Arc::new(ForkRing::new(config.philosophers));
        let monitor = Monitor::new(renderer, stop.clone());
        debug!("Table laid with {} forks", ring.len());

        Ok(Self {
            config,
            ring,
            monitor,
            stop,
        })
    }

    /// Handle for requesting a cooperative stop from outside `run`
    pub fn stop_token(&self) -> StopToken {
        self.stop.clone()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Seat the philosophers and drain events until a stop request or a
    /// liveness fault.
    ///
    /// Philosopher `i` shares fork `i` with its left neighbor and fork
    /// `(i + 1) % n` with its right one; the monitor gives up after
    /// 10 idle intervals without a single event.
    pub fn run(mut self) -> Result<()> {
        let log = self.monitor.log();

        for seat in 0..self.config.philosophers {
            let mut philosopher = Philosopher::new(
                seat,
                Arc::clone(&self.ring),
                Arc::clone(&log),
                self.stop.clone(),
                &self.config,
            );

            let spawned = thread::Builder::new()
                .name(format!("philosopher-{}", seat))
                .spawn(move || philosopher.run());
            if let Err(e) = spawned {
                self.stop.set();
                return Err(SimError::Spawn(e));
            }
        }

        info!(
            "Seated {} philosophers, intervals up to {}ms",
            self.config.philosophers, self.config.max_interval_ms
        );

        let idle_timeout = self.config.max_interval() * WATCHDOG_INTERVALS;
        self.monitor.run(idle_timeout)
    }
}
