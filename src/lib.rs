// src/lib.rs
//! Canteen: a concurrent dining-philosophers simulation
//!
//! N philosophers sit at a ring of N forks, each fork shared by the two
//! adjacent seats. Every philosopher runs on its own OS thread, cycling
//! think → acquire both forks → dine → release, and reports each state
//! change into a shared event log. A single monitor loop drains the log in
//! batches and hands them to a pluggable renderer.
//!
//! # Architecture
//!
//! The crate is structured into a few small modules:
//!
//! - **table**: forks (binary locks) and their ring topology
//! - **sim**: the philosopher state machine and the canteen orchestrator
//! - **monitor**: event log, drain loop with liveness watchdog, renderers
//! - **observability**: tracing setup
//! - **utils**: configuration, errors, cooperative stop flag
//!
//! ```text
//! Canteen ─ builds ─→ ForkRing ←─ claims/releases ─ Philosopher × N
//!    │                                                    │
//!    └─ drives ─→ Monitor ←─ record(seat, state) ─────────┘
//!                    │
//!                    └─→ Renderer (lines or waterfall snapshot)
//! ```
//!
//! Deadlock is avoided by never holding one fork while blocked on the
//! other: both forks are claimed as an all-or-nothing unit with bounded
//! backoff. The monitor doubles as a liveness watchdog and reports a fault
//! when no events arrive for a full idle window.

// Public module exports
pub mod monitor;
pub mod observability;
pub mod sim;
pub mod table;
pub mod utils;

// Re-export commonly used types
pub use monitor::event_log::{EventLog, StateEvent};
pub use monitor::renderer::{LineRenderer, Renderer, WaterfallRenderer};
pub use monitor::watcher::Monitor;
pub use sim::canteen::Canteen;
pub use sim::philosopher::{Philosopher, PhilosopherState};
pub use table::{Fork, ForkRing};
pub use utils::config::SimConfig;
pub use utils::errors::{Result, SimError};
pub use utils::stop::StopToken;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
