// src/utils/errors.rs
//! Crate-wide error types

use std::time::Duration;
use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors surfaced by the simulation
///
/// Transient faults inside a philosopher's cycle never show up here; they are
/// absorbed at the cycle boundary and the philosopher restarts from thinking.
#[derive(Debug, Error)]
pub enum SimError {
    /// Invalid construction parameters, reported before anything is spawned
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The monitor saw no state changes for a full idle window
    #[error("no state changes observed for {0:?}, the simulation is presumed wedged")]
    LivenessFault(Duration),

    /// The OS refused to spawn a philosopher thread
    #[error("failed to spawn philosopher thread: {0}")]
    Spawn(#[source] std::io::Error),
}
