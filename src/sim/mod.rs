// src/sim/mod.rs
//! The simulation: philosophers and the canteen that seats them
//!
//! - **Philosopher**: one OS thread cycling think → acquire → dine → release,
//!   emitting a state event on every transition
//! - **Canteen**: builds the fork ring, seats the philosophers, and drives
//!   the monitor on the calling thread
//!
//! # Topology
//!
//! ```text
//! fork 0 ── philosopher 0 ── fork 1 ── philosopher 1 ── fork 2 ── ...
//!   ▲                                                               │
//!   └───────────────────────── philosopher n-1 ◄─────────────── fork n-1
//! ```
//!
//! Philosophers never talk to each other; every coordination goes through
//! the two forks a seat shares with its neighbors.

pub mod canteen;
pub mod philosopher;

// Re-export commonly used types
pub use canteen::Canteen;
pub use philosopher::{Philosopher, PhilosopherState};
