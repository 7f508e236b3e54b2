// src/table/mod.rs
//! The table: forks and their ring topology
//!
//! - **Fork**: a binary lock shared by two ring-adjacent philosophers
//! - **Fork Ring**: the ring array owned by the canteen; philosophers address
//!   forks by seat index only

pub mod fork;
pub mod ring;

// Re-export commonly used types
pub use fork::Fork;
pub use ring::ForkRing;
