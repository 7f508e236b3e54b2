// src/table/ring.rs
//! The fork ring
//!
//! One fork per seat, owned here for the whole run. Philosophers keep seat
//! indices only; `neighbors` maps seat `i` to forks `i` and `(i + 1) % n`,
//! closing the ring.
//!
//! The ring also hosts the shared "a fork was freed" notification the
//! acquisition backoff waits on. A release that lands between a failed claim
//! and the wait is only a missed wakeup; the wait is bounded, so the claim is
//! retried after one interval at worst.

use crate::table::fork::Fork;
use parking_lot::{Condvar, Mutex};
use std::time::Duration;

/// Ring array of forks plus the shared freed notification
pub struct ForkRing {
    forks: Vec<Fork>,
    freed_lock: Mutex<()>,
    freed: Condvar,
}

impl ForkRing {
    pub fn new(seats: usize) -> Self {
        Self {
            forks: (0..seats).map(Fork::new).collect(),
            freed_lock: Mutex::new(()),
            freed: Condvar::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.forks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forks.is_empty()
    }

    pub fn fork(&self, index: usize) -> &Fork {
        &self.forks[index]
    }

    /// Fork indices for a seat: own fork on the left, successor's on the right
    pub fn neighbors(&self, seat: usize) -> (usize, usize) {
        (seat, (seat + 1) % self.forks.len())
    }

    /// Wait up to `timeout` for some fork to be freed
    pub fn wait_freed(&self, timeout: Duration) {
        let mut guard = self.freed_lock.lock();
        self.freed.wait_for(&mut guard, timeout);
    }

    /// Announce that forks went back on the table
    pub fn notify_freed(&self) {
        self.freed.notify_all();
    }
}
