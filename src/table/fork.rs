// src/table/fork.rs
//! A fork: binary mutual-exclusion lock with a timed blocking acquire
//!
//! The availability flag is the only state shared between the two
//! philosophers that reference the fork; each fork carries its own lock, so
//! unrelated pairs never serialize on each other.

use parking_lot::{Condvar, Mutex};
use std::time::{Duration, Instant};

/// A single fork on the table
///
/// Legal transitions are available→held (`try_acquire`, `acquire_timeout`)
/// and held→available (`release`); at most one holder at a time.
pub struct Fork {
    /// Position in the ring
    index: usize,

    /// True iff no philosopher currently holds the fork
    available: Mutex<bool>,

    /// Signaled on every release, wakes timed waiters
    freed: Condvar,
}

impl Fork {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            available: Mutex::new(true),
            freed: Condvar::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Claim the fork if it is free right now. No side effects on failure.
    pub fn try_acquire(&self) -> bool {
        let mut available = self.available.lock();
        if *available {
            *available = false;
            true
        } else {
            false
        }
    }

    /// Block until the fork is claimed or `max_wait` elapses.
    ///
    /// Returns true when the fork was claimed. Waits on the condvar, never
    /// spins.
    pub fn acquire_timeout(&self, max_wait: Duration) -> bool {
        let deadline = Instant::now() + max_wait;
        let mut available = self.available.lock();
        while !*available {
            if self.freed.wait_until(&mut available, deadline).timed_out() {
                return false;
            }
        }
        *available = false;
        true
    }

    /// Give the fork back and wake all waiters.
    ///
    /// Caller must be the current holder; releasing a free fork is a contract
    /// violation.
    pub fn release(&self) {
        let mut available = self.available.lock();
        debug_assert!(!*available, "release of fork #{} that nobody holds", self.index);
        *available = true;
        drop(available);
        self.freed.notify_all();
    }

    pub fn is_available(&self) -> bool {
        *self.available.lock()
    }
}
