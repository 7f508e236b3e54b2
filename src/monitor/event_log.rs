// src/monitor/event_log.rs
//! Shared queue of philosopher state changes
//!
//! Producers append under a short-held lock; the single consumer swaps the
//! whole queue for an empty one, so every event lands in exactly one batch
//! and the lock is never held while a batch is processed.

use crate::sim::philosopher::PhilosopherState;
use parking_lot::{Condvar, Mutex};
use std::time::Duration;

/// One state change: which seat, which state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateEvent {
    pub seat: usize,
    pub state: PhilosopherState,
}

/// Thread-safe event queue shared by all philosophers and the monitor
#[derive(Default)]
pub struct EventLog {
    queue: Mutex<Vec<StateEvent>>,
    logged: Condvar,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one event and wake the drain loop.
    ///
    /// Only the push happens under the lock; callers never block on
    /// rendering.
    pub fn record(&self, seat: usize, state: PhilosopherState) {
        let mut queue = self.queue.lock();
        queue.push(StateEvent { seat, state });
        drop(queue);
        self.logged.notify_one();
    }

    /// Swap out everything recorded so far, waiting up to `timeout` for the
    /// first event.
    ///
    /// `None` means the window elapsed with nothing recorded. The swap is
    /// O(1) and the lock is released before the batch is touched.
    pub fn take_batch(&self, timeout: Duration) -> Option<Vec<StateEvent>> {
        let mut queue = self.queue.lock();
        if queue.is_empty() {
            // Woken either by a record() or by the timeout; the re-check
            // below distinguishes the two.
            self.logged.wait_for(&mut queue, timeout);
        }

        if queue.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut *queue))
        }
    }

    pub fn len(&self) -> usize {
        self.queue.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }
}
