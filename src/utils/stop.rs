// src/utils/stop.rs
//! Cooperative shutdown flag
//!
//! Philosophers check the token at the top of each cycle, the monitor once
//! per drain iteration. Sleeps are never interrupted mid-interval.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared stop flag; clones observe the same signal.
#[derive(Clone, Debug, Default)]
pub struct StopToken {
    flag: Arc<AtomicBool>,
}

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a stop. Idempotent.
    pub fn set(&self) {
        self.flag.store(true, Ordering::Release);
    }

    pub fn is_set(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_the_flag() {
        let token = StopToken::new();
        let clone = token.clone();
        assert!(!clone.is_set());

        token.set();
        assert!(clone.is_set());
    }
}
