// src/utils/config.rs
//! Simulation configuration
//!
//! Defaults can be overridden by an optional `canteen.toml` next to the
//! working directory and by `CANTEEN_*` environment variables; the binary
//! additionally accepts two positional arguments on top of both.

use crate::utils::errors::{Result, SimError};
use serde::Deserialize;
use std::time::Duration;

/// Simulation parameters
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of philosophers (and forks) around the table (default: 64)
    pub philosophers: usize,

    /// Upper bound for the random thinking/dining intervals, in milliseconds
    /// (default: 10 000)
    pub max_interval_ms: u64,

    /// Enable the starvation watchdog: a philosopher that goes too long
    /// without dining dies instead of retrying forever (default: off)
    pub starvation_watchdog: bool,

    /// Starvation threshold, in multiples of `max_interval_ms` since the
    /// last meal (default: 4)
    pub death_threshold: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            philosophers: 64,
            max_interval_ms: 10_000,
            starvation_watchdog: false,
            death_threshold: 4,
        }
    }
}

impl SimConfig {
    /// Load configuration from the optional file and environment overrides
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("canteen").required(false))
            .add_source(config::Environment::with_prefix("CANTEEN"))
            .build()
            .map_err(|e| SimError::Configuration(e.to_string()))?;

        settings
            .try_deserialize()
            .map_err(|e| SimError::Configuration(e.to_string()))
    }

    /// Validate construction parameters
    ///
    /// A ring needs at least two members to have contention at all, so
    /// anything below that is rejected before a single thread is spawned.
    pub fn validate(&self) -> Result<()> {
        if self.philosophers < 2 {
            return Err(SimError::Configuration(format!(
                "at least 2 philosophers required, got {}",
                self.philosophers
            )));
        }

        if self.max_interval_ms < 2 {
            return Err(SimError::Configuration(format!(
                "max interval must be at least 2ms, got {}",
                self.max_interval_ms
            )));
        }

        if self.starvation_watchdog && self.death_threshold == 0 {
            return Err(SimError::Configuration(
                "death threshold cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Upper interval bound as a `Duration`
    pub fn max_interval(&self) -> Duration {
        Duration::from_millis(self.max_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SimConfig::default();
        assert_eq!(config.philosophers, 64);
        assert_eq!(config.max_interval_ms, 10_000);
        assert!(!config.starvation_watchdog);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_tiny_rings() {
        for philosophers in [0, 1] {
            let config = SimConfig {
                philosophers,
                ..Default::default()
            };
            assert!(config.validate().is_err());
        }

        let config = SimConfig {
            philosophers: 2,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_degenerate_interval() {
        let config = SimConfig {
            max_interval_ms: 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_death_threshold() {
        let config = SimConfig {
            starvation_watchdog: true,
            death_threshold: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
