//! Configuration management and validation.
//!
//! Provides configuration structures for replay pacing, dataset seeding
//! and logging, with validation of the values the CLI or an embedding
//! application hands in.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_REPLAY_INTERVAL_MS, is_valid_log_level};
use crate::{Error, Result};

/// Replay pacing and seeding configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayConfig {
    /// Delay between emitted records in milliseconds
    pub interval_ms: u64,

    /// Stop after this many full passes over the dataset (None = endless)
    pub max_cycles: Option<u64>,

    /// Seed the store with the built-in sample dataset at startup
    pub seed_builtin_sample: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level threshold ("error", "warn", "info", "debug" or "trace")
    pub level: String,
}

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Replay behavior
    pub replay: ReplayConfig,

    /// Logging behavior
    pub logging: LoggingConfig,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_REPLAY_INTERVAL_MS,
            max_cycles: None,
            seed_builtin_sample: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            replay: ReplayConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Set the delay between emitted records
    pub fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        self.replay.interval_ms = interval_ms;
        self
    }

    /// Stop replay after a fixed number of full cycles
    pub fn with_max_cycles(mut self, max_cycles: u64) -> Self {
        self.replay.max_cycles = Some(max_cycles);
        self
    }

    /// Start with an empty store instead of the built-in sample
    pub fn without_builtin_sample(mut self) -> Self {
        self.replay.seed_builtin_sample = false;
        self
    }

    /// Set the log level threshold
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }

    /// Delay between emitted records as a [`Duration`]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.replay.interval_ms)
    }

    /// Validate the configuration values
    pub fn validate(&self) -> Result<()> {
        if self.replay.interval_ms == 0 {
            return Err(Error::configuration(
                "Replay interval must be greater than zero",
            ));
        }

        if self.replay.max_cycles == Some(0) {
            return Err(Error::configuration(
                "Cycle limit must be greater than zero",
            ));
        }

        if !is_valid_log_level(&self.logging.level) {
            return Err(Error::configuration(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }
}
