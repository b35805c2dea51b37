//! Engine configuration and construction errors.

use std::time::Duration;

use thiserror::Error;

use crate::types::{DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_TICK_MS, MAX_DIMENSION};

/// How a rotation picks among several valid kick candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KickPolicy {
    /// Commit the first valid candidate and stop.
    #[default]
    FirstValid,
    /// Test every candidate; the last valid one is committed.
    LastValid,
}

impl KickPolicy {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "first" | "first-valid" => Some(KickPolicy::FirstValid),
            "last" | "last-valid" => Some(KickPolicy::LastValid),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KickPolicy::FirstValid => "first",
            KickPolicy::LastValid => "last",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board must be between 1x1 and {max}x{max}, got {rows} rows x {cols} cols")]
    InvalidDimensions { rows: usize, cols: usize, max: usize },
    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,
    #[error("scripted piece sequence must not be empty")]
    EmptySequence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub rows: usize,
    pub cols: usize,
    /// Gravity period the host driver should use.
    pub tick_interval: Duration,
    pub kick_policy: KickPolicy,
    /// Seed for the random spawn generator.
    pub seed: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
            kick_policy: KickPolicy::FirstValid,
            seed: 1,
        }
    }
}

impl EngineConfig {
    pub fn with_dimensions(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    pub fn with_kick_policy(mut self, policy: KickPolicy) -> Self {
        self.kick_policy = policy;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let dim_ok = |d: usize| (1..=MAX_DIMENSION).contains(&d);
        if !dim_ok(self.rows) || !dim_ok(self.cols) {
            return Err(ConfigError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
                max: MAX_DIMENSION,
            });
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }
}
