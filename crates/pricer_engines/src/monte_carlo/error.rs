//! Error types for the Monte Carlo engine.
//!
//! This module defines the structured error type for configuration
//! validation in the Monte Carlo simulation engine.

use std::fmt;

use super::config::MAX_SIMULATIONS;

/// Configuration error for the Monte Carlo engine.
///
/// These errors occur during construction when invalid parameters are
/// provided.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Simulation count outside valid range [1, 100_000_000].
    InvalidSimulationCount(u64),
    /// Chunk size of zero.
    InvalidChunkSize(u64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSimulationCount(count) => {
                write!(
                    f,
                    "Invalid simulation count {}: must be in range [1, {}]",
                    count, MAX_SIMULATIONS
                )
            }
            Self::InvalidChunkSize(size) => {
                write!(f, "Invalid chunk size {}: must be at least 1", size)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
