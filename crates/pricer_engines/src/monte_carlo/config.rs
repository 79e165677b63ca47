//! Monte Carlo simulation configuration.
//!
//! This module provides the configuration type and builder for the Monte
//! Carlo pricing engine.

use super::error::ConfigError;

/// Maximum number of simulations allowed.
pub const MAX_SIMULATIONS: u64 = 100_000_000;

/// Default number of simulations.
pub const DEFAULT_SIMULATIONS: u64 = 1_000_000;

/// Default number of draws per chunk.
///
/// Chunking bounds peak memory regardless of the total simulation count and
/// gives the parallel scheduler units of useful size.
pub const DEFAULT_CHUNK_SIZE: u64 = 65_536;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying simulation parameters.
/// Use [`MonteCarloConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_engines::monte_carlo::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .num_simulations(200_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.num_simulations(), 200_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloConfig {
    /// Total number of simulated terminal prices.
    num_simulations: u64,
    /// Optional seed for reproducibility. `None` draws one from OS entropy.
    seed: Option<u64>,
    /// Number of draws per chunk.
    chunk_size: u64,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            num_simulations: DEFAULT_SIMULATIONS,
            seed: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the total number of simulations.
    #[inline]
    pub fn num_simulations(&self) -> u64 {
        self.num_simulations
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the number of draws per chunk.
    #[inline]
    pub fn chunk_size(&self) -> u64 {
        self.chunk_size
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `num_simulations` is 0 or greater than 100,000,000
    /// - `chunk_size` is 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_simulations == 0 || self.num_simulations > MAX_SIMULATIONS {
            return Err(ConfigError::InvalidSimulationCount(self.num_simulations));
        }
        if self.chunk_size == 0 {
            return Err(ConfigError::InvalidChunkSize(self.chunk_size));
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// Provides a fluent API with validation at build time. Every field has a
/// usable default, so `MonteCarloConfig::builder().build()` is valid.
///
/// # Examples
///
/// ```rust
/// use pricer_engines::monte_carlo::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .num_simulations(500_000)
///     .seed(12345)
///     .build()
///     .expect("valid config");
/// ```
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    num_simulations: Option<u64>,
    seed: Option<u64>,
    chunk_size: Option<u64>,
}

impl MonteCarloConfigBuilder {
    /// Sets the total number of simulations.
    ///
    /// # Arguments
    ///
    /// * `num_simulations` - Simulation count in [1, 100_000_000]
    #[inline]
    pub fn num_simulations(mut self, num_simulations: u64) -> Self {
        self.num_simulations = Some(num_simulations);
        self
    }

    /// Sets the seed for reproducibility.
    ///
    /// # Arguments
    ///
    /// * `seed` - 64-bit seed value
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the number of draws per chunk.
    ///
    /// # Arguments
    ///
    /// * `chunk_size` - Draws per chunk, at least 1
    #[inline]
    pub fn chunk_size(mut self, chunk_size: u64) -> Self {
        self.chunk_size = Some(chunk_size);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any set value fails validation.
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let config = MonteCarloConfig {
            num_simulations: self.num_simulations.unwrap_or(DEFAULT_SIMULATIONS),
            seed: self.seed,
            chunk_size: self.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE),
        };
        config.validate()?;
        Ok(config)
    }
}
