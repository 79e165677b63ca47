//! CLI error type.
//!
//! Wraps the library error surfaces so `main` can use `?` throughout and
//! still print a single coherent message on exit.

use pricer_core::types::ContractError;
use pricer_engines::monte_carlo::ConfigError;
use pricer_engines::EngineError;
use thiserror::Error;

/// Result alias used across the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by the command-line interface.
#[derive(Debug, Error)]
pub enum CliError {
    /// Contract scalars failed validation.
    #[error(transparent)]
    Contract(#[from] ContractError),

    /// Monte Carlo settings failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A pricing engine failed.
    #[error(transparent)]
    Engine(#[from] EngineError),
}
