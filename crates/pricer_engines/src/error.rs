//! Error types for the pricing engines.
//!
//! This module provides [`EngineError`], the single error surface shared by
//! all four engines. Convergence failures always carry the best available
//! estimate; non-finite intermediates are surfaced as a dedicated variant
//! rather than leaking NaN/Inf through the price.

use pricer_core::types::ContractError;
use thiserror::Error;

use crate::monte_carlo::ConfigError;

/// Pricing engine errors.
///
/// # Variants
/// - `Contract`: invalid inputs, rejected at the API boundary
/// - `Config`: invalid Monte Carlo simulation settings
/// - `DidNotConverge`: quadrature missed the accuracy budget (integration and
///   Fourier engines only); never silently returned as a trustworthy price
/// - `NonFinite`: an intermediate overflowed to NaN or infinity
///
/// No variant is retried automatically: every engine is a pure function of
/// its inputs, so a retry could not change the outcome.
///
/// # Examples
/// ```
/// use pricer_engines::EngineError;
///
/// let err = EngineError::NonFinite { context: "discounted payoff" };
/// assert!(format!("{}", err).contains("discounted payoff"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    /// Contract construction or parsing failed.
    #[error(transparent)]
    Contract(#[from] ContractError),

    /// Monte Carlo configuration failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The pricing integral did not meet its accuracy budget.
    #[error(
        "pricing integral did not converge: best estimate {best_estimate} (error ~{error_estimate})"
    )]
    DidNotConverge {
        /// Best available price estimate at the point of failure
        best_estimate: f64,
        /// Estimated absolute error of that estimate
        error_estimate: f64,
    },

    /// An intermediate computation produced NaN or infinity.
    #[error("numeric overflow in {context}")]
    NonFinite {
        /// Which computation overflowed
        context: &'static str,
    },
}
