//! Error types for structured error handling.
//!
//! This module provides:
//! - `ContractError`: Errors from contract construction and parsing
//! - `QuadratureError`: Errors from adaptive numerical integration

use thiserror::Error;

/// Contract validation errors.
///
/// Provides structured error handling for contract construction with
/// descriptive context for each failure mode. All validation happens once
/// at the API boundary; engines never re-check inputs in hot loops.
///
/// # Variants
/// - `InvalidSpot`: Non-positive spot price
/// - `InvalidStrike`: Non-positive strike price
/// - `InvalidExpiry`: Non-positive time to maturity
/// - `InvalidVolatility`: Non-positive volatility
/// - `InvalidKind`: Option kind string not recognised
///
/// # Examples
/// ```
/// use pricer_core::types::ContractError;
///
/// let err = ContractError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ContractError {
    /// Invalid spot price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike price (non-positive).
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The invalid strike price value
        strike: f64,
    },

    /// Invalid time to maturity (non-positive).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Option kind string not recognised.
    #[error("Invalid option kind '{value}': expected 'call' or 'put'")]
    InvalidKind {
        /// The unrecognised kind string
        value: String,
    },
}

/// Adaptive quadrature errors.
///
/// Convergence failures carry the best available estimate so callers can
/// inspect it, but the estimate is never returned as if trustworthy.
///
/// # Examples
/// ```
/// use pricer_core::types::QuadratureError;
///
/// let err = QuadratureError::DidNotConverge {
///     best_estimate: 1.23,
///     error_estimate: 1e-3,
/// };
/// assert!(format!("{}", err).contains("did not converge"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum QuadratureError {
    /// The subdivision budget was exhausted before reaching the tolerance.
    #[error("quadrature did not converge: best estimate {best_estimate} (error ~{error_estimate})")]
    DidNotConverge {
        /// Best available integral estimate at the point of failure
        best_estimate: f64,
        /// Estimated absolute error of that estimate
        error_estimate: f64,
    },

    /// The integrand produced a non-finite value.
    #[error("non-finite integrand value at x = {x}")]
    NonFinite {
        /// Abscissa at which the integrand was not finite
        x: f64,
    },
}
