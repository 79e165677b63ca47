//! # pricer_engines: Four Independent Vanilla Pricing Engines
//!
//! ## Layer 2 (Engines) Role
//!
//! pricer_engines implements four pricing methods for European vanilla
//! options under the Black-Scholes-Merton model, each reachable through the
//! same contract type and returning the same result type:
//! - `closed_form`: the analytic Black-Scholes formula (the anchor)
//! - `integration`: adaptive quadrature of payoff times lognormal density
//! - `fourier`: Gil-Pelaez inversion of the characteristic function
//! - `monte_carlo`: chunked, reproducible parallel simulation
//!
//! The engines share no numerical machinery beyond `pricer_core`, so their
//! agreement is meaningful evidence of correctness; the `validation` module
//! turns that agreement into a checkable report.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::OptionKind;
//! use pricer_engines::price_closed_form;
//!
//! let result = price_closed_form(100.0, 95.0, 0.05, 0.5, 0.2, OptionKind::Call).unwrap();
//! assert!((result.price - 9.8727).abs() < 5e-4);
//! ```
//!
//! ## Error Surface
//!
//! Every engine returns `Result<PricingResult, EngineError>`. Convergence
//! failures carry the best available estimate rather than discarding it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod closed_form;
mod error;
pub mod fourier;
pub mod integration;
pub mod monte_carlo;
pub mod validation;

pub use error::EngineError;

use pricer_core::types::{OptionContract, OptionKind, PricingResult};

use monte_carlo::MonteCarloConfig;

/// Prices with the closed-form engine from raw contract scalars.
///
/// Convenience wrapper that validates the inputs, builds the contract and
/// delegates to [`closed_form::price`].
///
/// # Errors
/// [`EngineError::Contract`] if any scalar fails validation.
pub fn price_closed_form(
    spot: f64,
    strike: f64,
    rate: f64,
    expiry: f64,
    volatility: f64,
    kind: OptionKind,
) -> Result<PricingResult, EngineError> {
    let contract = OptionContract::new(spot, strike, rate, expiry, volatility, kind)?;
    closed_form::price(&contract)
}

/// Prices with the quadrature engine from raw contract scalars.
///
/// Uses the default quadrature configuration; see
/// [`integration::price_with_config`] for explicit control.
pub fn price_integration(
    spot: f64,
    strike: f64,
    rate: f64,
    expiry: f64,
    volatility: f64,
    kind: OptionKind,
) -> Result<PricingResult, EngineError> {
    let contract = OptionContract::new(spot, strike, rate, expiry, volatility, kind)?;
    integration::price(&contract)
}

/// Prices with the Fourier inversion engine from raw contract scalars.
pub fn price_fourier(
    spot: f64,
    strike: f64,
    rate: f64,
    expiry: f64,
    volatility: f64,
    kind: OptionKind,
) -> Result<PricingResult, EngineError> {
    let contract = OptionContract::new(spot, strike, rate, expiry, volatility, kind)?;
    fourier::price(&contract)
}

/// Prices with the Monte Carlo engine from raw contract scalars.
///
/// `seed` of `None` draws a base seed from OS entropy; a fixed seed makes
/// the estimate bit-reproducible.
#[allow(clippy::too_many_arguments)]
pub fn price_monte_carlo(
    spot: f64,
    strike: f64,
    rate: f64,
    expiry: f64,
    volatility: f64,
    kind: OptionKind,
    num_simulations: u64,
    seed: Option<u64>,
) -> Result<PricingResult, EngineError> {
    let contract = OptionContract::new(spot, strike, rate, expiry, volatility, kind)?;
    let mut builder = MonteCarloConfig::builder().num_simulations(num_simulations);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    let config = builder.build()?;
    monte_carlo::price(&contract, &config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::types::ContractError;

    #[test]
    fn test_wrappers_reject_invalid_scalars() {
        let result = price_closed_form(-1.0, 95.0, 0.05, 0.5, 0.2, OptionKind::Call);
        assert!(matches!(
            result,
            Err(EngineError::Contract(ContractError::InvalidSpot { .. }))
        ));

        let result = price_fourier(100.0, 95.0, 0.05, 0.5, -0.2, OptionKind::Call);
        assert!(matches!(
            result,
            Err(EngineError::Contract(ContractError::InvalidVolatility { .. }))
        ));
    }

    #[test]
    fn test_monte_carlo_wrapper_rejects_zero_simulations() {
        let result =
            price_monte_carlo(100.0, 95.0, 0.05, 0.5, 0.2, OptionKind::Call, 0, Some(42));
        assert!(matches!(result, Err(EngineError::Config(_))));
    }

    #[test]
    fn test_wrappers_agree_on_reference_scenario() {
        let analytic = price_closed_form(100.0, 95.0, 0.05, 0.5, 0.2, OptionKind::Call)
            .unwrap()
            .price;
        let by_quadrature = price_integration(100.0, 95.0, 0.05, 0.5, 0.2, OptionKind::Call)
            .unwrap()
            .price;
        let by_inversion = price_fourier(100.0, 95.0, 0.05, 0.5, 0.2, OptionKind::Call)
            .unwrap()
            .price;
        assert!((by_quadrature - analytic).abs() < 1e-6);
        assert!((by_inversion - analytic).abs() < 1e-6);
    }
}
