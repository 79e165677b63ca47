//! Cross-method validation harness.
//!
//! Runs all four engines on one contract and reports each engine's deviation
//! from the closed form. The analytic price is exact under the model, so it
//! is the anchor: the deterministic engines must land within their quadrature
//! tolerance of it, and the Monte Carlo estimate within a few standard
//! errors. Agreement across four independent algorithms is the strongest
//! correctness evidence this crate can produce without an external oracle.

use tracing::debug;

use pricer_core::types::{OptionContract, PricingResult};

use crate::error::EngineError;
use crate::monte_carlo::MonteCarloConfig;
use crate::{closed_form, fourier, integration, monte_carlo};

/// Prices from all four engines for a single contract, with deviations
/// measured against the closed form.
#[derive(Clone, Debug)]
pub struct CrossCheckReport {
    /// Closed-form analytic price (the anchor).
    pub closed_form: PricingResult,
    /// Payoff-times-density quadrature price.
    pub integration: PricingResult,
    /// Gil-Pelaez Fourier inversion price.
    pub fourier: PricingResult,
    /// Monte Carlo estimate with standard error.
    pub monte_carlo: PricingResult,
}

impl CrossCheckReport {
    /// Absolute deviation of the integration engine from the closed form.
    #[inline]
    pub fn integration_deviation(&self) -> f64 {
        (self.integration.price - self.closed_form.price).abs()
    }

    /// Absolute deviation of the Fourier engine from the closed form.
    #[inline]
    pub fn fourier_deviation(&self) -> f64 {
        (self.fourier.price - self.closed_form.price).abs()
    }

    /// Monte Carlo deviation from the closed form, in standard errors.
    ///
    /// Returns `f64::INFINITY` when the standard error is zero and the
    /// deviation is not, so a degenerate estimate still fails [`passes`].
    ///
    /// [`passes`]: CrossCheckReport::passes
    pub fn monte_carlo_sigmas(&self) -> f64 {
        let deviation = (self.monte_carlo.price - self.closed_form.price).abs();
        match self.monte_carlo.std_error {
            Some(se) if se > 0.0 => deviation / se,
            _ if deviation == 0.0 => 0.0,
            _ => f64::INFINITY,
        }
    }

    /// Whether every engine agrees with the closed form.
    ///
    /// The deterministic engines must deviate by less than `tolerance`; the
    /// Monte Carlo estimate by less than `mc_sigmas` standard errors.
    pub fn passes(&self, tolerance: f64, mc_sigmas: f64) -> bool {
        self.integration_deviation() < tolerance
            && self.fourier_deviation() < tolerance
            && self.monte_carlo_sigmas() < mc_sigmas
    }
}

/// Runs all four engines on `contract` and assembles the report.
///
/// # Errors
/// Propagates the first engine failure; a report is only produced when every
/// engine returned a price.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionContract, OptionKind};
/// use pricer_engines::monte_carlo::MonteCarloConfig;
/// use pricer_engines::validation::cross_check;
///
/// let contract = OptionContract::new(100.0, 95.0, 0.05, 0.5, 0.2, OptionKind::Call).unwrap();
/// let config = MonteCarloConfig::builder()
///     .num_simulations(200_000)
///     .seed(42)
///     .build()
///     .unwrap();
/// let report = cross_check(&contract, &config).unwrap();
/// assert!(report.passes(1e-4, 5.0));
/// ```
pub fn cross_check(
    contract: &OptionContract,
    mc_config: &MonteCarloConfig,
) -> Result<CrossCheckReport, EngineError> {
    debug!(
        "Cross-checking {} S={} K={} T={}",
        contract.kind(),
        contract.spot(),
        contract.strike(),
        contract.expiry()
    );
    Ok(CrossCheckReport {
        closed_form: closed_form::price(contract)?,
        integration: integration::price(contract)?,
        fourier: fourier::price(contract)?,
        monte_carlo: monte_carlo::price(contract, mc_config)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::types::OptionKind;

    fn mc_config() -> MonteCarloConfig {
        MonteCarloConfig::builder()
            .num_simulations(200_000)
            .seed(42)
            .build()
            .unwrap()
    }

    #[test]
    fn test_reference_scenario_passes() {
        for kind in [OptionKind::Call, OptionKind::Put] {
            let contract = OptionContract::new(100.0, 95.0, 0.05, 0.5, 0.2, kind).unwrap();
            let report = cross_check(&contract, &mc_config()).unwrap();
            assert!(
                report.passes(1e-4, 5.0),
                "cross-check failed for {kind}: {report:?}"
            );
        }
    }

    #[test]
    fn test_deviations_are_small_on_reference_scenario() {
        let contract =
            OptionContract::new(100.0, 95.0, 0.05, 0.5, 0.2, OptionKind::Call).unwrap();
        let report = cross_check(&contract, &mc_config()).unwrap();
        assert!(report.integration_deviation() < 1e-6);
        assert!(report.fourier_deviation() < 1e-6);
        assert!(report.monte_carlo_sigmas() < 5.0);
    }

    #[test]
    fn test_degenerate_monte_carlo_sigma_rules() {
        let contract =
            OptionContract::new(100.0, 95.0, 0.05, 0.5, 0.2, OptionKind::Call).unwrap();
        let base = cross_check(&contract, &mc_config()).unwrap();

        let mut zero_se = base.clone();
        zero_se.monte_carlo = PricingResult::with_std_error(base.closed_form.price, 0.0);
        assert_eq!(zero_se.monte_carlo_sigmas(), 0.0);

        let mut zero_se_off = base.clone();
        zero_se_off.monte_carlo =
            PricingResult::with_std_error(base.closed_form.price + 1.0, 0.0);
        assert_eq!(zero_se_off.monte_carlo_sigmas(), f64::INFINITY);
        assert!(!zero_se_off.passes(1e-4, 5.0));
    }
}
