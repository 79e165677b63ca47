//! Closed-form Black-Scholes pricing engine.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! Deterministic: identical inputs give bit-identical output. The only
//! failure mode beyond invalid contract inputs is overflow of the
//! intermediate exponentials under extreme parameters, surfaced as
//! [`EngineError::NonFinite`].

use pricer_core::math::distributions::{norm_cdf, norm_pdf};
use pricer_core::types::{OptionContract, OptionKind, PricingResult};

use crate::error::EngineError;

/// Computes the d1 term of the Black-Scholes formula.
///
/// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
#[inline]
pub fn d1(contract: &OptionContract) -> f64 {
    let vol = contract.volatility();
    let drift = (contract.rate() + 0.5 * vol * vol) * contract.expiry();
    (-contract.log_moneyness() + drift) / contract.vol_sqrt_t()
}

/// Computes the d2 term of the Black-Scholes formula.
///
/// d₂ = d₁ - σ√T
#[inline]
pub fn d2(contract: &OptionContract) -> f64 {
    d1(contract) - contract.vol_sqrt_t()
}

/// Prices a European option with the analytic Black-Scholes formula.
///
/// # Errors
/// Returns [`EngineError::NonFinite`] if an intermediate exponential
/// overflows (very large T·σ² or extreme moneyness).
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionContract, OptionKind};
/// use pricer_engines::closed_form;
///
/// let contract = OptionContract::new(100.0, 95.0, 0.05, 0.5, 0.2, OptionKind::Call).unwrap();
/// let result = closed_form::price(&contract).unwrap();
/// assert!((result.price - 9.8727).abs() < 5e-4);
/// assert!(result.std_error.is_none());
/// ```
pub fn price(contract: &OptionContract) -> Result<PricingResult, EngineError> {
    let d1 = d1(contract);
    let d2 = d2(contract);
    let discounted_strike = contract.strike() * contract.discount_factor();

    let price = match contract.kind() {
        OptionKind::Call => contract.spot() * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
        OptionKind::Put => discounted_strike * norm_cdf(-d2) - contract.spot() * norm_cdf(-d1),
    };

    if !price.is_finite() {
        return Err(EngineError::NonFinite {
            context: "closed-form price",
        });
    }
    Ok(PricingResult::exact(price.max(0.0)))
}

/// First-order sensitivities of the closed-form price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Greeks {
    /// Delta: ∂V/∂S. N(d₁) for calls, N(d₁) - 1 for puts.
    pub delta: f64,
    /// Gamma: ∂²V/∂S² = φ(d₁) / (S·σ·√T). Identical for calls and puts.
    pub gamma: f64,
    /// Vega: ∂V/∂σ = S·√T·φ(d₁). Identical for calls and puts.
    pub vega: f64,
}

/// Computes analytic Greeks for the contract.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionContract, OptionKind};
/// use pricer_engines::closed_form;
///
/// let contract = OptionContract::new(100.0, 100.0, 0.05, 1.0, 0.2, OptionKind::Call).unwrap();
/// let greeks = closed_form::greeks(&contract);
/// assert!(greeks.delta > 0.5 && greeks.delta < 0.7);
/// assert!(greeks.gamma > 0.0);
/// assert!(greeks.vega > 0.0);
/// ```
pub fn greeks(contract: &OptionContract) -> Greeks {
    let d1 = d1(contract);
    let pdf_d1 = norm_pdf(d1);

    let delta = match contract.kind() {
        OptionKind::Call => norm_cdf(d1),
        OptionKind::Put => norm_cdf(d1) - 1.0,
    };

    Greeks {
        delta,
        gamma: pdf_d1 / (contract.spot() * contract.vol_sqrt_t()),
        vega: contract.spot() * contract.expiry().sqrt() * pdf_d1,
    }
}
