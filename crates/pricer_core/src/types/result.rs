//! Pricing result type.
//!
//! This module provides [`PricingResult`], the output value produced fresh by
//! every engine invocation and owned by the caller.

/// Result of a single pricing invocation.
///
/// Deterministic engines (closed form, integration, Fourier) report a bare
/// price; the Monte Carlo engine additionally reports the standard error of
/// its estimator.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::PricingResult;
///
/// let result = PricingResult::with_std_error(9.87, 0.005);
/// println!("Price: {} +/- {:?}", result.price, result.confidence_95());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Present value of the option.
    pub price: f64,
    /// Standard error of the price estimate; `None` for deterministic methods.
    pub std_error: Option<f64>,
}

impl PricingResult {
    /// Creates a deterministic result (no standard error).
    #[inline]
    pub fn exact(price: f64) -> Self {
        Self {
            price,
            std_error: None,
        }
    }

    /// Creates a stochastic result with a standard error.
    #[inline]
    pub fn with_std_error(price: f64, std_error: f64) -> Self {
        Self {
            price,
            std_error: Some(std_error),
        }
    }

    /// Returns the 95% confidence interval half-width, if stochastic.
    #[inline]
    pub fn confidence_95(&self) -> Option<f64> {
        self.std_error.map(|se| 1.96 * se)
    }

    /// Returns the 99% confidence interval half-width, if stochastic.
    #[inline]
    pub fn confidence_99(&self) -> Option<f64> {
        self.std_error.map(|se| 2.576 * se)
    }
}
