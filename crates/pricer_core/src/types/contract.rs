//! Option contract definitions.
//!
//! This module provides the immutable [`OptionContract`] value shared by all
//! pricing engines, and the [`OptionKind`] payoff tag dispatched once at the
//! API boundary rather than re-checked inside numeric loops.

use std::fmt;
use std::str::FromStr;

use super::error::ContractError;

/// Type of vanilla option payoff.
///
/// # Variants
/// - `Call`: max(S - K, 0)
/// - `Put`: max(K - S, 0)
///
/// # Examples
/// ```
/// use pricer_core::types::OptionKind;
///
/// let kind: OptionKind = "call".parse().unwrap();
/// assert_eq!(kind, OptionKind::Call);
/// assert_eq!(kind.payoff(110.0, 100.0), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionKind {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionKind {
    /// Evaluates the intrinsic payoff for a given terminal spot and strike.
    ///
    /// # Arguments
    /// * `spot` - Terminal spot price (S_T)
    /// * `strike` - Strike price (K)
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::OptionKind;
    ///
    /// assert_eq!(OptionKind::Call.payoff(110.0, 100.0), 10.0);
    /// assert_eq!(OptionKind::Put.payoff(110.0, 100.0), 0.0);
    /// ```
    #[inline]
    pub fn payoff(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionKind::Call => (spot - strike).max(0.0),
            OptionKind::Put => (strike - spot).max(0.0),
        }
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionKind::Call)
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Call => write!(f, "call"),
            OptionKind::Put => write!(f, "put"),
        }
    }
}

impl FromStr for OptionKind {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "call" => Ok(OptionKind::Call),
            "put" => Ok(OptionKind::Put),
            other => Err(ContractError::InvalidKind {
                value: other.to_string(),
            }),
        }
    }
}

/// European vanilla option contract.
///
/// Immutable value shared by all pricing engines. Invariants
/// (`spot > 0`, `strike > 0`, `expiry > 0`, `volatility > 0`) are enforced
/// once at construction; engines rely on them without re-validating.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionContract, OptionKind};
///
/// let contract = OptionContract::new(100.0, 95.0, 0.05, 0.5, 0.2, OptionKind::Call).unwrap();
/// assert_eq!(contract.spot(), 100.0);
///
/// // Invalid volatility
/// assert!(OptionContract::new(100.0, 95.0, 0.05, 0.5, 0.0, OptionKind::Call).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionContract {
    /// Spot price (S)
    spot: f64,
    /// Strike price (K)
    strike: f64,
    /// Risk-free interest rate (r), annualised; may be negative
    rate: f64,
    /// Time to maturity in years (T)
    expiry: f64,
    /// Volatility (σ), annualised
    volatility: f64,
    /// Payoff kind (call or put)
    kind: OptionKind,
}

impl OptionContract {
    /// Creates a new contract with validation.
    ///
    /// # Arguments
    /// * `spot` - Spot price (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `rate` - Risk-free rate (annualised, may be negative)
    /// * `expiry` - Time to maturity in years (must be positive)
    /// * `volatility` - Volatility (must be positive)
    /// * `kind` - Call or put
    ///
    /// # Errors
    /// - `ContractError::InvalidSpot` if `spot <= 0`
    /// - `ContractError::InvalidStrike` if `strike <= 0`
    /// - `ContractError::InvalidExpiry` if `expiry <= 0`
    /// - `ContractError::InvalidVolatility` if `volatility <= 0`
    ///
    /// Non-finite inputs fail the same checks as non-positive ones.
    pub fn new(
        spot: f64,
        strike: f64,
        rate: f64,
        expiry: f64,
        volatility: f64,
        kind: OptionKind,
    ) -> Result<Self, ContractError> {
        if !(spot > 0.0 && spot.is_finite()) {
            return Err(ContractError::InvalidSpot { spot });
        }
        if !(strike > 0.0 && strike.is_finite()) {
            return Err(ContractError::InvalidStrike { strike });
        }
        if !(expiry > 0.0 && expiry.is_finite()) {
            return Err(ContractError::InvalidExpiry { expiry });
        }
        if !(volatility > 0.0 && volatility.is_finite()) {
            return Err(ContractError::InvalidVolatility { volatility });
        }

        Ok(Self {
            spot,
            strike,
            rate,
            expiry,
            volatility,
            kind,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the time to maturity in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the payoff kind.
    #[inline]
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Returns the discount factor e^(-rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.expiry).exp()
    }

    /// Returns σ√T, the total volatility over the contract's life.
    #[inline]
    pub fn vol_sqrt_t(&self) -> f64 {
        self.volatility * self.expiry.sqrt()
    }

    /// Returns the log-moneyness ln(K/S).
    #[inline]
    pub fn log_moneyness(&self) -> f64 {
        (self.strike / self.spot).ln()
    }

    /// Returns a copy of this contract with the opposite payoff kind.
    ///
    /// Used by put-call parity checks; all other terms are unchanged.
    #[inline]
    pub fn flipped(&self) -> Self {
        Self {
            kind: match self.kind {
                OptionKind::Call => OptionKind::Put,
                OptionKind::Put => OptionKind::Call,
            },
            ..*self
        }
    }
}
