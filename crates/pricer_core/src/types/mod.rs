//! Core financial value types.
//!
//! This module provides:
//! - `contract`: Immutable option contract specification (`OptionContract`, `OptionKind`)
//! - `result`: Pricing output (`PricingResult`)
//! - `error`: Structured error types for contract validation and quadrature
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionContract`], [`OptionKind`] from `contract`
//! - [`PricingResult`] from `result`
//! - [`ContractError`], [`QuadratureError`] from `error`

pub mod contract;
pub mod error;
pub mod result;

// Re-export commonly used types at module level
pub use contract::{OptionContract, OptionKind};
pub use error::{ContractError, QuadratureError};
pub use result::PricingResult;
