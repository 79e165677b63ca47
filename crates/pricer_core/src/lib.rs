//! # pricer_core: Foundation for the Multi-Method Vanilla Pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the workspace, providing:
//! - Contract and result value types (`types`)
//! - Structured error types: `ContractError`, `QuadratureError` (`types::error`)
//! - Statistical primitives: `norm_cdf`, `norm_pdf`, `lognormal_pdf`
//!   (`math::distributions`)
//! - Adaptive Gauss-Kronrod quadrature (`math::quadrature`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external
//! dependencies:
//! - thiserror: Structured error derives
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::distributions::norm_cdf;
//! use pricer_core::types::{OptionContract, OptionKind};
//!
//! let contract = OptionContract::new(100.0, 95.0, 0.05, 0.5, 0.2, OptionKind::Call).unwrap();
//! assert!(contract.discount_factor() < 1.0);
//!
//! let phi = norm_cdf(0.0);
//! # assert!((phi - 0.5).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `OptionContract`, `OptionKind`, `PricingResult`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
