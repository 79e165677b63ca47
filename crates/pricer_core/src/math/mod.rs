//! Numerical building blocks shared by the pricing engines.
//!
//! This module provides:
//! - [`distributions`]: standard normal CDF/PDF and the lognormal density
//! - [`quadrature`]: adaptive Gauss-Kronrod integration with an explicit
//!   subdivision budget
//!
//! All functions here are pure and side-effect free.

pub mod distributions;
pub mod quadrature;

pub use distributions::{lognormal_pdf, norm_cdf, norm_pdf};
pub use quadrature::{integrate, QuadratureConfig};
