//! Check command implementation
//!
//! Runs the cross-method validation harness on the reference scenario and
//! reports whether every engine agrees with the closed form.

use tracing::info;

use pricer_core::types::{OptionContract, OptionKind};
use pricer_engines::monte_carlo::MonteCarloConfig;
use pricer_engines::validation::cross_check;

use crate::Result;

/// Deterministic engines must land within this of the closed form.
const TOLERANCE: f64 = 1e-4;

/// Monte Carlo must land within this many standard errors.
const MC_SIGMAS: f64 = 5.0;

/// Run the check command
pub fn run() -> Result<()> {
    info!("Running cross-method validation on the reference scenario");

    let mc_config = MonteCarloConfig::builder()
        .num_simulations(400_000)
        .seed(42)
        .build()?;

    let mut all_pass = true;
    for kind in [OptionKind::Call, OptionKind::Put] {
        let contract = OptionContract::new(100.0, 95.0, 0.05, 0.5, 0.2, kind)?;
        let report = cross_check(&contract, &mc_config)?;
        let pass = report.passes(TOLERANCE, MC_SIGMAS);
        all_pass &= pass;

        println!("{kind}:");
        println!("  closed form  {:.6}", report.closed_form.price);
        println!(
            "  integration  {:.6}  (Δ {:.2e})",
            report.integration.price,
            report.integration_deviation()
        );
        println!(
            "  fourier      {:.6}  (Δ {:.2e})",
            report.fourier.price,
            report.fourier_deviation()
        );
        println!(
            "  monte carlo  {:.6}  ({:.2} σ)",
            report.monte_carlo.price,
            report.monte_carlo_sigmas()
        );
        println!("  {}", if pass { "PASS" } else { "FAIL" });
    }

    if all_pass {
        println!("\nAll engines agree.");
    } else {
        println!("\nEngine disagreement detected.");
    }
    Ok(())
}
