//! Price command implementation
//!
//! Prices one contract with all four engines and prints a comparison table.

use std::str::FromStr;

use tracing::info;

use pricer_core::types::{OptionContract, OptionKind};
use pricer_engines::monte_carlo::MonteCarloConfig;
use pricer_engines::validation::cross_check;

use crate::Result;

/// Run the price command
#[allow(clippy::too_many_arguments)]
pub fn run(
    spot: f64,
    strike: f64,
    rate: f64,
    expiry: f64,
    volatility: f64,
    kind: &str,
    num_simulations: u64,
    seed: Option<u64>,
) -> Result<()> {
    let kind = OptionKind::from_str(kind)?;
    let contract = OptionContract::new(spot, strike, rate, expiry, volatility, kind)?;

    info!("Pricing {} S={} K={} r={} T={} σ={}", kind, spot, strike, rate, expiry, volatility);
    info!("Monte Carlo: {} simulations, seed {:?}", num_simulations, seed);

    let mut builder = MonteCarloConfig::builder().num_simulations(num_simulations);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    let mc_config = builder.build()?;

    let report = cross_check(&contract, &mc_config)?;

    println!("\n┌──────────────┬─────────────┬─────────────┐");
    println!("│ Method       │ Price       │ Std. error  │");
    println!("├──────────────┼─────────────┼─────────────┤");
    print_row("closed form", report.closed_form.price, None);
    print_row("integration", report.integration.price, None);
    print_row("fourier", report.fourier.price, None);
    print_row(
        "monte carlo",
        report.monte_carlo.price,
        report.monte_carlo.std_error,
    );
    println!("└──────────────┴─────────────┴─────────────┘");

    if let Some(half_width) = report.monte_carlo.confidence_95() {
        let price = report.monte_carlo.price;
        println!(
            "Monte Carlo 95% interval: [{:.6}, {:.6}]",
            price - half_width,
            price + half_width
        );
    }
    Ok(())
}

fn print_row(method: &str, price: f64, std_error: Option<f64>) {
    match std_error {
        Some(se) => println!("│ {method:<12} │ {price:>11.6} │ {se:>11.6} │"),
        None => println!("│ {method:<12} │ {price:>11.6} │ {:>11} │", "-"),
    }
}
