//! Pricer CLI - Command Line Operations for the Multi-Method Vanilla Pricer
//!
//! This is the operational entry point for the vanilla option pricing
//! library.
//!
//! # Commands
//!
//! - `pricer price` - Price one European option with all four engines
//! - `pricer check` - Run the cross-method validation harness
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate orchestrates the
//! pricing engines behind a unified command-line interface. Pricing logic
//! lives in `pricer_engines`; this binary only parses arguments, initialises
//! tracing and formats output.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Multi-method European vanilla option pricer CLI
#[derive(Parser)]
#[command(name = "pricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price one European option with all four engines
    Price {
        /// Spot price of the underlying
        #[arg(short, long, default_value = "100.0")]
        spot: f64,

        /// Strike price
        #[arg(short = 'k', long, default_value = "95.0")]
        strike: f64,

        /// Continuously compounded risk-free rate
        #[arg(short, long, default_value = "0.05")]
        rate: f64,

        /// Time to expiry in years
        #[arg(short = 't', long, default_value = "0.5")]
        expiry: f64,

        /// Volatility of the underlying
        #[arg(long, default_value = "0.2")]
        volatility: f64,

        /// Option kind (call or put)
        #[arg(long, default_value = "call")]
        kind: String,

        /// Number of Monte Carlo simulations
        #[arg(short, long, default_value = "1000000")]
        num_simulations: u64,

        /// Seed for reproducible Monte Carlo runs
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run the cross-method validation harness on the reference scenario
    Check,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Price {
            spot,
            strike,
            rate,
            expiry,
            volatility,
            kind,
            num_simulations,
            seed,
        } => commands::price::run(
            spot,
            strike,
            rate,
            expiry,
            volatility,
            &kind,
            num_simulations,
            seed,
        ),
        Commands::Check => commands::check::run(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        // Catches argument conflicts (duplicate shorts, bad defaults) that
        // clap otherwise only reports at parse time.
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_flag_does_not_clash_with_price_args() {
        let cli = Cli::try_parse_from(["pricer", "price", "-v", "--volatility", "0.3"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Price { volatility, .. } => assert_eq!(volatility, 0.3),
            Commands::Check => panic!("expected the price subcommand"),
        }
    }
}
