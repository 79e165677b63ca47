//! Cross-method agreement tests.
//!
//! The four engines share no numerical machinery beyond `pricer_core`, so
//! agreement across a parameter sweep is strong evidence that each one is
//! correct. The closed form anchors every comparison.

use approx::assert_relative_eq;
use pricer_core::types::{OptionContract, OptionKind};
use pricer_engines::monte_carlo::{self, MonteCarloConfig};
use pricer_engines::validation::cross_check;
use pricer_engines::{closed_form, fourier, integration};

fn reference_contract(kind: OptionKind) -> OptionContract {
    OptionContract::new(100.0, 95.0, 0.05, 0.5, 0.2, kind).unwrap()
}

fn mc_config(num_simulations: u64) -> MonteCarloConfig {
    MonteCarloConfig::builder()
        .num_simulations(num_simulations)
        .seed(20_260_830)
        .build()
        .unwrap()
}

#[test]
fn reference_scenario_prices() {
    let call = closed_form::price(&reference_contract(OptionKind::Call)).unwrap();
    let put = closed_form::price(&reference_contract(OptionKind::Put)).unwrap();
    assert_relative_eq!(call.price, 9.8727, epsilon = 5e-4);
    assert_relative_eq!(put.price, 2.5272, epsilon = 5e-4);
}

#[test]
fn deterministic_engines_agree_across_parameter_sweep() {
    for spot in [80.0, 100.0, 120.0] {
        for strike in [70.0, 100.0, 140.0] {
            for vol in [0.1, 0.25, 0.5] {
                for expiry in [0.1, 1.0, 3.0] {
                    for kind in [OptionKind::Call, OptionKind::Put] {
                        let contract =
                            OptionContract::new(spot, strike, 0.03, expiry, vol, kind).unwrap();
                        let analytic = closed_form::price(&contract).unwrap().price;
                        let by_quadrature = integration::price(&contract).unwrap().price;
                        let by_inversion = fourier::price(&contract).unwrap().price;
                        assert!(
                            (by_quadrature - analytic).abs() < 1e-4,
                            "integration deviates at S={spot} K={strike} σ={vol} T={expiry} {kind}: \
                             {by_quadrature} vs {analytic}"
                        );
                        assert!(
                            (by_inversion - analytic).abs() < 1e-4,
                            "fourier deviates at S={spot} K={strike} σ={vol} T={expiry} {kind}: \
                             {by_inversion} vs {analytic}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn monte_carlo_agrees_within_standard_errors() {
    for kind in [OptionKind::Call, OptionKind::Put] {
        let contract = reference_contract(kind);
        let analytic = closed_form::price(&contract).unwrap().price;
        let estimate = monte_carlo::price(&contract, &mc_config(400_000)).unwrap();
        let se = estimate.std_error.unwrap();
        assert!(se > 0.0);
        assert!(
            (estimate.price - analytic).abs() < 5.0 * se,
            "Monte Carlo {kind} off by more than 5 standard errors"
        );
    }
}

#[test]
fn put_call_parity_holds_per_method() {
    let call = OptionContract::new(100.0, 95.0, 0.05, 0.5, 0.2, OptionKind::Call).unwrap();
    let put = call.flipped();
    let forward = 100.0 - 95.0 * (-0.05_f64 * 0.5).exp();

    let analytic =
        closed_form::price(&call).unwrap().price - closed_form::price(&put).unwrap().price;
    assert_relative_eq!(analytic, forward, epsilon = 1e-10);

    let by_quadrature =
        integration::price(&call).unwrap().price - integration::price(&put).unwrap().price;
    assert_relative_eq!(by_quadrature, forward, epsilon = 1e-6);

    let by_inversion = fourier::price(&call).unwrap().price - fourier::price(&put).unwrap().price;
    assert_relative_eq!(by_inversion, forward, epsilon = 1e-6);

    // Same seed for both legs, so the parity gap is itself a Monte Carlo
    // estimate with a much smaller standard error than either leg.
    let config = mc_config(400_000);
    let mc_call = monte_carlo::price(&call, &config).unwrap();
    let mc_put = monte_carlo::price(&put, &config).unwrap();
    let combined_se = mc_call.std_error.unwrap() + mc_put.std_error.unwrap();
    assert!((mc_call.price - mc_put.price - forward).abs() < 5.0 * combined_se);
}

#[test]
fn monte_carlo_standard_error_scales_as_inverse_sqrt_n() {
    let contract = reference_contract(OptionKind::Call);
    let se_small = monte_carlo::price(&contract, &mc_config(50_000))
        .unwrap()
        .std_error
        .unwrap();
    let se_large = monte_carlo::price(&contract, &mc_config(200_000))
        .unwrap()
        .std_error
        .unwrap();
    // Quadrupling the sample count should roughly halve the standard error.
    let ratio = se_small / se_large;
    assert!(
        (1.6..2.4).contains(&ratio),
        "standard error ratio {ratio} outside the expected band around 2"
    );
}

#[test]
fn monte_carlo_is_reproducible_across_runs() {
    let contract = reference_contract(OptionKind::Call);
    let config = mc_config(100_000);
    let first = monte_carlo::price(&contract, &config).unwrap();
    let second = monte_carlo::price(&contract, &config).unwrap();
    assert_eq!(first.price.to_bits(), second.price.to_bits());
    assert_eq!(first.std_error, second.std_error);
}

#[test]
fn cross_check_report_passes_on_reference_scenario() {
    let report = cross_check(&reference_contract(OptionKind::Call), &mc_config(200_000)).unwrap();
    assert!(report.passes(1e-4, 5.0), "{report:?}");
    assert!(report.integration_deviation() < 1e-6);
    assert!(report.fourier_deviation() < 1e-6);
}

#[test]
fn deep_out_of_the_money_prices_vanish() {
    let contract = OptionContract::new(100.0, 1e6, 0.05, 0.5, 0.2, OptionKind::Call).unwrap();
    assert!(closed_form::price(&contract).unwrap().price < 1e-12);
    assert!(integration::price(&contract).unwrap().price < 1e-9);
    let estimate = monte_carlo::price(&contract, &mc_config(100_000)).unwrap();
    assert_eq!(estimate.price, 0.0);
}
