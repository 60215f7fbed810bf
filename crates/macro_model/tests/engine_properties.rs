//! Integration tests for the propagation engine's contract: determinism,
//! linearity in the amplitude, boundary validation, decay and the
//! documented monetary-policy calibration anchor.

use approx::assert_relative_eq;
use macro_core::{CalibrationParameters, Variable};
use macro_model::{simulate, ShockSpecification, ShockType};
use proptest::prelude::*;

fn default_run(shock: ShockType, amplitude: f64, horizon: usize) -> macro_model::Trajectory {
    let params = CalibrationParameters::default();
    let spec = ShockSpecification::new(shock, amplitude, horizon).unwrap();
    simulate(&spec, &params).unwrap()
}

#[test]
fn repeated_runs_are_byte_identical() {
    let a = default_run(ShockType::RiskPremium, 0.02, 40);
    let b = default_run(ShockType::RiskPremium, 0.02, 40);
    assert_eq!(a, b);
}

#[test]
fn boundary_values_of_amplitude_and_horizon() {
    let params = CalibrationParameters::default();

    // inside the supported ranges
    for (amplitude, horizon) in [(0.001, 40), (0.05, 40), (0.01, 20), (0.01, 60)] {
        let spec = ShockSpecification::new(ShockType::MonetaryPolicy, amplitude, horizon).unwrap();
        assert!(simulate(&spec, &params).is_ok());
    }

    // outside: rejected at specification time, never clamped
    assert!(ShockSpecification::new(ShockType::MonetaryPolicy, 0.0005, 40).is_err());
    assert!(ShockSpecification::new(ShockType::MonetaryPolicy, 0.01, 61).is_err());
    assert!(ShockSpecification::new(ShockType::MonetaryPolicy, 0.01, 19).is_err());
    assert!(ShockSpecification::new(ShockType::MonetaryPolicy, 0.0501, 40).is_err());
}

#[test]
fn no_variable_ends_above_its_peak() {
    for shock in ShockType::ALL {
        let trajectory = default_run(shock, 0.01, 40);
        for variable in Variable::ALL {
            let column = trajectory.column(variable);
            let peak = column.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()));
            let last = column.last().unwrap().abs();
            assert!(
                last <= peak,
                "{shock} {variable}: final {last} above peak {peak}"
            );
        }
    }
}

#[test]
fn responses_decay_towards_the_horizon() {
    // after three quarters of the horizon, every response should sit well
    // below its peak (persistence < 1 everywhere)
    for shock in ShockType::ALL {
        let trajectory = default_run(shock, 0.05, 60);
        for variable in Variable::ALL {
            let column = trajectory.column(variable);
            let peak = column.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()));
            if peak == 0.0 {
                continue;
            }
            let late = column[45..].iter().fold(0.0_f64, |acc, x| acc.max(x.abs()));
            assert!(
                late < 0.5 * peak,
                "{shock} {variable}: tail {late} vs peak {peak}"
            );
        }
    }
}

#[test]
fn monetary_policy_calibration_anchor() {
    // +1% on the policy rate over 40 quarters: output bottoms out within
    // periods 3..6 and sits near -0.8% after one year (period 4).
    let trajectory = default_run(ShockType::MonetaryPolicy, 0.01, 40);

    let output = trajectory.column(Variable::Output);
    let (peak_period, peak) = output
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.abs().partial_cmp(&b.1.abs()).unwrap())
        .map(|(t, x)| (t, *x))
        .unwrap();
    assert!(peak < 0.0);
    assert!((3..=6).contains(&peak_period), "peak at {peak_period}");

    let after_one_year = trajectory.deviation(Variable::Output, 4);
    assert!(
        (-0.0088..=-0.0072).contains(&after_one_year),
        "output after one year: {after_one_year}"
    );

    // inflation falls with the output gap but by less than output
    let inflation_q8 = trajectory.deviation(Variable::Inflation, 8);
    let output_q8 = trajectory.deviation(Variable::Output, 8);
    assert!(inflation_q8 < 0.0);
    assert!(inflation_q8.abs() < output_q8.abs());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn determinism_over_the_input_domain(
        shock_index in 0usize..5,
        amplitude in 0.001f64..=0.05,
        horizon in 20usize..=60,
    ) {
        let shock = ShockType::ALL[shock_index];
        let a = default_run(shock, amplitude, horizon);
        let b = default_run(shock, amplitude, horizon);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn deviations_scale_linearly_with_amplitude(
        shock_index in 0usize..5,
        amplitude in 0.001f64..=0.0125,
        scale in 2usize..=4,
        horizon in 20usize..=60,
    ) {
        let shock = ShockType::ALL[shock_index];
        let base = default_run(shock, amplitude, horizon);
        let scaled = default_run(shock, amplitude * scale as f64, horizon);
        for period in 0..=horizon {
            for variable in Variable::ALL {
                let expected = base.deviation(variable, period) * scale as f64;
                let actual = scaled.deviation(variable, period);
                prop_assert!(
                    (expected - actual).abs() <= 1e-12 + 1e-9 * expected.abs(),
                    "{} at ({}, {}): {} vs {}",
                    shock, variable, period, expected, actual
                );
            }
        }
    }

    #[test]
    fn out_of_range_amplitude_is_always_rejected(
        amplitude in prop_oneof![-1.0f64..0.001, 0.0500001f64..10.0],
    ) {
        prop_assert!(ShockSpecification::new(ShockType::Productivity, amplitude, 40).is_err());
    }
}

#[test]
fn trajectory_serialises_as_a_table() {
    let trajectory = default_run(ShockType::FiscalPolicy, 0.01, 20);
    let json = serde_json::to_value(&trajectory).unwrap();
    let rows = json["deviations"].as_array().unwrap();
    assert_eq!(rows.len(), 21);
    assert_eq!(rows[0].as_array().unwrap().len(), Variable::COUNT);
}

#[test]
fn levels_fold_deviations_onto_steady_state() {
    let trajectory = default_run(ShockType::FiscalPolicy, 0.01, 20);
    let params = CalibrationParameters::default();
    let dev = trajectory.deviation(Variable::Output, 1);
    assert_relative_eq!(
        trajectory.level(Variable::Output, 1),
        params.steady_state.output * (1.0 + dev),
        epsilon = 1e-12
    );
}
