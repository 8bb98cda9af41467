//! Experiment-level aggregation: sample shape, fitted statistics, the
//! no-pity baseline, and parameter validation at the entry point.

use pity_core::{
    error::SimError,
    experiment::run_experiment,
    params::SimParams,
    stats::DistributionSummary,
};

const SEED: u64 = 9;

#[test]
fn sample_has_exactly_num_runs_entries() {
    for num_runs in [1, 2, 50, 1000] {
        let params = SimParams {
            num_runs,
            ..SimParams::default_test()
        };
        let outcome = run_experiment(params, SEED).expect("valid params");
        assert_eq!(outcome.sample.len(), num_runs as usize);
    }
}

#[test]
fn single_run_fit_has_zero_std_dev() {
    let params = SimParams {
        num_runs: 1,
        ..SimParams::default_test()
    };
    let outcome = run_experiment(params, SEED).expect("valid params");

    assert_eq!(outcome.sample.len(), 1);
    assert_eq!(outcome.empirical_fit.mean, outcome.sample[0] as f64);
    assert_eq!(
        outcome.empirical_fit.std_dev, 0.0,
        "one observation has no spread"
    );
    assert!(outcome.empirical_fit.mean.is_finite());
}

#[test]
fn rejects_out_of_range_parameters_before_running() {
    let base = SimParams::default_test();
    let bad = [
        SimParams { win_probability: -0.01, ..base },
        SimParams { win_probability: 1.01, ..base },
        SimParams { win_probability: f64::NAN, ..base },
        SimParams { rounds_per_run: 0, ..base },
        SimParams { pity_limit: 0, ..base },
        SimParams { num_runs: 0, ..base },
    ];

    for params in bad {
        let err = run_experiment(params, SEED).unwrap_err();
        assert!(
            matches!(err, SimError::InvalidParameters { .. }),
            "expected InvalidParameters, got {err:?}"
        );
    }
}

#[test]
fn no_pity_baseline_uses_the_closed_form() {
    let params = SimParams {
        win_probability: 0.05,
        rounds_per_run: 2000,
        ..SimParams::default_test()
    };
    let outcome = run_experiment(params, SEED).expect("valid params");

    let expected_mean = 2000.0 * 0.05;
    let expected_std = (2000.0 * 0.05 * 0.95f64).sqrt();
    assert!((outcome.theoretical_no_pity.mean - expected_mean).abs() < 1e-9);
    assert!((outcome.theoretical_no_pity.std_dev - expected_std).abs() < 1e-9);
}

#[test]
fn empirical_fit_matches_recomputed_sample_statistics() {
    let params = SimParams {
        num_runs: 120,
        ..SimParams::default_test()
    };
    let outcome = run_experiment(params, SEED).expect("valid params");

    let refit = DistributionSummary::fit(&outcome.sample);
    assert!((outcome.empirical_fit.mean - refit.mean).abs() < 1e-9);
    assert!((outcome.empirical_fit.std_dev - refit.std_dev).abs() < 1e-9);
}

#[test]
fn guarantee_lifts_the_mean_above_the_no_pity_baseline() {
    // At p = 0.05 a pity_limit of 10 fires constantly (the unassisted
    // chance of a 9-loss streak is ~0.63 per streak start), so the lift
    // over n*p = 50 is large. Assert a wide margin, not a point value.
    let params = SimParams {
        win_probability: 0.05,
        rounds_per_run: 1000,
        pity_limit: 10,
        num_runs: 300,
    };
    let outcome = run_experiment(params, 17).expect("valid params");

    assert!(
        outcome.empirical_fit.mean > outcome.theoretical_no_pity.mean + 20.0,
        "empirical mean {} should sit well above the no-pity baseline {}",
        outcome.empirical_fit.mean,
        outcome.theoretical_no_pity.mean
    );
}

#[test]
fn mean_wins_rise_with_win_probability() {
    // With pity_limit = 100 the guarantee almost never fires at these
    // probabilities, so the means track n*p: roughly 200, 600, 1000.
    // The asserted gap of 50 is tiny next to the expected 400.
    let mut last = f64::NEG_INFINITY;
    for (seed, win_probability) in [(100, 0.1), (101, 0.3), (102, 0.5)] {
        let params = SimParams {
            win_probability,
            rounds_per_run: 2000,
            pity_limit: 100,
            num_runs: 200,
        };
        let outcome = run_experiment(params, seed).expect("valid params");
        assert!(
            outcome.empirical_fit.mean > last + 50.0,
            "mean at p={win_probability} is {}, not clearly above {last}",
            outcome.empirical_fit.mean
        );
        last = outcome.empirical_fit.mean;
    }
}

#[test]
fn pity_only_run_pays_exactly_rounds_over_limit() {
    let params = SimParams {
        win_probability: 0.0,
        rounds_per_run: 2000,
        pity_limit: 20,
        num_runs: 1,
    };
    let outcome = run_experiment(params, SEED).expect("valid params");
    assert_eq!(outcome.sample, vec![100]);
}

#[test]
fn certain_wins_fill_the_whole_sample() {
    let params = SimParams {
        win_probability: 1.0,
        rounds_per_run: 500,
        pity_limit: 20,
        num_runs: 5,
    };
    let outcome = run_experiment(params, SEED).expect("valid params");

    assert_eq!(outcome.sample, vec![500u32; 5]);
    assert_eq!(outcome.empirical_fit.mean, 500.0);
    assert_eq!(outcome.empirical_fit.std_dev, 0.0);
}
