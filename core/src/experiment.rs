//! Experiment aggregation — many independent runs, one distribution.
//!
//! RULES:
//!   - Parameters are validated before the first run. There is no
//!     partially completed experiment: all of the sample or none of it.
//!   - Run i always consumes the RNG stream derived for index i, so the
//!     sample is a pure function of (params, master_seed).
//!   - No I/O here. Rendering and any on-disk artifacts belong to the
//!     callers.

use serde::{Deserialize, Serialize};

use crate::{
    error::SimResult,
    params::SimParams,
    rng::RngBank,
    stats::DistributionSummary,
    trial::simulate_run,
    types::Sample,
};

/// Everything a front end needs to draw the result: the raw win-count
/// sample, its fitted Normal, and the no-pity baseline Normal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExperimentOutcome {
    pub sample:              Sample,
    pub empirical_fit:       DistributionSummary,
    pub theoretical_no_pity: DistributionSummary,
}

/// A validated parameter set bound to a master seed.
pub struct Experiment {
    params:   SimParams,
    rng_bank: RngBank,
}

impl Experiment {
    /// Validate `params` and bind the experiment to `master_seed`.
    /// Rejection happens here, before any randomness is consumed.
    pub fn new(params: SimParams, master_seed: u64) -> SimResult<Self> {
        params.validate()?;
        Ok(Self {
            params,
            rng_bank: RngBank::new(master_seed),
        })
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    /// Run every trial, then fit the sample and compute the baseline.
    pub fn run(&self) -> ExperimentOutcome {
        let mut sample = Sample::with_capacity(self.params.num_runs as usize);
        for run_index in 0..self.params.num_runs {
            let mut rng = self.rng_bank.for_run(run_index as u64);
            let wins = simulate_run(&self.params, &mut rng);
            log::debug!("run={run_index} wins={wins}");
            sample.push(wins);
        }

        let empirical_fit = DistributionSummary::fit(&sample);
        let theoretical_no_pity = DistributionSummary::no_pity_baseline(
            self.params.rounds_per_run,
            self.params.win_probability,
        );
        log::info!(
            "experiment done: runs={} empirical mean={:.3} std={:.3} | no-pity mean={:.3} std={:.3}",
            self.params.num_runs,
            empirical_fit.mean,
            empirical_fit.std_dev,
            theoretical_no_pity.mean,
            theoretical_no_pity.std_dev,
        );

        ExperimentOutcome {
            sample,
            empirical_fit,
            theoretical_no_pity,
        }
    }
}

/// Validate and run in one shot — the call front ends make.
pub fn run_experiment(params: SimParams, master_seed: u64) -> SimResult<ExperimentOutcome> {
    Ok(Experiment::new(params, master_seed)?.run())
}
