//! The four knobs of a pity experiment, and their contract.

use crate::error::{SimError, SimResult};
use serde::{Deserialize, Serialize};

/// Parameters for one experiment.
///
/// `win_probability` must lie in [0, 1]; the three counts must be at
/// least 1. `validate` enforces exactly that contract — wider UI caps
/// belong to whatever front end collects the values.
///
/// Missing fields in a deserialized parameter set fall back to the
/// baseline defaults, so a form can submit only what the user changed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimParams {
    pub win_probability: f64,
    pub rounds_per_run:  u32,
    pub pity_limit:      u32,
    pub num_runs:        u32,
}

impl Default for SimParams {
    /// The baseline scenario: 1-in-20 rounds, a 20-loss pity guarantee,
    /// 2000 rounds per run, 1000 runs.
    fn default() -> Self {
        Self {
            win_probability: 0.05,
            rounds_per_run:  2000,
            pity_limit:      20,
            num_runs:        1000,
        }
    }
}

impl SimParams {
    /// Small, fast configuration for use in tests.
    pub fn default_test() -> Self {
        Self {
            win_probability: 0.25,
            rounds_per_run:  200,
            pity_limit:      5,
            num_runs:        50,
        }
    }

    /// Check every field invariant. Callers run this before the first
    /// trial; a failure means no randomness has been consumed at all.
    pub fn validate(&self) -> SimResult<()> {
        if !self.win_probability.is_finite() || !(0.0..=1.0).contains(&self.win_probability) {
            return Err(SimError::InvalidParameters {
                field:  "win_probability",
                reason: format!("must be a finite value in [0, 1], got {}", self.win_probability),
            });
        }
        if self.rounds_per_run == 0 {
            return Err(SimError::InvalidParameters {
                field:  "rounds_per_run",
                reason: "must be at least 1".into(),
            });
        }
        if self.pity_limit == 0 {
            return Err(SimError::InvalidParameters {
                field:  "pity_limit",
                reason: "must be at least 1".into(),
            });
        }
        if self.num_runs == 0 {
            return Err(SimError::InvalidParameters {
                field:  "num_runs",
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}
