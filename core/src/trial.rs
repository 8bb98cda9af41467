//! The trial engine — one run of Bernoulli rounds under the pity rule.
//!
//! RULES:
//!   - The pity guard is checked before the draw, every round.
//!   - A guaranteed win consumes no randomness.
//!   - A run never contains `pity_limit` consecutive losses: the round
//!     that would complete such a streak pays out instead.

use crate::params::SimParams;
use crate::rng::TrialRng;
use crate::types::WinCount;

/// Play `rounds_per_run` rounds and return the number of wins.
///
/// Per round, in order:
///   1. If this round would be the `pity_limit`-th consecutive loss,
///      it is a guaranteed win — no draw is consumed.
///   2. Otherwise draw once in [0, 1): a value below `win_probability`
///      is a win and resets the loss streak; anything else extends it.
///
/// Pure function of its inputs: identical parameters and RNG state
/// always produce the identical count. Bounds checking is the caller's
/// job (`SimParams::validate`); see the experiment module.
pub fn simulate_run(params: &SimParams, rng: &mut TrialRng) -> WinCount {
    let mut wins: WinCount = 0;
    let mut loss_streak: u32 = 0;

    for _ in 0..params.rounds_per_run {
        if loss_streak + 1 >= params.pity_limit {
            wins += 1;
            loss_streak = 0;
        } else if rng.chance(params.win_probability) {
            wins += 1;
            loss_streak = 0;
        } else {
            loss_streak += 1;
        }
    }

    wins
}
