//! Monte Carlo study of the "pity" mechanic: independent Bernoulli
//! rounds where a capped loss streak forces a payout.
//!
//! Two layers:
//!   - `trial` plays a single run of rounds under the pity rule.
//!   - `experiment` repeats it, fits the resulting win-count sample,
//!     and computes the no-pity baseline the guarantee is measured
//!     against.
//!
//! Everything is deterministic given a master seed; see `rng`.

pub mod error;
pub mod experiment;
pub mod histogram;
pub mod params;
pub mod rng;
pub mod stats;
pub mod trial;
pub mod types;
