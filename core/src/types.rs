//! Shared primitive types used across the simulator.

/// Total wins accumulated over a single run of rounds.
pub type WinCount = u32;

/// The win counts of every run in one experiment, in run-index order.
pub type Sample = Vec<WinCount>;
