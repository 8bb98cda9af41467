//! Distribution summaries: the empirical fit and the no-pity baseline.

use crate::types::WinCount;
use serde::{Deserialize, Serialize};

/// A mean/standard-deviation pair describing one Normal curve.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DistributionSummary {
    pub mean:    f64,
    pub std_dev: f64,
}

impl DistributionSummary {
    /// Maximum-likelihood Normal fit of a win-count sample: the sample
    /// mean and the POPULATION standard deviation (divisor n, not n-1).
    /// A one-point sample therefore fits `std_dev == 0.0` instead of
    /// producing NaN. An empty sample fits a zero summary.
    pub fn fit(sample: &[WinCount]) -> Self {
        if sample.is_empty() {
            return Self { mean: 0.0, std_dev: 0.0 };
        }
        let n = sample.len() as f64;
        let mean = sample.iter().map(|&w| w as f64).sum::<f64>() / n;
        let variance = sample
            .iter()
            .map(|&w| {
                let d = w as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n;
        Self {
            mean,
            std_dev: variance.sqrt(),
        }
    }

    /// Normal approximation of a Binomial(`rounds`, `win_probability`)
    /// win count — what the process would look like with no guarantee.
    /// Closed form, never touches a sample.
    pub fn no_pity_baseline(rounds: u32, win_probability: f64) -> Self {
        let n = rounds as f64;
        let variance = n * win_probability * (1.0 - win_probability);
        Self {
            mean:    n * win_probability,
            std_dev: variance.sqrt(),
        }
    }

    /// Normal density at `x`. A degenerate summary (`std_dev <= 0`) has
    /// no finite curve; this returns 0.0 so renderers simply skip it.
    pub fn pdf(&self, x: f64) -> f64 {
        if self.std_dev <= 0.0 {
            return 0.0;
        }
        let z = (x - self.mean) / self.std_dev;
        (-0.5 * z * z).exp() / (self.std_dev * (2.0 * std::f64::consts::PI).sqrt())
    }
}
