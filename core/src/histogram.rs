//! Fixed-width binning of win-count samples for display.
//!
//! The core knows nothing about rendering; it only turns a sample into
//! bars a front end can draw.

use crate::types::WinCount;
use serde::{Deserialize, Serialize};

/// Bar count used when the caller does not choose otherwise.
pub const DEFAULT_BIN_COUNT: usize = 10;

/// One bar: `lower` is inclusive, `upper` exclusive — except the last
/// bin, which also absorbs the sample maximum.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistogramBin {
    pub lower: WinCount,
    pub upper: WinCount,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Histogram {
    pub bin_width: WinCount,
    pub bins:      Vec<HistogramBin>,
}

impl Histogram {
    /// Bin a sample into `bin_count` fixed-width bars spanning
    /// [min, max]. Bin width is `ceil((max - min) / bin_count)`, clamped
    /// to at least 1; values at or beyond the last nominal edge land in
    /// the last bin, so counts always sum to the sample size. An empty
    /// sample (or a zero `bin_count`) yields no bins.
    pub fn from_sample(sample: &[WinCount], bin_count: usize) -> Self {
        if sample.is_empty() || bin_count == 0 {
            return Self {
                bin_width: 1,
                bins:      Vec::new(),
            };
        }

        let min = *sample.iter().min().unwrap_or(&0);
        let max = *sample.iter().max().unwrap_or(&0);
        let bin_width = (((max - min) as f64 / bin_count as f64).ceil().max(1.0)) as WinCount;

        let mut counts = vec![0u32; bin_count];
        for &value in sample {
            let idx = (((value - min) / bin_width) as usize).min(bin_count - 1);
            counts[idx] += 1;
        }

        // Edge labels are computed in u64 and clamped so a sample sitting
        // at the top of the WinCount range cannot wrap them.
        let bins = counts
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                let lower = (min as u64 + i as u64 * bin_width as u64).min(WinCount::MAX as u64);
                let upper = (lower + bin_width as u64).min(WinCount::MAX as u64);
                HistogramBin {
                    lower: lower as WinCount,
                    upper: upper as WinCount,
                    count,
                }
            })
            .collect();

        Self { bin_width, bins }
    }
}
