//! Descriptive summary: central tendency, dispersion, extrema

use crate::helpers::{mean, median_sorted, population_variance};
use serde::{Deserialize, Serialize};
use statviz_core::Sample;

/// Descriptive statistics for a numeric column.
///
/// `variance` is the population variance (divisor n, not n-1); the
/// standard deviation is its square root. That scale is part of the
/// user-visible contract, so it must not be silently swapped for the
/// sample variance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Most frequent value; ties resolve to the smallest such value.
    pub mode: f64,
    pub variance: f64,
    pub std_deviation: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    /// Compute a summary of the sample.
    ///
    /// Infallible: a `Sample` is non-empty and all-finite by
    /// construction, and every statistic below is defined for n = 1.
    pub fn from_sample(sample: &Sample) -> Self {
        let values = sample.values();
        let n = values.len();
        let sorted_values = sample.sorted();

        let mean = mean(values);
        let median = median_sorted(&sorted_values);
        let mode = mode_of_sorted(&sorted_values);
        let variance = population_variance(values);

        Self {
            count: n,
            mean,
            median,
            mode,
            variance,
            std_deviation: variance.sqrt(),
            min: sorted_values[0],
            max: sorted_values[n - 1],
        }
    }

    /// Spread of the sample (max - min).
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Mode of an ascending-sorted slice.
///
/// Equal values are contiguous after sorting, so a single run scan
/// suffices. Strictly-longer runs win, which makes the smallest value
/// the deterministic choice among maximal-frequency ties.
fn mode_of_sorted(sorted: &[f64]) -> f64 {
    let mut best = sorted[0];
    let mut best_len = 0;
    let mut i = 0;
    while i < sorted.len() {
        let mut j = i;
        while j < sorted.len() && sorted[j] == sorted[i] {
            j += 1;
        }
        if j - i > best_len {
            best_len = j - i;
            best = sorted[i];
        }
        i = j;
    }
    best
}
