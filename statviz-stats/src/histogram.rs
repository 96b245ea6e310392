//! Equal-width histogram binning for display

use serde::{Deserialize, Serialize};
use statviz_core::{Sample, StatError};

/// A single display bin: formatted range label plus frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Formatted `"lo - hi"` interval with fixed 2-decimal precision,
    /// ready for a chart axis.
    pub label: String,
    pub count: usize,
}

/// Equal-width frequency distribution over `[min, max]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
    /// Bin boundaries, `bins.len() + 1` entries.
    pub edges: Vec<f64>,
    /// Width of each bin; 0.0 for the degenerate single-bin case.
    pub bin_width: f64,
}

impl Histogram {
    /// Default bin count used by the dashboard's distribution chart.
    pub const DEFAULT_BIN_COUNT: usize = 10;

    /// Bin the sample into [`DEFAULT_BIN_COUNT`] equal-width bins.
    ///
    /// [`DEFAULT_BIN_COUNT`]: Self::DEFAULT_BIN_COUNT
    pub fn with_default_bins(sample: &Sample) -> Result<Self, StatError> {
        Self::from_sample(sample, Self::DEFAULT_BIN_COUNT)
    }

    /// Bin the sample into `bin_count` equal-width bins covering
    /// `[min, max]`.
    ///
    /// The maximum value lands exactly on the upper boundary and is
    /// counted in the last bin. An all-equal sample gets a single bin
    /// holding every value instead of a zero-width division.
    pub fn from_sample(sample: &Sample, bin_count: usize) -> Result<Self, StatError> {
        if bin_count == 0 {
            return Err(StatError::domain_error("bin count must be at least 1"));
        }

        let values = sample.values();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        if min == max {
            return Ok(Self {
                bins: vec![HistogramBin {
                    label: format_label(min, max),
                    count: values.len(),
                }],
                edges: vec![min, max],
                bin_width: 0.0,
            });
        }

        let bin_width = (max - min) / bin_count as f64;

        let mut counts = vec![0_usize; bin_count];
        for value in values {
            let mut index = ((value - min) / bin_width).floor() as usize;
            if index >= bin_count {
                index = bin_count - 1;
            }
            counts[index] += 1;
        }

        let edges: Vec<f64> = (0..=bin_count)
            .map(|i| min + bin_width * i as f64)
            .collect();

        let bins = counts
            .iter()
            .enumerate()
            .map(|(i, &count)| HistogramBin {
                label: format_label(edges[i], edges[i + 1]),
                count,
            })
            .collect();

        Ok(Self {
            bins,
            edges,
            bin_width,
        })
    }

    /// Total observations across all bins.
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// Running totals, one per bin.
    pub fn cumulative(&self) -> Vec<usize> {
        let mut running = 0;
        self.bins
            .iter()
            .map(|b| {
                running += b.count;
                running
            })
            .collect()
    }
}

fn format_label(lo: f64, hi: f64) -> String {
    format!("{:.2} - {:.2}", lo, hi)
}
