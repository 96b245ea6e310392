//! Validated sample containers
//!
//! A `Sample` is guaranteed non-empty and all-finite at construction, so
//! the statistics in `statviz-stats` never re-check their inputs. The
//! presentation layer is responsible for pulling a column of cells out of
//! the uploaded table; anything non-numeric lands here as NaN and is
//! filtered by `Sample::clean`.

use serde::Serialize;
use thiserror::Error;

/// Error type for sample construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    #[error("sample contains no usable numeric values")]
    Empty,

    #[error("sample contains a non-finite value at index {0}")]
    NonFinite(usize),

    #[error("expected one group label per value: {values} values vs {labels} labels")]
    LengthMismatch { values: usize, labels: usize },
}

/// An ordered, non-empty sequence of finite observations.
///
/// Duplicates are permitted and order is irrelevant to every statistic;
/// it only matters for keeping correspondence with group labels, which
/// [`GroupedSample`] handles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample(Vec<f64>);

impl Sample {
    /// Create a sample, rejecting empty input and non-finite entries.
    pub fn new(values: Vec<f64>) -> Result<Self, SampleError> {
        if values.is_empty() {
            return Err(SampleError::Empty);
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(SampleError::NonFinite(index));
        }
        Ok(Self(values))
    }

    /// Build a sample from raw column data, dropping non-finite entries.
    ///
    /// Fails with [`SampleError::Empty`] when nothing usable remains,
    /// which is distinct from a valid all-zero column.
    pub fn clean<I>(values: I) -> Result<Self, SampleError>
    where
        I: IntoIterator<Item = f64>,
    {
        let kept: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
        if kept.is_empty() {
            return Err(SampleError::Empty);
        }
        Ok(Self(kept))
    }

    /// Number of observations (always at least 1).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// A sample is never empty by construction.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The observations in their original order.
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// The observations sorted ascending (returns a new vector).
    pub fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.0.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
    }
}

/// A sample paired element-wise with categorical group labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedSample {
    values: Vec<f64>,
    labels: Vec<String>,
}

impl GroupedSample {
    /// Create a grouped sample, enforcing equal lengths and finiteness.
    pub fn new(values: Vec<f64>, labels: Vec<String>) -> Result<Self, SampleError> {
        if values.len() != labels.len() {
            return Err(SampleError::LengthMismatch {
                values: values.len(),
                labels: labels.len(),
            });
        }
        if values.is_empty() {
            return Err(SampleError::Empty);
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(SampleError::NonFinite(index));
        }
        Ok(Self { values, labels })
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// A grouped sample is never empty by construction.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The observations in their original order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The group labels, parallel to `values`.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of distinct group labels.
    pub fn distinct_labels(&self) -> usize {
        self.groups().len()
    }

    /// Partition values by label, in first-appearance order.
    ///
    /// Group count is expected to be small (a categorical column), so a
    /// linear scan per element keeps the ordering stable without a map.
    pub fn groups(&self) -> Vec<(&str, Vec<f64>)> {
        let mut groups: Vec<(&str, Vec<f64>)> = Vec::new();
        for (value, label) in self.values.iter().zip(&self.labels) {
            match groups.iter_mut().find(|(name, _)| *name == label.as_str()) {
                Some((_, members)) => members.push(*value),
                None => groups.push((label.as_str(), vec![*value])),
            }
        }
        groups
    }
}
