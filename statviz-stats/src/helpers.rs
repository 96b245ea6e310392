//! Helper functions for statistical operations
//!
//! Small numeric utilities shared by the summary, goodness, and
//! homogeneity modules. Callers guarantee non-empty slices (inputs enter
//! the engine as validated `Sample` values).

/// Sum of a slice
pub(crate) fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Arithmetic mean of a non-empty slice
pub(crate) fn mean(values: &[f64]) -> f64 {
    sum(values) / values.len() as f64
}

/// Sort values ascending (returns a new vector)
pub(crate) fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Median of an ascending-sorted slice.
///
/// Even counts average the two central values; odd counts take the exact
/// central value.
pub(crate) fn median_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// Population variance (divisor n) of a non-empty slice
pub(crate) fn population_variance(values: &[f64]) -> f64 {
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum() {
        assert_eq!(sum(&[1.0, 2.0, 3.0]), 6.0);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[2.0, 4.0, 6.0]), 4.0);
    }

    #[test]
    fn test_sorted() {
        assert_eq!(sorted(&[3.0, 1.0, 2.0]), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_median_odd() {
        assert_eq!(median_sorted(&[1.0, 2.0, 3.0]), 2.0);
    }

    #[test]
    fn test_median_even() {
        assert_eq!(median_sorted(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    }

    #[test]
    fn test_population_variance() {
        // [1..5]: mean 3, squared deviations 4+1+0+1+4 = 10, divisor 5
        assert_eq!(population_variance(&[1.0, 2.0, 3.0, 4.0, 5.0]), 2.0);
    }
}
