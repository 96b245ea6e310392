//! Goodness-of-fit: one-sample Kolmogorov-Smirnov against a fitted normal

use crate::distribution::normal_cdf;
use crate::helpers::{mean, population_variance};
use serde::{Deserialize, Serialize};
use statviz_core::{Sample, StatError};
use tracing::debug;

/// Result of the Kolmogorov-Smirnov normality test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KsResult {
    /// Maximum vertical distance between the empirical CDF and the
    /// fitted normal CDF.
    pub d: f64,
    /// Classical large-sample approximation `exp(-2 * n * d^2)`.
    pub p_value: f64,
}

/// One-sample KS test of the sample against the normal distribution
/// fitted to its own mean and population standard deviation.
///
/// Because the reference distribution is estimated from the same sample
/// (and no Lilliefors correction is applied), the p-value is an
/// approximation of the true tail probability, optimistic or
/// conservative depending on n. That is a documented limitation of this
/// engine, not a defect to correct silently.
///
/// A constant sample has zero standard deviation and therefore no
/// fitted CDF; it is refused as degenerate. This also covers n = 1.
pub fn ks_test(sample: &Sample) -> Result<KsResult, StatError> {
    let n = sample.len();
    let sorted_values = sample.sorted();

    let fitted_mean = mean(&sorted_values);
    let fitted_std = population_variance(&sorted_values).sqrt();

    if fitted_std == 0.0 {
        debug!(n, "ks_test refused: constant sample");
        return Err(StatError::degenerate_distribution(
            "constant sample has zero standard deviation",
        ));
    }

    let mut d = 0.0_f64;
    for (i, value) in sorted_values.iter().enumerate() {
        let f_emp = (i + 1) as f64 / n as f64;
        let f_theo = normal_cdf(*value, fitted_mean, fitted_std)?;
        d = d.max((f_emp - f_theo).abs());
    }

    let p_value = (-2.0 * n as f64 * d * d).exp();
    Ok(KsResult { d, p_value })
}
