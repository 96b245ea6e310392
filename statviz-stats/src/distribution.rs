//! Normal distribution primitives: erf and the Gaussian CDF

use statviz_core::StatError;

/// Error function approximation.
///
/// Abramowitz and Stegun formula 7.1.26, with maximal absolute error of
/// 1.5e-7. The coefficient set is fixed: downstream p-values are only
/// comparable across runs and platforms because this polynomial never
/// changes. Swapping in a higher-precision erf would shift every
/// reported KS p-value.
pub fn erf(x: f64) -> f64 {
    let a1 = 0.254829592;
    let a2 = -0.284496736;
    let a3 = 1.421413741;
    let a4 = -1.453152027;
    let a5 = 1.061405429;
    let p = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + p * x);
    let y = 1.0 - (((((a5 * t + a4) * t) + a3) * t + a2) * t + a1) * t * (-x * x).exp();

    sign * y
}

/// CDF of the normal distribution with the given mean and standard
/// deviation: `P(X <= x) = 0.5 * (1 + erf((x - mean) / (std * sqrt(2))))`.
///
/// A non-positive standard deviation has no CDF; it is refused as a
/// degenerate distribution rather than letting a division by zero
/// propagate NaN into a displayed result.
pub fn normal_cdf(x: f64, mean: f64, std: f64) -> Result<f64, StatError> {
    if std <= 0.0 {
        return Err(StatError::degenerate_distribution(
            "standard deviation must be positive",
        ));
    }
    Ok(0.5 * (1.0 + erf((x - mean) / (std * std::f64::consts::SQRT_2))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use statviz_core::codes;

    // Reference erf values to 10 decimal places (Abramowitz & Stegun
    // table 7.1 / mpmath).
    const REFERENCE: [(f64, f64); 8] = [
        (0.1, 0.1124629160),
        (0.25, 0.2763263902),
        (0.5, 0.5204998778),
        (0.75, 0.7111556337),
        (1.0, 0.8427007929),
        (1.5, 0.9661051465),
        (2.0, 0.9953222650),
        (3.0, 0.9999779095),
    ];

    #[test]
    fn test_erf_zero() {
        // The A&S coefficients sum to 0.999999999, so erf(0) is ~1e-9
        // rather than exactly zero; the contract is the 1.5e-7 bound.
        assert!(erf(0.0).abs() <= 1.5e-7, "erf(0) = {}", erf(0.0));
    }

    #[test]
    fn test_erf_matches_reference_within_stated_bound() {
        for (x, expected) in REFERENCE {
            let got = erf(x);
            assert!(
                (got - expected).abs() <= 1.5e-7,
                "erf({}) = {}, expected {} within 1.5e-7",
                x,
                got,
                expected
            );
        }
    }

    #[test]
    fn test_erf_odd_symmetry() {
        for (x, _) in REFERENCE {
            assert!(
                (erf(-x) + erf(x)).abs() <= 3.0e-7,
                "erf(-x) should equal -erf(x) for x = {}",
                x
            );
        }
    }

    #[test]
    fn test_erf_saturates() {
        assert!(erf(5.0) > 0.999999);
        assert!(erf(-5.0) < -0.999999);
    }

    #[test]
    fn test_normal_cdf_at_mean_is_half() {
        for std in [0.5, 1.0, 20.0] {
            // erf(0) is ~1e-9 (see test_erf_zero), so the midpoint is
            // 0.5 only to within the approximation's error bound
            let cdf = normal_cdf(10.0, 10.0, std).unwrap();
            assert!((cdf - 0.5).abs() <= 1e-7, "cdf = {}", cdf);
        }
    }

    #[test]
    fn test_normal_cdf_monotone() {
        let lo = normal_cdf(-1.0, 0.0, 1.0).unwrap();
        let hi = normal_cdf(1.0, 0.0, 1.0).unwrap();
        assert!(lo < 0.5 && hi > 0.5);
        // one std each side: ~0.1587 and ~0.8413
        assert!((lo - 0.1587).abs() < 1e-3);
        assert!((hi - 0.8413).abs() < 1e-3);
    }

    #[test]
    fn test_normal_cdf_rejects_zero_std() {
        let err = normal_cdf(1.0, 0.0, 0.0).unwrap_err();
        assert_eq!(err.code, codes::DEGENERATE_DISTRIBUTION);
    }
}
