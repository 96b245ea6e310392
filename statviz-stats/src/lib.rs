//! Statviz Statistics Engine
//!
//! Pure, synchronous statistics behind the dashboard's data-quality view:
//! descriptive summaries, equal-width histogram binning, a one-sample
//! Kolmogorov-Smirnov normality test against a fitted normal, and a
//! Brown-Forsythe (median-centered Levene) homogeneity-of-variance test.
//!
//! All functions follow the never-panic philosophy: every refusal is a
//! `StatError` value the caller can render inline next to statistics
//! that did compute. Inputs arrive as validated [`statviz_core::Sample`]
//! / [`statviz_core::GroupedSample`] values, so the engine itself never
//! re-checks for emptiness or NaN.

mod helpers;

pub mod distribution;
pub mod goodness;
pub mod histogram;
pub mod homogeneity;
pub mod summary;

pub use distribution::{erf, normal_cdf};
pub use goodness::{ks_test, KsResult};
pub use histogram::{Histogram, HistogramBin};
pub use homogeneity::{levene_test, Interpretation, LeveneResult};
pub use summary::Summary;
