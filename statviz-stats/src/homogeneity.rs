//! Homogeneity of variance: Brown-Forsythe (median-centered Levene)

use crate::helpers::{mean, median_sorted, sorted, sum};
use serde::{Deserialize, Serialize};
use statviz_core::{GroupedSample, StatError};
use tracing::debug;

/// Heuristic reading of the W statistic.
///
/// `W > 1` is a rule of thumb, not a hypothesis-test decision: without
/// an F-distribution p-value the engine cannot state significance, and
/// callers must present this label as the weak heuristic it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpretation {
    /// Between-group spread of deviations exceeds within-group spread.
    Heterogeneous,
    /// No indication of unequal spread under the W > 1 rule of thumb.
    Homogeneous,
}

/// Result of the Brown-Forsythe test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeveneResult {
    /// One-way ANOVA F statistic over absolute deviations from group
    /// medians.
    pub w: f64,
    pub df_between: usize,
    pub df_within: usize,
    /// Deliberately unavailable: this engine carries no F-distribution
    /// CDF and will not fabricate a tail probability. Serialized as
    /// `null` so the dashboard shows "unavailable" instead of a number.
    pub p_value: Option<f64>,
}

impl LeveneResult {
    /// The `W > 1` heuristic label. See [`Interpretation`].
    pub fn interpretation(&self) -> Interpretation {
        if self.w > 1.0 {
            Interpretation::Heterogeneous
        } else {
            Interpretation::Homogeneous
        }
    }
}

/// Brown-Forsythe test: one-way ANOVA on absolute deviations from each
/// group's median.
///
/// Refusals:
/// - fewer than 2 distinct labels (`INSUFFICIENT_GROUPS`)
/// - no within-group degrees of freedom, n <= k (`NOT_COMPUTABLE`)
/// - zero within-group variance of deviations, as when every group is
///   internally constant (`DEGENERATE_DISTRIBUTION`)
pub fn levene_test(grouped: &GroupedSample) -> Result<LeveneResult, StatError> {
    let groups = grouped.groups();
    let k = groups.len();
    if k < 2 {
        debug!(k, "levene_test refused: need at least 2 groups");
        return Err(StatError::insufficient_groups(k));
    }

    // Absolute deviations from each group's median, kept per group.
    let deviations: Vec<Vec<f64>> = groups
        .iter()
        .map(|(_, members)| {
            let median = median_sorted(&sorted(members));
            members.iter().map(|v| (v - median).abs()).collect()
        })
        .collect();

    let n: usize = deviations.iter().map(Vec::len).sum();
    if n <= k {
        debug!(n, k, "levene_test refused: no within-group degrees of freedom");
        return Err(StatError::not_computable(
            "within-group degrees of freedom is zero",
        ));
    }
    let df_between = k - 1;
    let df_within = n - k;

    // One-way ANOVA over the deviations.
    let grand_mean = deviations.iter().map(|devs| sum(devs)).sum::<f64>() / n as f64;

    let mut ss_between = 0.0;
    let mut ss_within = 0.0;
    for devs in &deviations {
        let group_mean = mean(devs);
        ss_between += devs.len() as f64 * (group_mean - grand_mean).powi(2);
        for dev in devs {
            ss_within += (dev - group_mean).powi(2);
        }
    }

    if ss_within == 0.0 {
        debug!("levene_test refused: zero within-group variance of deviations");
        return Err(StatError::degenerate_distribution(
            "all groups are internally constant",
        ));
    }

    let w = (ss_between / df_between as f64) / (ss_within / df_within as f64);
    Ok(LeveneResult {
        w,
        df_between,
        df_within,
        p_value: None,
    })
}
