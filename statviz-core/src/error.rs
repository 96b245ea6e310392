//! Structured errors for inline display
//!
//! Errors never crash the engine. They are values that propagate through
//! computations so the dashboard can render a "cannot compute" state next
//! to otherwise-valid statistics for other columns.

use crate::SampleError;
use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const EMPTY_SAMPLE: &str = "EMPTY_SAMPLE";
    pub const NON_FINITE: &str = "NON_FINITE";
    pub const LENGTH_MISMATCH: &str = "LENGTH_MISMATCH";
    pub const INSUFFICIENT_GROUPS: &str = "INSUFFICIENT_GROUPS";
    pub const DEGENERATE_DISTRIBUTION: &str = "DEGENERATE_DISTRIBUTION";
    pub const NOT_COMPUTABLE: &str = "NOT_COMPUTABLE";
    pub const DOMAIN_ERROR: &str = "DOMAIN_ERROR";
}

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Computation continued with a degraded result
    Warning,
    /// This statistic cannot be computed
    Error,
}

/// Structured error for dashboard consumption
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Severity level
    pub severity: Severity,
}

impl StatError {
    /// Create a new error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            severity: Severity::Error,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: set severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    // ========== Common Error Constructors ==========

    pub fn empty_sample() -> Self {
        Self::new(codes::EMPTY_SAMPLE, "No usable numeric values in sample")
            .with_suggestion("Check that the selected column contains numbers")
    }

    pub fn non_finite(index: usize) -> Self {
        Self::new(
            codes::NON_FINITE,
            format!("Non-finite value at index {}", index),
        )
        .with_suggestion("Filter NaN and infinite values before analysis")
    }

    pub fn length_mismatch(values: usize, labels: usize) -> Self {
        Self::new(
            codes::LENGTH_MISMATCH,
            format!(
                "Expected one group label per value: {} values vs {} labels",
                values, labels
            ),
        )
        .with_suggestion("Select value and group columns of the same length")
    }

    pub fn insufficient_groups(found: usize) -> Self {
        Self::new(
            codes::INSUFFICIENT_GROUPS,
            format!("Need at least 2 distinct groups, found {}", found),
        )
        .with_suggestion("Pick a grouping column with two or more categories")
    }

    pub fn degenerate_distribution(details: impl Into<String>) -> Self {
        Self::new(
            codes::DEGENERATE_DISTRIBUTION,
            format!("Degenerate distribution: {}", details.into()),
        )
    }

    pub fn not_computable(details: impl Into<String>) -> Self {
        Self::new(
            codes::NOT_COMPUTABLE,
            format!("Not computable: {}", details.into()),
        )
    }

    pub fn domain_error(details: impl Into<String>) -> Self {
        Self::new(codes::DOMAIN_ERROR, format!("Domain error: {}", details.into()))
    }
}

impl std::fmt::Display for StatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for StatError {}

impl From<SampleError> for StatError {
    fn from(err: SampleError) -> Self {
        match err {
            SampleError::Empty => Self::empty_sample(),
            SampleError::NonFinite(index) => Self::non_finite(index),
            SampleError::LengthMismatch { values, labels } => {
                Self::length_mismatch(values, labels)
            }
        }
    }
}
