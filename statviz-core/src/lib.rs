//! Statviz Core - Fundamental types
//!
//! This crate provides the core types used throughout Statviz:
//! - `Sample`: validated, non-empty collection of finite observations
//! - `GroupedSample`: observations paired element-wise with group labels
//! - `StatError`: structured errors the dashboard renders inline

mod error;
mod sample;

pub use error::{codes, Severity, StatError};
pub use sample::{GroupedSample, Sample, SampleError};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{codes, GroupedSample, Sample, SampleError, Severity, StatError};
}

#[cfg(test)]
mod tests {
    use super::*;

    mod sample_tests {
        use super::*;

        #[test]
        fn test_new_rejects_empty() {
            assert_eq!(Sample::new(vec![]), Err(SampleError::Empty));
        }

        #[test]
        fn test_new_rejects_non_finite() {
            let err = Sample::new(vec![1.0, f64::NAN, 3.0]).unwrap_err();
            assert_eq!(err, SampleError::NonFinite(1));

            let err = Sample::new(vec![f64::INFINITY]).unwrap_err();
            assert_eq!(err, SampleError::NonFinite(0));
        }

        #[test]
        fn test_clean_filters_non_finite() {
            let sample = Sample::clean(vec![1.0, f64::NAN, 2.0, f64::NEG_INFINITY]).unwrap();
            assert_eq!(sample.values(), &[1.0, 2.0]);
        }

        #[test]
        fn test_clean_rejects_all_unusable() {
            assert_eq!(
                Sample::clean(vec![f64::NAN, f64::INFINITY]),
                Err(SampleError::Empty)
            );
        }

        #[test]
        fn test_sorted_does_not_mutate() {
            let sample = Sample::new(vec![3.0, 1.0, 2.0]).unwrap();
            assert_eq!(sample.sorted(), vec![1.0, 2.0, 3.0]);
            assert_eq!(sample.values(), &[3.0, 1.0, 2.0]);
        }

        #[test]
        fn test_grouped_rejects_length_mismatch() {
            let err = GroupedSample::new(
                vec![1.0, 2.0],
                vec!["a".to_string()],
            )
            .unwrap_err();
            assert_eq!(err, SampleError::LengthMismatch { values: 2, labels: 1 });
        }

        #[test]
        fn test_groups_first_appearance_order() {
            let grouped = GroupedSample::new(
                vec![1.0, 2.0, 3.0, 4.0],
                ["b", "a", "b", "a"].iter().map(|s| s.to_string()).collect(),
            )
            .unwrap();

            let groups = grouped.groups();
            assert_eq!(groups.len(), 2);
            assert_eq!(groups[0].0, "b");
            assert_eq!(groups[0].1, vec![1.0, 3.0]);
            assert_eq!(groups[1].0, "a");
            assert_eq!(groups[1].1, vec![2.0, 4.0]);
        }

        #[test]
        fn test_distinct_labels() {
            let grouped = GroupedSample::new(
                vec![1.0, 2.0, 3.0],
                ["x", "x", "x"].iter().map(|s| s.to_string()).collect(),
            )
            .unwrap();
            assert_eq!(grouped.distinct_labels(), 1);
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_error_construction() {
            let err = StatError::empty_sample();
            assert_eq!(err.code, codes::EMPTY_SAMPLE);
            assert_eq!(err.severity, Severity::Error);
        }

        #[test]
        fn test_error_with_suggestion() {
            let err = StatError::domain_error("bin count must be positive")
                .with_suggestion("pass a bin count of at least 1");
            assert!(err.suggestion.is_some());
        }

        #[test]
        fn test_error_display() {
            let err = StatError::insufficient_groups(1);
            let display = format!("{}", err);
            assert!(display.contains(codes::INSUFFICIENT_GROUPS));
        }

        #[test]
        fn test_error_from_sample_error() {
            let err: StatError = SampleError::Empty.into();
            assert_eq!(err.code, codes::EMPTY_SAMPLE);

            let err: StatError = SampleError::NonFinite(3).into();
            assert_eq!(err.code, codes::NON_FINITE);

            let err: StatError = SampleError::LengthMismatch { values: 4, labels: 2 }.into();
            assert_eq!(err.code, codes::LENGTH_MISMATCH);
        }

        #[test]
        fn test_error_serializes() {
            let err = StatError::degenerate_distribution("constant sample");
            let json = serde_json::to_string(&err).unwrap();
            assert!(json.contains("DEGENERATE_DISTRIBUTION"));

            let back: StatError = serde_json::from_str(&json).unwrap();
            assert_eq!(back.code, err.code);
        }
    }
}
