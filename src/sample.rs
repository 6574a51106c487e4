//! Single-sample evaluation
//!
//! One-stop pass over a reference/hypothesis pair: align, derive the rate
//! metrics, attribute per-word differences. Sample identifiers are the
//! caller's concern and never enter the crate.

use crate::align::{align, AlignmentCounts};
use crate::diff::word_differences;
use crate::error::Result;
use crate::measures::{compute_measures, SampleMeasures};
use serde::{Deserialize, Serialize};

/// Everything derived from one reference/hypothesis pair
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SampleReport {
    /// Alignment operation counts
    pub counts: AlignmentCounts,
    /// Rate metrics derived from the counts
    pub measures: SampleMeasures,
    /// Reference words the hypothesis failed to account for
    pub differences: Vec<String>,
}

/// Evaluate a single sample.
///
/// Both inputs must already be tokenized and normalized; case folding,
/// punctuation stripping, and stemming are upstream policy.
///
/// # Errors
///
/// Returns [`crate::MeasureError::EmptyReference`] for a zero-length
/// reference. Whether to skip such samples or abort the run is the
/// caller's policy decision.
pub fn evaluate<R, H>(reference: &[R], hypothesis: &[H]) -> Result<SampleReport>
where
    R: AsRef<str>,
    H: AsRef<str>,
{
    let counts = align(reference, hypothesis);
    let measures = compute_measures(counts, reference.len(), hypothesis.len())?;
    let differences = word_differences(reference, hypothesis);

    Ok(SampleReport {
        counts,
        measures,
        differences,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeasureError;

    #[test]
    fn test_evaluate_substitution_sample() {
        let report = evaluate(&["the", "cat", "sat"], &["a", "cat", "sat"]).unwrap();

        assert_eq!(report.counts.hits, 2);
        assert_eq!(report.counts.substitutions, 1);
        assert!((report.measures.wer - 1.0 / 3.0).abs() < 1e-10);
        assert_eq!(report.differences, vec!["the"]);
    }

    #[test]
    fn test_evaluate_perfect_sample() {
        let report = evaluate(&["hello", "world"], &["hello", "world"]).unwrap();

        assert_eq!(report.counts.hits, 2);
        assert_eq!(report.counts.edits(), 0);
        assert_eq!(report.measures.wer, 0.0);
        assert!(report.differences.is_empty());
    }

    #[test]
    fn test_evaluate_empty_reference_errors() {
        let err = evaluate::<&str, _>(&[], &["hello"]).unwrap_err();
        assert!(matches!(err, MeasureError::EmptyReference));
    }

    #[test]
    fn test_evaluate_empty_hypothesis() {
        let report = evaluate::<_, &str>(&["hello", "world"], &[]).unwrap();

        assert_eq!(report.counts.deletions, 2);
        assert_eq!(report.measures.wer, 1.0);
        assert_eq!(report.differences, vec!["hello", "world"]);
    }

    #[test]
    fn test_report_serializes() {
        let report = evaluate(&["a", "b"], &["a", "c"]).unwrap();
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("\"counts\""));
        assert!(json.contains("\"measures\""));
        assert!(json.contains("\"differences\""));
    }
}
