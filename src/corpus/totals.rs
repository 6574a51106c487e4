//! Running corpus totals and per-word statistics

use serde::{Deserialize, Serialize};

/// Running corpus-level totals
///
/// Mutated monotonically as samples are added; reset only by constructing
/// a new aggregator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusTotals {
    /// Samples aggregated so far
    pub samples: usize,
    /// Reference words across all samples
    pub reference_words: usize,
    /// Edit operations across all samples
    pub word_errors: usize,
    /// Samples with at least one edit operation
    pub sentence_errors: usize,
}

/// Per-word occurrence and error tracking across a corpus
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WordStat {
    /// Occurrences in reference transcripts
    pub count: usize,
    /// Occurrences in per-sample difference sets
    pub errors: usize,
    /// `errors / count`
    pub error_rate: f64,
}
