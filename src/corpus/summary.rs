//! Corpus summary

use serde::{Deserialize, Serialize};
use std::fmt;

/// Corpus-level summary statistics
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CorpusSummary {
    /// Samples aggregated
    pub samples: usize,
    /// Reference words across all samples
    pub reference_words: usize,
    /// Edit operations across all samples
    pub word_errors: usize,
    /// Samples with at least one edit operation
    pub sentence_errors: usize,
    /// Micro-averaged corpus word error rate
    pub wer: f64,
    /// Sentence error rate
    pub ser: f64,
}

impl fmt::Display for CorpusSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Samples: {}", self.samples)?;
        writeln!(f, "Total words: {}", self.reference_words)?;
        writeln!(f, "Total word errors: {}", self.word_errors)?;
        writeln!(f, "Word error rate: {:.4}", self.wer)?;
        writeln!(f, "Total sentence errors: {}", self.sentence_errors)?;
        writeln!(f, "Sentence error rate: {:.4}", self.ser)?;
        Ok(())
    }
}
