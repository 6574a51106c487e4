//! Streaming corpus aggregator

use super::summary::CorpusSummary;
use super::totals::{CorpusTotals, WordStat};
use crate::align::AlignmentCounts;
use crate::error::{MeasureError, Result};
use crate::sample::SampleReport;
use std::collections::BTreeMap;

/// Streams per-sample results into corpus-level totals and a per-word
/// accuracy table.
///
/// Owns all mutable state for one aggregation pass. The word table is
/// keyed by word in sorted order, so reports and serialized output are
/// deterministic regardless of sample order.
#[derive(Clone, Debug, Default)]
pub struct CorpusAggregator {
    totals: CorpusTotals,
    word_stats: BTreeMap<String, WordStat>,
}

impl CorpusAggregator {
    /// Create an empty aggregator
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one sample into the running totals.
    ///
    /// `differences` must come from the same sample as `counts` (see
    /// [`crate::word_differences`]); every difference word therefore also
    /// occurs in `reference`, which keeps each word's `count` positive by
    /// the time its error rate is computed.
    pub fn add<R: AsRef<str>>(
        &mut self,
        reference: &[R],
        differences: &[String],
        counts: AlignmentCounts,
    ) {
        let word_errors = counts.edits();

        self.totals.samples += 1;
        self.totals.reference_words += reference.len();
        self.totals.word_errors += word_errors;
        if word_errors > 0 {
            self.totals.sentence_errors += 1;
        }

        for word in reference {
            let stat = self.word_stats.entry(word.as_ref().to_string()).or_default();
            stat.count += 1;
            stat.error_rate = stat.errors as f64 / stat.count as f64;
        }

        for word in differences {
            let stat = self.word_stats.entry(word.clone()).or_default();
            stat.errors += 1;
            debug_assert!(stat.count > 0, "difference word {word:?} not in any reference");
            stat.error_rate = stat.errors as f64 / stat.count as f64;
        }
    }

    /// Fold one evaluated sample into the running totals
    pub fn add_report<R: AsRef<str>>(&mut self, reference: &[R], report: &SampleReport) {
        self.add(reference, &report.differences, report.counts);
    }

    /// Fold another aggregator's partial totals into this one.
    ///
    /// Totals add component-wise and per-word stats merge by summing
    /// counts and errors, so aggregating a corpus in parallel partitions
    /// and merging yields the same state as one sequential pass.
    pub fn merge(&mut self, other: CorpusAggregator) {
        self.totals.samples += other.totals.samples;
        self.totals.reference_words += other.totals.reference_words;
        self.totals.word_errors += other.totals.word_errors;
        self.totals.sentence_errors += other.totals.sentence_errors;

        for (word, stat) in other.word_stats {
            let entry = self.word_stats.entry(word).or_default();
            entry.count += stat.count;
            entry.errors += stat.errors;
            entry.error_rate = entry.errors as f64 / entry.count as f64;
        }
    }

    /// Corpus-level summary over everything aggregated so far.
    ///
    /// The corpus WER is micro-averaged: summed word errors over summed
    /// reference words, which weights every word equally. It is not the
    /// mean of the per-sample WER values.
    ///
    /// # Errors
    ///
    /// Returns [`MeasureError::EmptyCorpus`] before any sample with a
    /// non-empty reference has been added.
    pub fn summary(&self) -> Result<CorpusSummary> {
        if self.totals.samples == 0 || self.totals.reference_words == 0 {
            return Err(MeasureError::EmptyCorpus);
        }

        Ok(CorpusSummary {
            samples: self.totals.samples,
            reference_words: self.totals.reference_words,
            word_errors: self.totals.word_errors,
            sentence_errors: self.totals.sentence_errors,
            wer: self.totals.word_errors as f64 / self.totals.reference_words as f64,
            ser: self.totals.sentence_errors as f64 / self.totals.samples as f64,
        })
    }

    /// Running totals
    pub fn totals(&self) -> &CorpusTotals {
        &self.totals
    }

    /// Per-word accuracy table, keyed by word in sorted order
    pub fn word_stats(&self) -> &BTreeMap<String, WordStat> {
        &self.word_stats
    }
}
