//! Transcription quality measurement
//!
//! Aligns automatic-speech-recognition hypotheses against reference
//! transcripts and derives the standard error rates, plus per-word error
//! attribution and corpus-level aggregation.
//!
//! ## Architecture
//!
//! - `align`: minimum-edit alignment between two word sequences, reduced to
//!   hit/substitution/deletion/insertion counts
//! - `measures`: WER, MER, WIL, WIP derived from the counts
//! - `diff`: multiset difference of reference words the hypothesis missed
//! - `sample`: one-stop evaluation of a single reference/hypothesis pair
//! - `corpus`: streaming aggregation across a corpus (micro-averaged WER,
//!   sentence error rate, per-word accuracy table)
//!
//! Inputs are already-tokenized word sequences; normalization (case,
//! punctuation, stemming) and file formats are the caller's concern.
//!
//! ## Example
//!
//! ```ignore
//! use medir::{evaluate, CorpusAggregator};
//!
//! let mut aggregator = CorpusAggregator::new();
//!
//! let reference = ["the", "cat", "sat"];
//! let hypothesis = ["a", "cat", "sat"];
//! let report = evaluate(&reference, &hypothesis)?;
//! println!("WER: {:.4}", report.measures.wer);
//!
//! aggregator.add_report(&reference, &report);
//! println!("{}", aggregator.summary()?);
//! ```

pub mod align;
pub mod corpus;
pub mod diff;
pub mod error;
pub mod measures;
pub mod sample;

// Re-export the public surface
pub use align::{align, AlignmentCounts};
pub use corpus::{word_accuracy_report, CorpusAggregator, CorpusSummary, CorpusTotals, WordStat};
pub use diff::word_differences;
pub use error::{MeasureError, Result};
pub use measures::{compute_measures, SampleMeasures};
pub use sample::{evaluate, SampleReport};
