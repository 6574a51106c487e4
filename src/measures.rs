//! Rate metrics derived from one alignment
//!
//! Maps the operation counts of a single reference/hypothesis alignment to
//! the standard transcription-quality rates:
//! - **WER**: edit operations per reference word (can exceed 1.0 when
//!   insertions dominate)
//! - **MER**: edit operations per alignment operation, bounded to [0, 1]
//! - **WIL/WIP**: word information lost/preserved, bounded to [0, 1]

use crate::align::AlignmentCounts;
use crate::error::{MeasureError, Result};
use serde::{Deserialize, Serialize};

/// Rate metrics for a single sample
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleMeasures {
    /// Word Error Rate
    pub wer: f64,
    /// Match Error Rate
    pub mer: f64,
    /// Word Information Lost
    pub wil: f64,
    /// Word Information Preserved
    pub wip: f64,
}

/// Derive WER, MER, WIL, and WIP from alignment counts.
///
/// `reference_len` and `hypothesis_len` are the lengths of the two word
/// sequences the counts were computed from.
///
/// - `WER = (S + D + I) / reference_len`
/// - `MER = (S + D + I) / (H + S + D + I)`
/// - `WIP = (H / reference_len) * (H / hypothesis_len)`, or `0.0` for an
///   empty hypothesis (all word information lost)
/// - `WIL = 1 - WIP`
///
/// # Errors
///
/// Returns [`MeasureError::EmptyReference`] when `reference_len` is zero:
/// every rate divides by it, and surfacing the condition beats silently
/// handing NaN to an aggregator.
pub fn compute_measures(
    counts: AlignmentCounts,
    reference_len: usize,
    hypothesis_len: usize,
) -> Result<SampleMeasures> {
    if reference_len == 0 {
        return Err(MeasureError::EmptyReference);
    }

    let edits = counts.edits() as f64;
    let hits = counts.hits as f64;
    let n = reference_len as f64;
    let m = hypothesis_len as f64;

    let wer = edits / n;
    // hits + edits >= reference_len > 0, so this denominator never vanishes
    let mer = edits / (hits + edits);
    let wip = if hypothesis_len == 0 {
        0.0
    } else {
        (hits / n) * (hits / m)
    };
    let wil = 1.0 - wip;

    Ok(SampleMeasures { wer, mer, wil, wip })
}
