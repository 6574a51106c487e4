//! Plain-text word accuracy report

use super::aggregator::CorpusAggregator;

/// Render the per-word accuracy table as fixed-width text.
///
/// One row per distinct reference word, sorted, with its corpus-wide
/// occurrence count, error count, and error rate. Serializing the table to
/// a file format is the reporting layer's job; this is the in-memory view.
///
/// # Example
/// ```ignore
/// use medir::{word_accuracy_report, CorpusAggregator};
///
/// let report = word_accuracy_report(&aggregator);
/// println!("{}", report);
/// ```
pub fn word_accuracy_report(aggregator: &CorpusAggregator) -> String {
    let mut report = String::new();

    report.push_str(&format!(
        "{:>16} {:>8} {:>8} {:>10}\n",
        "word", "count", "errors", "error_rate"
    ));
    report.push_str(&"-".repeat(45));
    report.push('\n');

    for (word, stat) in aggregator.word_stats() {
        report.push_str(&format!(
            "{:>16} {:>8} {:>8} {:>10.4}\n",
            word, stat.count, stat.errors, stat.error_rate
        ));
    }

    report
}
