//! Per-word difference attribution
//!
//! A coarse, order-independent error attribution used for word-frequency
//! reporting: which reference words does the hypothesis fail to account
//! for, counted as a multiset?

use std::collections::{BTreeMap, HashMap};

/// Reference words over-represented relative to the hypothesis.
///
/// For every distinct word in `reference` with `r` occurrences there and
/// `h` occurrences in `hypothesis`, the output contains that word `r - h`
/// times when `r > h`, and not at all otherwise. Plain set arithmetic would
/// miscount words that repeat in the reference, so occurrences are compared
/// as multiset counts.
///
/// This is deliberately not derived from the alignment backtrace: a
/// substituted word that reappears elsewhere in the hypothesis does not
/// count as lost here. Distinct words are visited in sorted order, so the
/// output is deterministic.
pub fn word_differences<R, H>(reference: &[R], hypothesis: &[H]) -> Vec<String>
where
    R: AsRef<str>,
    H: AsRef<str>,
{
    let mut ref_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for word in reference {
        *ref_counts.entry(word.as_ref()).or_insert(0) += 1;
    }

    let mut hyp_counts: HashMap<&str, usize> = HashMap::new();
    for word in hypothesis {
        *hyp_counts.entry(word.as_ref()).or_insert(0) += 1;
    }

    let mut differences = Vec::new();
    for (word, &r) in &ref_counts {
        let h = hyp_counts.get(word).copied().unwrap_or(0);
        for _ in h..r {
            differences.push((*word).to_string());
        }
    }
    differences
}
