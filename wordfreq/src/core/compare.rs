// src/core/compare.rs
use std::collections::HashSet;

use tracing::debug;

use crate::core::frequency::most_frequent_words;
use crate::models::{PairComparison, Text};

/// How many top words of each text take part in a comparison.
pub const DEFAULT_OVERLAP_SIZE: usize = 500;

/// Counts how many of the 500 most frequent words of `text1` are also among
/// the 500 most frequent words of `text2`.
///
/// Each side is truncated independently. When the cut falls inside a run of
/// equal counts, which words survive is decided by first appearance; other
/// tie-break rules would give other results, so the count is only meaningful
/// for this ranking.
///
/// # Examples
///
/// ```
/// use wordfreq::compare_authors;
///
/// assert_eq!(compare_authors("a b c", "c b x"), 2);
/// assert_eq!(compare_authors("a b c", "a b c"), 3);
/// ```
#[inline]
#[must_use]
pub fn compare_authors(text1: &str, text2: &str) -> usize {
    compare_top(DEFAULT_OVERLAP_SIZE, text1, text2)
}

/// Size of the intersection of the `n` most frequent words of both texts.
#[must_use]
pub fn compare_top(n: usize, text1: &str, text2: &str) -> usize {
    let top1 = most_frequent_words(n, text1);
    let top2 = most_frequent_words(n, text2);

    let words2: HashSet<&str> = top2.tokens().collect();
    top1.tokens().filter(|word| words2.contains(word)).count()
}

/// Compares every unordered pair of `texts`, in list order.
#[must_use]
pub fn compare_all(texts: &[Text], n: usize) -> Vec<PairComparison> {
    let mut comparisons = Vec::new();

    for (i, left) in texts.iter().enumerate() {
        for right in texts.iter().skip(i.saturating_add(1)) {
            let overlap = compare_top(n, &left.body, &right.body);
            debug!(left = %left.title, right = %right.title, overlap, "compared texts");
            comparisons.push(PairComparison {
                left: left.title.clone(),
                right: right.title.clone(),
                overlap,
            });
        }
    }

    comparisons
}
