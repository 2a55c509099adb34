// src/core/frequency.rs
use tracing::debug;

use crate::models::{FrequencyTable, TopWords};

/// Counts every whitespace-separated token in `text`.
///
/// Tokens are compared byte for byte: no case folding, no punctuation stripping.
#[inline]
#[must_use]
pub fn frequency_table(text: &str) -> FrequencyTable {
    FrequencyTable::from_text(text)
}

/// Returns the `n` most frequent words of `text` and the number of words in it.
///
/// Words with equal counts are ranked in the order they first appear.
///
/// # Arguments
///
/// * `n` - How many words to keep; values above the distinct word count return every word
/// * `text` - The raw text to count
///
/// # Examples
///
/// ```
/// use wordfreq::most_frequent_words;
///
/// let top = most_frequent_words(3, "the cat sat on the mat the cat ran");
/// assert_eq!(top.pairs(), vec![("the", 3), ("cat", 2), ("sat", 1)]);
/// assert_eq!(top.total, 9);
/// ```
#[must_use]
pub fn most_frequent_words(n: usize, text: &str) -> TopWords {
    let table = frequency_table(text);
    let total = table.total();
    debug!(total, distinct = table.distinct(), "built frequency table");

    let mut words = table.into_ranked();
    words.truncate(n);
    TopWords { words, total }
}
