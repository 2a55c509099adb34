// src/core/diversity.rs
use tracing::warn;

use crate::core::frequency::frequency_table;
use crate::error::{Error, Result};
use crate::models::{ChartPoint, Text};

/// Ratio of distinct words to total words in `text`.
///
/// # Errors
///
/// Returns [`Error::EmptyText`] when `text` contains no words.
///
/// # Examples
///
/// ```
/// use wordfreq::lexical_diversity;
///
/// assert_eq!(lexical_diversity("a a a b").unwrap(), 0.5);
/// assert!(lexical_diversity("   ").is_err());
/// ```
#[expect(clippy::as_conversions, reason = "Precision not critical")]
#[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
pub fn lexical_diversity(text: &str) -> Result<f64> {
    let table = frequency_table(text);
    if table.total() == 0 {
        return Err(Error::EmptyText);
    }
    Ok(table.distinct() as f64 / table.total() as f64)
}

/// Lexical diversity of each text, labelled with its title.
///
/// Texts without words have no diversity and are left out of the result.
#[must_use]
pub fn diversity_points(texts: &[Text]) -> Vec<ChartPoint> {
    texts
        .iter()
        .filter_map(|text| match lexical_diversity(&text.body) {
            Ok(value) => Some(ChartPoint {
                label: text.title.clone(),
                value,
            }),
            Err(e) => {
                warn!(title = %text.title, "skipping lexical diversity: {e}");
                None
            }
        })
        .collect()
}
