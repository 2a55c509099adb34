// src/models/frequency_table.rs
use std::collections::HashMap;

use crate::models::WordCount;

/// Occurrence count per distinct token, in the order tokens were first seen.
#[derive(Debug, Default, Clone)]
pub struct FrequencyTable {
    entries: Vec<WordCount>,
    index: HashMap<String, usize>,
    total: usize,
}

impl FrequencyTable {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table in a single pass over the whitespace-separated tokens of `text`.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut table = Self::new();
        for word in text.split_whitespace() {
            table.record(word);
        }
        table
    }

    pub fn record(&mut self, word: &str) {
        match self.index.get(word).and_then(|&i| self.entries.get_mut(i)) {
            Some(entry) => entry.count = entry.count.saturating_add(1),
            None => {
                self.index.insert(word.to_owned(), self.entries.len());
                self.entries.push(WordCount::new(word, 1));
            }
        }
        self.total = self.total.saturating_add(1);
    }

    #[inline]
    #[must_use]
    pub fn count(&self, word: &str) -> usize {
        self.index
            .get(word)
            .and_then(|&i| self.entries.get(i))
            .map_or(0, |entry| entry.count)
    }

    /// Number of tokens recorded, duplicates included.
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    #[inline]
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordCount> {
        self.entries.iter()
    }

    /// Entries by descending count. The sort is stable, so equal counts keep
    /// first-seen order.
    #[must_use]
    pub fn into_ranked(self) -> Vec<WordCount> {
        let mut ranked = self.entries;
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }
}
