// src/models/top_words.rs
use crate::models::WordCount;

/// The highest-count words of a text together with its total token count.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TopWords {
    pub words: Vec<WordCount>,
    pub total: usize,
}

impl TopWords {
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|entry| entry.word.as_str())
    }

    /// `(word, count)` pairs borrowed from `words`.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&str, usize)> {
        self.words
            .iter()
            .map(|entry| (entry.word.as_str(), entry.count))
            .collect()
    }
}
