// src/models/word_count.rs

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl WordCount {
    #[inline]
    #[must_use]
    pub fn new(word: &str, count: usize) -> Self {
        Self {
            word: word.to_owned(),
            count,
        }
    }
}
