// src/models/pair_comparison.rs

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairComparison {
    pub left: String,
    pub right: String,
    pub overlap: usize,
}
