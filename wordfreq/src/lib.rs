// src/lib.rs
//! Word-frequency statistics for plain-text books: the most frequent words of
//! a text, how many frequent words two texts share, and lexical diversity.
//!
//! Words are whitespace-separated tokens, compared exactly as written.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod report;
pub mod utils;

pub use cli::{Args, run};
pub use config::Config;
pub use crate::core::compare::{DEFAULT_OVERLAP_SIZE, compare_all, compare_authors, compare_top};
pub use crate::core::diversity::{diversity_points, lexical_diversity};
pub use crate::core::frequency::{frequency_table, most_frequent_words};
pub use crate::core::loader::{
    build_client, corpus_sources, fetch_text, find_corpus_files, load_source, load_sources,
    read_text,
};
pub use error::Error;
pub use models::{ChartPoint, FrequencyTable, PairComparison, Source, Text, TopWords, WordCount};
pub use report::render_chart;
