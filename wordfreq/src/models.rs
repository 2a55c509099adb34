// src/models.rs
mod chart_point;
mod frequency_table;
mod pair_comparison;
mod source;
mod text;
mod top_words;
mod word_count;

pub use chart_point::ChartPoint;
pub use frequency_table::FrequencyTable;
pub use pair_comparison::PairComparison;
pub use source::Source;
pub use text::Text;
pub use top_words::TopWords;
pub use word_count::WordCount;
