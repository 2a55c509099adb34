// src/config.rs
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::cli::Args;
use crate::core::compare::DEFAULT_OVERLAP_SIZE;
use crate::core::loader::corpus_sources;
use crate::error::{Error, Result};
use crate::models::Source;

pub const DEFAULT_TOP: usize = 10;
pub const DEFAULT_CHART_WIDTH: usize = 50;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for a run, read from a TOML file such as:
///
/// ```toml
/// top = 10
/// overlap_size = 500
///
/// [[sources]]
/// label = "Emma"
/// location = "https://www.gutenberg.org/files/158/158-0.txt"
/// ```
///
/// Every key is optional; missing keys take the built-in defaults.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Words listed per text
    pub top: usize,
    /// Top words per text taking part in each comparison
    pub overlap_size: usize,
    pub chart_width: usize,
    pub timeout_secs: u64,
    pub sources: Vec<Source>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top: DEFAULT_TOP,
            overlap_size: DEFAULT_OVERLAP_SIZE,
            chart_width: DEFAULT_CHART_WIDTH,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            sources: default_sources(),
        }
    }
}

impl Config {
    /// Reads and parses the config file at `path`.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The file cannot be read
    /// * The file is not valid TOML or has unknown keys
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Lets command line values win over the file. `--directory` replaces the
    /// configured sources with the matching files under it.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The `--pattern` glob is invalid
    /// * The corpus directory cannot be scanned
    pub fn apply_args(&mut self, args: &Args) -> Result<()> {
        if let Some(top) = args.top {
            self.top = top;
        }
        if let Some(overlap) = args.overlap {
            self.overlap_size = overlap;
        }
        if let Some(width) = args.chart_width {
            self.chart_width = width;
        }
        if let Some(dir) = &args.directory {
            self.sources = corpus_sources(dir, &args.pattern)?;
        }
        Ok(())
    }

    #[inline]
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Two novels each by Jane Austen and Nathaniel Hawthorne.
#[must_use]
pub fn default_sources() -> Vec<Source> {
    vec![
        Source::new(
            "Pride and Prejudice",
            "https://www.gutenberg.org/files/1342/1342-0.txt",
        ),
        Source::new("Emma", "https://www.gutenberg.org/files/158/158-0.txt"),
        Source::new(
            "The Scarlet Letter",
            "https://www.gutenberg.org/cache/epub/33/pg33.txt",
        ),
        Source::new(
            "The House of the Seven Gables",
            "https://www.gutenberg.org/cache/epub/77/pg77.txt",
        ),
    ]
}
