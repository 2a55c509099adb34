// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use crate::config::Config;
use crate::core::compare::compare_all;
use crate::core::diversity::diversity_points;
use crate::core::frequency::most_frequent_words;
use crate::core::loader::{build_client, load_sources};
use crate::report::{format_comparisons, format_top_words, render_chart};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// TOML file listing sources and settings (defaults to four Gutenberg novels)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Analyze local files in this directory instead of the configured sources
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// File name pattern used with --directory
    #[arg(short, long, default_value = "*.txt")]
    pub pattern: String,

    /// Number of most frequent words to list per text
    #[arg(short = 't', long)]
    pub top: Option<usize>,

    /// Number of top words per text compared between texts
    #[arg(short = 'o', long)]
    pub overlap: Option<usize>,

    /// Width of the longest chart bar
    #[arg(short = 'w', long)]
    pub chart_width: Option<usize>,

    /// Skip the lexical diversity chart
    #[arg(long)]
    pub no_chart: bool,
}

/// Loads the texts, then prints top words, pairwise overlap and the diversity chart.
///
/// # Errors
///
/// This function may return an error if:
/// * The config file cannot be read or parsed
/// * The corpus directory cannot be scanned or the pattern is invalid
/// * Any source cannot be fetched or read
pub fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => Config::default(),
    };
    config.apply_args(&args).context("Failed to apply command line options")?;

    info!(sources = config.sources.len(), "loading texts");
    let client = build_client(config.timeout())?;
    let texts = load_sources(&client, &config.sources).context("Failed to load texts")?;

    for text in &texts {
        let top = most_frequent_words(config.top, &text.body);
        println!("{}", format_top_words(&text.title, &top));
    }

    if texts.len() > 1 {
        let comparisons = compare_all(&texts, config.overlap_size);
        println!("{}", format_comparisons(&comparisons, config.overlap_size));
    }

    if !args.no_chart {
        let points = diversity_points(&texts);
        print!(
            "{}",
            render_chart("Lexical diversity", &points, config.chart_width)
        );
    }

    Ok(())
}
