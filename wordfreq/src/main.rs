// src/main.rs
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wordfreq::Args;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wordfreq=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    wordfreq::run(args)
}
