// tests/integration_tests/corpus_test.rs
use super::common::setup_corpus;
use anyhow::Result;
use std::time::Duration;
use wordfreq::{build_client, corpus_sources, diversity_points, load_sources};

#[test]
fn test_corpus_loads_matching_files_in_path_order() -> Result<()> {
    let temp_dir = setup_corpus()?;

    let sources = corpus_sources(temp_dir.path(), "*.txt")?;
    assert_eq!(sources.len(), 3, "README and hidden drafts are skipped");

    let client = build_client(Duration::from_secs(1))?;
    let texts = load_sources(&client, &sources)?;
    let titles: Vec<&str> = texts.iter().map(|t| t.title.as_str()).collect();

    assert_eq!(
        titles,
        vec![
            "The Project Gutenberg EBook of Emma, by Jane Austen",
            "The Project Gutenberg EBook of Pride and Prejudice, by Jane Austen",
            "The Project Gutenberg EBook of The Scarlet Letter, by Nathaniel Hawthorne",
        ]
    );

    let points = diversity_points(&texts);
    assert_eq!(points.len(), 3);
    assert!(points.iter().all(|p| p.value > 0.0 && p.value <= 1.0));
    Ok(())
}

#[test]
fn test_corpus_with_other_pattern() -> Result<()> {
    let temp_dir = setup_corpus()?;

    let sources = corpus_sources(temp_dir.path(), "*.md")?;
    assert_eq!(sources.len(), 1);
    assert!(sources[0].location.ends_with("README.md"));
    Ok(())
}
