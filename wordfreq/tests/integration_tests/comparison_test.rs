// tests/integration_tests/comparison_test.rs
use super::common::STORY;
use wordfreq::{DEFAULT_OVERLAP_SIZE, Text, compare_all, compare_authors, compare_top};

#[test]
fn test_text_against_itself() {
    assert_eq!(compare_authors(STORY, STORY), 6, "Full overlap with itself");
}

#[test]
fn test_self_overlap_bounded_by_cutoff() {
    let many: String = (0..700).map(|i| format!("w{i} ")).collect();
    assert_eq!(compare_authors(&many, &many), DEFAULT_OVERLAP_SIZE);
    assert_eq!(compare_top(20, &many, &many), 20);
}

#[test]
fn test_partial_overlap() {
    let other = "a dog sat on a log";
    // shared: "sat", "on"
    assert_eq!(compare_authors(STORY, other), 2);
    assert_eq!(compare_authors(other, STORY), 2);
}

#[test]
fn test_compare_all_uses_titles() {
    let texts = vec![
        Text::new("Story", String::from(STORY)),
        Text::new("Other", String::from("the dog")),
    ];
    let comparisons = compare_all(&texts, DEFAULT_OVERLAP_SIZE);

    assert_eq!(comparisons.len(), 1);
    assert_eq!(comparisons[0].left, "Story");
    assert_eq!(comparisons[0].right, "Other");
    assert_eq!(comparisons[0].overlap, 1);
}
