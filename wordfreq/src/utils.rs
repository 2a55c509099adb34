// src/utils.rs

/// First line of `text`, without a leading byte-order mark or surrounding whitespace.
#[must_use]
pub fn title_of(text: &str) -> &str {
    text.trim_start_matches('\u{feff}')
        .lines()
        .next()
        .unwrap_or_default()
        .trim()
}

pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    // depth 0 is the root the caller asked for, even if it is `.` or `.corpus`
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|s| s.starts_with('.'))
}
