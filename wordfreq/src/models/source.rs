// src/models/source.rs
use serde::Deserialize;

/// Where a text comes from: an `http(s)://` URL or a local file path.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Source {
    /// Display name; falls back to the text's first line when absent.
    pub label: Option<String>,
    pub location: String,
}

impl Source {
    #[must_use]
    pub fn new(label: &str, location: &str) -> Self {
        Self {
            label: Some(label.to_owned()),
            location: location.to_owned(),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_remote(&self) -> bool {
        ["http://", "https://"].iter().any(|scheme| {
            self.location
                .get(..scheme.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
        })
    }
}
