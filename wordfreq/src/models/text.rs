// src/models/text.rs
use crate::utils::title_of;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub title: String,
    pub body: String,
}

impl Text {
    #[must_use]
    pub fn new(title: &str, body: String) -> Self {
        Self {
            title: title.to_owned(),
            body,
        }
    }

    /// Uses the first line of `body` as the title.
    #[must_use]
    pub fn untitled(body: String) -> Self {
        let title = title_of(&body).to_owned();
        Self { title, body }
    }
}
