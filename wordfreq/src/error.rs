// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("fetch failed for {url}: server returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("fetch failed for {url}: body is not valid UTF-8")]
    Decode {
        url: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("text contains no words")]
    EmptyText,

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("failed to scan corpus: {0}")]
    Walk(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
