// src/core/loader.rs
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use glob::Pattern;
use reqwest::blocking::Client;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::models::{Source, Text};
use crate::utils::is_hidden;

/// Builds the blocking HTTP client used for every remote source.
///
/// # Errors
///
/// Returns [`Error::Client`] if the TLS backend cannot be initialised.
pub fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .user_agent(concat!("wordfreq/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()
        .map_err(Error::Client)
}

/// Downloads `url` and returns its body as text.
///
/// # Errors
///
/// * [`Error::Fetch`] - the request failed or timed out
/// * [`Error::Status`] - the server answered with a non-success status
/// * [`Error::Decode`] - the body is not valid UTF-8
pub fn fetch_text(client: &Client, url: &str) -> Result<String> {
    debug!(url, "GET");
    let fetch_err = |source| Error::Fetch {
        url: url.to_owned(),
        source,
    };

    let response = client.get(url).send().map_err(fetch_err)?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status {
            url: url.to_owned(),
            status,
        });
    }

    let body = response.bytes().map_err(fetch_err)?;
    String::from_utf8(body.to_vec()).map_err(|source| Error::Decode {
        url: url.to_owned(),
        source,
    })
}

/// Reads a local text file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Fetches or reads `source` and wraps it as a [`Text`].
///
/// # Errors
///
/// Propagates the errors of [`fetch_text`] or [`read_text`].
pub fn load_source(client: &Client, source: &Source) -> Result<Text> {
    let body = if source.is_remote() {
        info!(location = %source.location, "downloading");
        fetch_text(client, &source.location)?
    } else {
        info!(location = %source.location, "reading");
        read_text(Path::new(&source.location))?
    };

    Ok(match &source.label {
        Some(label) => Text::new(label, body),
        None => Text::untitled(body),
    })
}

/// Loads every source in order, stopping at the first failure.
///
/// # Errors
///
/// Propagates the first error of [`load_source`].
pub fn load_sources(client: &Client, sources: &[Source]) -> Result<Vec<Text>> {
    sources
        .iter()
        .map(|source| load_source(client, source))
        .collect()
}

/// Finds the files under `dir` whose name matches `pattern`, sorted by path.
///
/// Hidden files and directories are skipped.
///
/// # Arguments
///
/// * `dir` - The directory to scan recursively
/// * `pattern` - A glob matched against file names, e.g. `*.txt`
///
/// # Errors
///
/// This function may return an error if:
/// * `pattern` is not a valid glob
/// * The directory cannot be accessed or read
pub fn find_corpus_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let pattern = Pattern::new(pattern)?;
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry
            .file_name()
            .to_str()
            .is_some_and(|name| pattern.matches(name))
        {
            files.push(entry.into_path());
        }
    }

    files.sort();
    debug!(count = files.len(), dir = %dir.display(), "found corpus files");
    Ok(files)
}

/// Turns the matching files under `dir` into unlabelled sources.
///
/// # Errors
///
/// Propagates the errors of [`find_corpus_files`].
pub fn corpus_sources(dir: &Path, pattern: &str) -> Result<Vec<Source>> {
    Ok(find_corpus_files(dir, pattern)?
        .into_iter()
        .map(|path| Source {
            label: None,
            location: path.to_string_lossy().into_owned(),
        })
        .collect())
}
