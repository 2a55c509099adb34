// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::{Read as _, Write as _};
use std::net::TcpListener;
use std::path::Path;
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

pub const STORY: &str = "the cat sat on the mat the cat ran";

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn setup_corpus() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(
        temp_dir.path(),
        "austen/emma.txt",
        "\u{feff}The Project Gutenberg EBook of Emma, by Jane Austen\n\
         Emma Woodhouse handsome clever and rich with a comfortable home",
    )?;

    create_test_file(
        temp_dir.path(),
        "austen/pride.txt",
        "The Project Gutenberg EBook of Pride and Prejudice, by Jane Austen\n\
         It is a truth universally acknowledged that a single man",
    )?;

    create_test_file(
        temp_dir.path(),
        "hawthorne/scarlet.txt",
        "The Project Gutenberg EBook of The Scarlet Letter, by Nathaniel Hawthorne\n\
         A throng of bearded men in sad-coloured garments",
    )?;

    create_test_file(temp_dir.path(), "README.md", "Not part of the corpus")?;

    create_test_file(temp_dir.path(), ".drafts/draft.txt", "Hidden draft")?;

    Ok(temp_dir)
}

/// Client that never goes through a proxy, so requests reach the local responder.
pub fn local_client() -> Result<reqwest::blocking::Client> {
    Ok(reqwest::blocking::Client::builder().no_proxy().build()?)
}

pub fn local_client_with_timeout(timeout: Duration) -> Result<reqwest::blocking::Client> {
    Ok(reqwest::blocking::Client::builder()
        .no_proxy()
        .timeout(timeout)
        .build()?)
}

pub fn http_response(status: &str, body: &[u8]) -> Vec<u8> {
    let mut response = format!(
        "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    )
    .into_bytes();
    response.extend_from_slice(body);
    response
}

/// Answers a single HTTP request with `response` and returns the URL to request.
pub fn serve_once(response: Vec<u8>) -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut request = Vec::new();
            let mut buf = [0_u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let _ = stream.write_all(&response);
        }
    });

    Ok(format!("http://{addr}/book.txt"))
}

/// Accepts a single connection and keeps it open for `hold` without answering.
pub fn serve_silently(hold: Duration) -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;

    thread::spawn(move || {
        if let Ok((stream, _)) = listener.accept() {
            thread::sleep(hold);
            drop(stream);
        }
    });

    Ok(format!("http://{addr}/book.txt"))
}
