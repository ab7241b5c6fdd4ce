//! dictionary.rs - Reading word lists from files, readers and URLs.
//!
//! A dictionary is UTF-8 text with one word per line. Lines are trimmed, blank lines and
//! `#` comments are skipped and a leading byte-order mark is ignored. Whether a word is
//! usable (not made only of noise) is decided later, at insertion.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, info};

use crate::errors::{Result, SieveError};

const BOM: char = '\u{feff}';
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Where a dictionary comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    File(PathBuf),
    Url(String),
}

impl DictionarySource {
    /// Interprets `location` as a URL when it has an http(s) scheme, a path otherwise.
    pub fn parse(location: &str) -> Self {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DictionarySource::Url(location.to_string())
        } else {
            DictionarySource::File(PathBuf::from(location))
        }
    }

    /// Reads every word of the source.
    pub fn read_words(&self) -> Result<Vec<String>> {
        match self {
            DictionarySource::File(path) => read_file(path),
            DictionarySource::Url(url) => fetch_url(url),
        }
    }
}

impl fmt::Display for DictionarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictionarySource::File(path) => write!(f, "{}", path.display()),
            DictionarySource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Extracts the word on one dictionary line, if any.
pub fn parse_line(line: &str) -> Option<&str> {
    let word = line.trim_start_matches(BOM).trim();
    if word.is_empty() || word.starts_with('#') {
        None
    } else {
        Some(word)
    }
}

/// Reads words from any buffered reader.
pub fn read_words<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if let Some(word) = parse_line(&line) {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

pub fn read_file(path: &Path) -> Result<Vec<String>> {
    info!("Reading dictionary from file: {}", path.display());
    let file = File::open(path).map_err(|io| SieveError::DictionaryRead {
        source_name: path.display().to_string(),
        io,
    })?;
    let words = read_words(BufReader::new(file)).map_err(|io| SieveError::DictionaryRead {
        source_name: path.display().to_string(),
        io,
    })?;
    debug!("Read {} entries from {}", words.len(), path.display());
    Ok(words)
}

/// Downloads a dictionary with a blocking HTTP client.
///
/// Must not be called from inside an async runtime worker; use a blocking task there.
pub fn fetch_url(url: &str) -> Result<Vec<String>> {
    info!("Fetching dictionary from URL: {}", url);
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| SieveError::DictionaryFetch(format!("{}: {}", url, e)))?;
    let response = client
        .get(url)
        .send()
        .map_err(|e| SieveError::DictionaryFetch(format!("{}: {}", url, e)))?;
    let status = response.status();
    if !status.is_success() {
        return Err(SieveError::DictionaryFetch(format!(
            "{}: server answered {}",
            url, status
        )));
    }
    let body = response
        .text()
        .map_err(|e| SieveError::DictionaryFetch(format!("{}: {}", url, e)))?;
    let words: Vec<String> = body
        .lines()
        .filter_map(parse_line)
        .map(str::to_string)
        .collect();
    debug!("Fetched {} entries from {}", words.len(), url);
    Ok(words)
}
