// wordsieve/src/store.rs
//! Durable storage for vocabulary edits.
//!
//! The matching core keeps edits in memory only. A [`DictionaryStore`] carries each edit
//! back to where the dictionary came from so a restart sees the same words.
//!
//! The file store edits the dictionary line by line. Comments, blank lines and the
//! original spelling of every entry survive; only lines whose word maps to the edited key
//! are added or dropped. Each sync reads the word's current state from the vocabulary
//! inside the store's lock, so racing add/delete requests settle on the latest state.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use log::{debug, info, warn};
use thiserror::Error;

use wordsieve_core::dictionary::parse_line;
use wordsieve_core::{DictionarySource, Vocabulary};

const TMP_SUFFIX: &str = "tmp";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to write dictionary '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub trait DictionaryStore: Send + Sync {
    /// Human-readable location, for logs.
    fn location(&self) -> String;

    /// Makes the stored dictionary agree with `vocabulary` about `word`: present if the
    /// vocabulary contains it, absent otherwise. Returns whether the store changed.
    fn sync_word(&self, vocabulary: &Vocabulary, word: &str) -> Result<bool, StoreError>;
}

/// Edits a one-word-per-line file in place (temp file, then rename).
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read_lines(&self) -> io::Result<Vec<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(text.lines().map(str::to_string).collect()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }

    fn write_lines(&self, lines: &[String]) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp_path = self.path.with_extension(match self.path.extension() {
            Some(ext) => format!("{}.{}", ext.to_string_lossy(), TMP_SUFFIX),
            None => TMP_SUFFIX.to_string(),
        });
        {
            let mut tmp = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&tmp_path)?;
            fs2::FileExt::lock_exclusive(&tmp)?;
            for line in lines {
                writeln!(tmp, "{}", line)?;
            }
            tmp.flush()?;
            tmp.sync_all()?;
            fs2::FileExt::unlock(&tmp)?;
        }
        fs::rename(&tmp_path, &self.path)
    }

    fn sync(&self, vocabulary: &Vocabulary, word: &str) -> io::Result<bool> {
        let Some(key) = vocabulary.word_key(word) else {
            return Ok(false);
        };
        let same_key = |line: &str| {
            parse_line(line)
                .and_then(|entry| vocabulary.word_key(entry))
                .as_deref()
                == Some(key.as_slice())
        };

        let mut lines = self.read_lines()?;
        let listed = lines.iter().any(|line| same_key(line.as_str()));

        if vocabulary.contains(word) {
            if listed {
                return Ok(false);
            }
            lines.push(word.trim().to_string());
        } else {
            if !listed {
                return Ok(false);
            }
            lines.retain(|line| !same_key(line.as_str()));
        }
        self.write_lines(&lines)?;
        Ok(true)
    }
}

impl DictionaryStore for FileStore {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn sync_word(&self, vocabulary: &Vocabulary, word: &str) -> Result<bool, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let changed = self.sync(vocabulary, word).map_err(|e| self.io_err(e))?;
        debug!(
            "Dictionary {} {}.",
            self.path.display(),
            if changed { "updated" } else { "already up to date" }
        );
        Ok(changed)
    }
}

/// Store used when persistence is disabled: edits stay in memory.
#[derive(Debug, Default)]
pub struct MemoryOnlyStore;

impl DictionaryStore for MemoryOnlyStore {
    fn location(&self) -> String {
        "<memory>".to_string()
    }

    fn sync_word(&self, _vocabulary: &Vocabulary, _word: &str) -> Result<bool, StoreError> {
        Ok(false)
    }
}

/// Picks the store for a dictionary source. URLs cannot be written back.
pub fn store_for(source: &str, persist: bool) -> Box<dyn DictionaryStore> {
    let is_url = matches!(DictionarySource::parse(source), DictionarySource::Url(_));
    if persist && !is_url {
        info!("Vocabulary edits will be persisted to {}", source);
        Box::new(FileStore::new(source))
    } else {
        if persist {
            warn!("Dictionary source {} is a URL; edits will not be persisted.", source);
        }
        Box::new(MemoryOnlyStore)
    }
}
