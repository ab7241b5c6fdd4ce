// wordsieve-core/src/vocabulary.rs
//! The shared, mutable vocabulary and the entry points the service calls.
//!
//! A [`Vocabulary`] owns the trie behind a single reader/writer lock. Queries take the
//! read side and run in parallel; loads and edits take the write side and exclude
//! everything else. Words and query text go through the same [`Normalizer`] and
//! [`CharacterClassifier`], so a word is found in text exactly when its normalized
//! content characters appear there in order, separated only by noise.
//!
//! Edits live in memory only. Persisting them is the caller's job.
//!
//! License: MIT OR APACHE 2.0

use std::io::BufRead;
use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::classifier::CharacterClassifier;
use crate::config::SieveConfig;
use crate::dictionary::{self, DictionarySource};
use crate::engine::MatchEngine;
use crate::errors::{Result, SieveError};
use crate::normalize::Normalizer;
use crate::trie::Trie;
use crate::word_match::{log_vocabulary_edit_debug, Validation, WordMatch};

/// Counts from a bulk load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    /// Entries that added a new word.
    pub inserted: usize,
    /// Entries already present (within the source or from before).
    pub duplicates: usize,
    /// Entries with nothing left to match after normalization, or too long.
    pub rejected: usize,
}

/// Diagnostic snapshot of a vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyStats {
    pub words: usize,
    pub nodes: usize,
    pub fingerprint: String,
}

#[derive(Debug)]
pub struct Vocabulary {
    trie: RwLock<Trie>,
    classifier: CharacterClassifier,
    normalizer: Normalizer,
    mask: char,
    max_skip_run: Option<usize>,
    max_word_length: usize,
}

impl Default for Vocabulary {
    fn default() -> Self {
        let config = SieveConfig::default();
        Self {
            trie: RwLock::new(Trie::with_pruning(config.vocabulary.prune_on_delete)),
            classifier: CharacterClassifier::default(),
            normalizer: Normalizer::new(&config.normalize),
            mask: config.matching.mask,
            max_skip_run: config.matching.max_skip_run,
            max_word_length: config.vocabulary.max_word_length,
        }
    }
}

impl Vocabulary {
    /// An empty vocabulary with the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty vocabulary built from a validated configuration.
    pub fn with_config(config: &SieveConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| SieveError::Config(format!("{:#}", e)))?;
        let classifier = CharacterClassifier::new(&config.noise)?;
        Ok(Self {
            trie: RwLock::new(Trie::with_pruning(config.vocabulary.prune_on_delete)),
            classifier,
            normalizer: Normalizer::new(&config.normalize),
            mask: config.matching.mask,
            max_skip_run: config.matching.max_skip_run,
            max_word_length: config.vocabulary.max_word_length,
        })
    }

    /// Convenience constructor: default policy, preloaded with `words`.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let vocabulary = Self::new();
        vocabulary.load(words);
        vocabulary
    }

    pub fn classifier(&self) -> &CharacterClassifier {
        &self.classifier
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn mask(&self) -> char {
        self.mask
    }

    // Each write leaves the trie consistent, so a poisoned lock still guards valid data.
    fn read(&self) -> RwLockReadGuard<'_, Trie> {
        self.trie.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Trie> {
        self.trie.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Normalizes a word and strips noise, yielding the key stored in the trie.
    /// `None` when nothing is left or the key exceeds `max_word_length`.
    pub fn word_key(&self, word: &str) -> Option<Vec<char>> {
        self.checked_key(word).ok()
    }

    fn checked_key(&self, word: &str) -> Result<Vec<char>> {
        let normalized = self.normalizer.normalize(word.trim());
        let key = self.classifier.strip(&normalized);
        if key.is_empty() {
            Err(SieveError::InvalidWord(format!(
                "'{}' has no matchable characters after normalization",
                word
            )))
        } else if key.len() > self.max_word_length {
            Err(SieveError::InvalidWord(format!(
                "{} characters exceeds the maximum of {}",
                key.len(),
                self.max_word_length
            )))
        } else {
            Ok(key)
        }
    }

    /// Inserts every entry, skipping duplicates and entries with nothing to match.
    pub fn load<I, S>(&self, words: I) -> LoadReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys: Vec<Option<Vec<char>>> =
            words.into_iter().map(|w| self.word_key(w.as_ref())).collect();

        let mut report = LoadReport::default();
        let mut trie = self.write();
        for key in keys {
            match key {
                Some(key) if trie.insert(&key) => report.inserted += 1,
                Some(_) => report.duplicates += 1,
                None => report.rejected += 1,
            }
        }
        let total = trie.len();
        drop(trie);

        info!(
            "Loaded vocabulary: {} inserted, {} duplicates, {} rejected, {} words total.",
            report.inserted, report.duplicates, report.rejected, total
        );
        if report.rejected > 0 {
            warn!(
                "{} dictionary entries were empty after normalization or too long, and were skipped.",
                report.rejected
            );
        }
        report
    }

    pub fn load_from_reader<R: BufRead>(&self, reader: R) -> Result<LoadReport> {
        let words = dictionary::read_words(reader).map_err(|io| SieveError::DictionaryRead {
            source_name: "<reader>".to_string(),
            io,
        })?;
        Ok(self.load(words))
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<LoadReport> {
        let words = dictionary::read_file(path.as_ref())?;
        Ok(self.load(words))
    }

    /// Blocking download; see [`dictionary::fetch_url`].
    pub fn load_from_url(&self, url: &str) -> Result<LoadReport> {
        let words = dictionary::fetch_url(url)?;
        Ok(self.load(words))
    }

    pub fn load_from_source(&self, source: &DictionarySource) -> Result<LoadReport> {
        let words = source.read_words()?;
        Ok(self.load(words))
    }

    /// Adds a word; `Ok(true)` if it was not present before.
    pub fn add_word(&self, word: &str) -> Result<bool> {
        let key = self.checked_key(word)?;
        let added = self.write().insert(&key);
        log_vocabulary_edit_debug(module_path!(), "add", word, added);
        Ok(added)
    }

    /// Adds several words under one write lock, returning how many were new.
    /// Nothing is inserted if any word is invalid.
    pub fn add_words<S: AsRef<str>>(&self, words: &[S]) -> Result<usize> {
        let keys = words
            .iter()
            .map(|w| self.checked_key(w.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        let mut trie = self.write();
        let added = keys.iter().filter(|key| trie.insert(key)).count();
        debug!("Added {} of {} words.", added, keys.len());
        Ok(added)
    }

    /// Deletes a word; `Ok(true)` if it was present.
    pub fn del_word(&self, word: &str) -> Result<bool> {
        let key = self.checked_key(word)?;
        let removed = self.write().remove(&key);
        log_vocabulary_edit_debug(module_path!(), "delete", word, removed);
        Ok(removed)
    }

    /// Deletes several words under one write lock, returning how many were present.
    pub fn del_words<S: AsRef<str>>(&self, words: &[S]) -> Result<usize> {
        let keys = words
            .iter()
            .map(|w| self.checked_key(w.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        let mut trie = self.write();
        let removed = keys.iter().filter(|key| trie.remove(key)).count();
        debug!("Deleted {} of {} words.", removed, keys.len());
        Ok(removed)
    }

    /// True if `word`, once normalized, is in the vocabulary.
    pub fn contains(&self, word: &str) -> bool {
        match self.word_key(word) {
            Some(key) => self.read().contains(&key),
            None => false,
        }
    }

    fn with_engine<T>(&self, f: impl FnOnce(MatchEngine<'_>) -> T) -> T {
        let trie = self.read();
        let engine = MatchEngine::new(&trie, &self.classifier).with_max_skip_run(self.max_skip_run);
        f(engine)
    }

    /// Masks every matched content character with the configured mask.
    pub fn replace(&self, text: &str) -> String {
        self.replace_with(text, self.mask)
    }

    pub fn replace_with(&self, text: &str, mask: char) -> String {
        let normalized = self.normalizer.normalize(text);
        self.with_engine(|engine| engine.replace(text, &normalized, mask))
    }

    /// Distinct matched words in first-seen order.
    pub fn filter(&self, text: &str) -> Vec<String> {
        let normalized = self.normalizer.normalize(text);
        self.with_engine(|engine| engine.filter(&normalized))
    }

    pub fn validate(&self, text: &str) -> Validation {
        let normalized = self.normalizer.normalize(text);
        self.with_engine(|engine| engine.validate(&normalized))
    }

    /// Every matched word in order, duplicates included.
    pub fn find_all(&self, text: &str) -> Vec<String> {
        let normalized = self.normalizer.normalize(text);
        self.with_engine(|engine| engine.find_all(&normalized))
    }

    /// Full match records, for callers that need spans.
    pub fn find_matches(&self, text: &str) -> Vec<WordMatch> {
        let normalized = self.normalizer.normalize(text);
        self.with_engine(|engine| engine.matches(&normalized).collect())
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.read().node_count()
    }

    /// All active words in normalized form, sorted.
    pub fn words(&self) -> Vec<String> {
        self.read().words()
    }

    /// SHA-256 over the sorted word list; equal vocabularies have equal fingerprints.
    pub fn fingerprint(&self) -> String {
        fingerprint_words(&self.words())
    }

    pub fn stats(&self) -> VocabularyStats {
        let trie = self.read();
        let words = trie.words();
        VocabularyStats {
            words: trie.len(),
            nodes: trie.node_count(),
            fingerprint: fingerprint_words(&words),
        }
    }
}

fn fingerprint_words(words: &[String]) -> String {
    let mut hasher = Sha256::new();
    for word in words {
        hasher.update(word.as_bytes());
        hasher.update(b"\n");
    }
    hex::encode(hasher.finalize())
}
