//! Provides the result types produced by the matcher and the helpers used to log
//! matches without leaking vocabulary contents into debug output.

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Initialized once: whether matched words may appear verbatim in debug logs.
    static ref WORDS_DEBUG_ALLOWED: bool = {
        std::env::var("WORDSIEVE_ALLOW_DEBUG_WORDS")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// One occurrence of a dictionary word in the scanned text.
///
/// Offsets are char indices into the text. `start..end` covers the whole span including
/// interleaved noise characters; `positions` lists only the content characters that were
/// consumed by the trie walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordMatch {
    /// The dictionary word, in normalized form.
    pub word: String,
    pub start: usize,
    pub end: usize,
    pub positions: Vec<usize>,
}

impl WordMatch {
    /// Number of noise characters skipped inside the span.
    pub fn skipped(&self) -> usize {
        (self.end - self.start) - self.positions.len()
    }
}

/// Outcome of a validate query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub clean: bool,
    /// First matched word by start position, when the text is not clean.
    pub word: Option<String>,
}

impl Validation {
    pub fn clean() -> Self {
        Self {
            clean: true,
            word: None,
        }
    }

    pub fn dirty(word: String) -> Self {
        Self {
            clean: false,
            word: Some(word),
        }
    }
}

pub fn redact_word(s: &str) -> String {
    const MAX_LEN: usize = 8;
    let len = s.chars().count();
    if len <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", len)
    }
}

fn loggable(word: &str) -> String {
    if *WORDS_DEBUG_ALLOWED {
        word.to_string()
    } else {
        redact_word(word)
    }
}

pub fn log_match_debug(module_path: &str, m: &WordMatch) {
    debug!(
        "{} Matched word='{}' span={}..{} skipped={}",
        module_path,
        loggable(&m.word),
        m.start,
        m.end,
        m.skipped()
    );
}

pub fn log_vocabulary_edit_debug(module_path: &str, action: &str, word: &str, changed: bool) {
    debug!(
        "{} Vocabulary {}: word='{}' changed={}",
        module_path,
        action,
        loggable(word),
        changed
    );
}
