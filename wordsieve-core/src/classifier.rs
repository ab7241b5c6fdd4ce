//! classifier.rs - Decides which characters are noise.
//!
//! Noise characters are skipped while walking the trie, so `b.a.d` and `b a d` both match
//! the word `bad`, yet they are copied verbatim to replace output and never become part
//! of a matched word. Letters and digits in any script are always content.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashSet;

use log::debug;
use regex::Regex;

use crate::config::NoiseConfig;
use crate::errors::{Result, SieveError};

/// Classifies single code points as noise or content.
///
/// The classifier is immutable once built and can be shared between threads freely.
#[derive(Debug, Clone)]
pub struct CharacterClassifier {
    whitespace: bool,
    ascii_punctuation: bool,
    symbols: HashSet<char>,
    pattern: Option<Regex>,
}

impl Default for CharacterClassifier {
    fn default() -> Self {
        let config = NoiseConfig::default();
        Self {
            whitespace: config.whitespace,
            ascii_punctuation: config.ascii_punctuation,
            symbols: config.symbols.chars().collect(),
            pattern: None,
        }
    }
}

impl CharacterClassifier {
    /// Builds a classifier from a noise policy, compiling its optional pattern.
    pub fn new(config: &NoiseConfig) -> Result<Self> {
        let pattern = match config.pattern.as_deref() {
            Some(p) => Some(
                Regex::new(p).map_err(|e| SieveError::InvalidNoisePattern(p.to_string(), e))?,
            ),
            None => None,
        };
        let symbols: HashSet<char> = config.symbols.chars().collect();
        debug!(
            "Built character classifier: whitespace={}, ascii_punctuation={}, {} extra symbols, pattern={:?}",
            config.whitespace,
            config.ascii_punctuation,
            symbols.len(),
            config.pattern
        );
        Ok(Self {
            whitespace: config.whitespace,
            ascii_punctuation: config.ascii_punctuation,
            symbols,
            pattern,
        })
    }

    /// Returns true if `c` may be skipped while matching.
    pub fn is_skippable(&self, c: char) -> bool {
        if c.is_alphanumeric() {
            return false;
        }
        if self.whitespace && c.is_whitespace() {
            return true;
        }
        if self.ascii_punctuation && c.is_ascii_punctuation() {
            return true;
        }
        if self.symbols.contains(&c) {
            return true;
        }
        match &self.pattern {
            Some(re) => {
                let mut buf = [0u8; 4];
                re.is_match(c.encode_utf8(&mut buf))
            }
            None => false,
        }
    }

    /// Drops every noise character from `chars`.
    pub fn strip(&self, chars: &[char]) -> Vec<char> {
        chars.iter().copied().filter(|&c| !self.is_skippable(c)).collect()
    }
}
