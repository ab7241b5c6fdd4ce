//! Configuration management for `wordsieve-core`.
//!
//! This module defines the settings that shape matching: which characters count as
//! noise, how text is folded before it reaches the trie, the mask used by replace and
//! the trie maintenance policy. Configurations are plain serde structs, loaded from YAML
//! and validated before an engine is built from them.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default mask written over matched content characters.
pub const DEFAULT_MASK: char = '*';

/// Maximum allowed length for a noise pattern string.
pub const MAX_NOISE_PATTERN_LENGTH: usize = 200;

/// Default upper bound on the content characters of one vocabulary word.
pub const DEFAULT_MAX_WORD_LENGTH: usize = 256;

/// Symbols treated as noise on top of ASCII punctuation and whitespace.
pub const DEFAULT_NOISE_SYMBOLS: &str = "，。！？、；：“”‘’（）【】《》〈〉「」『』·…—～￥×÷¨´";

/// Which code points the classifier ignores while scanning.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NoiseConfig {
    /// Treat Unicode whitespace as noise.
    pub whitespace: bool,
    /// Treat ASCII punctuation and symbols as noise.
    pub ascii_punctuation: bool,
    /// Additional code points treated as noise.
    pub symbols: String,
    /// Optional regex; any single character it matches is noise.
    pub pattern: Option<String>,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            whitespace: true,
            ascii_punctuation: true,
            symbols: DEFAULT_NOISE_SYMBOLS.to_string(),
            pattern: None,
        }
    }
}

impl NoiseConfig {
    /// A policy with no noise characters at all: only exact, contiguous matches.
    pub fn strict() -> Self {
        Self {
            whitespace: false,
            ascii_punctuation: false,
            symbols: String::new(),
            pattern: None,
        }
    }
}

/// Per-character folding applied to words and text alike.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NormalizeConfig {
    pub lowercase: bool,
    /// Fold full-width ASCII variants (U+FF01..U+FF5E, U+3000) to their ASCII forms.
    pub fold_width: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            fold_width: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MatchConfig {
    pub mask: char,
    /// Longest run of consecutive noise characters tolerated inside one match.
    /// `None` means unbounded.
    pub max_skip_run: Option<usize>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            mask: DEFAULT_MASK,
            max_skip_run: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Remove dead trie branches when a word is deleted.
    pub prune_on_delete: bool,
    /// Longest accepted word, counted in content characters after normalization.
    pub max_word_length: usize,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            prune_on_delete: false,
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
        }
    }
}

/// Top-level configuration for a [`crate::Vocabulary`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SieveConfig {
    pub noise: NoiseConfig,
    pub normalize: NormalizeConfig,
    pub matching: MatchConfig,
    pub vocabulary: VocabularyConfig,
}

impl SieveConfig {
    /// Loads a configuration from a YAML file and validates it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading sieve configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Parses and validates a configuration from a YAML string.
    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: SieveConfig = serde_yml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the settings that cannot be expressed in the type system.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.matching.mask.is_alphanumeric() {
            errors.push(format!(
                "matching.mask '{}' must not be a letter or digit.",
                self.matching.mask
            ));
        }

        if self.vocabulary.max_word_length == 0 {
            errors.push("vocabulary.max_word_length must be at least 1.".to_string());
        }

        if let Some(pattern) = &self.noise.pattern {
            if pattern.is_empty() {
                errors.push("noise.pattern must not be empty when present.".to_string());
            } else if pattern.len() > MAX_NOISE_PATTERN_LENGTH {
                errors.push(format!(
                    "noise.pattern length ({}) exceeds maximum allowed ({}).",
                    pattern.len(),
                    MAX_NOISE_PATTERN_LENGTH
                ));
            } else if let Err(e) = Regex::new(pattern) {
                errors.push(format!("noise.pattern is not a valid regex: {}", e));
            }
        }

        if let Some(alnum) = self.noise.symbols.chars().find(|c| c.is_alphanumeric()) {
            errors.push(format!(
                "noise.symbols contains '{}'; letters and digits are never noise.",
                alnum
            ));
        }

        if errors.is_empty() {
            debug!("Sieve configuration validated.");
            Ok(())
        } else {
            Err(anyhow!("Configuration validation failed:\n{}", errors.join("\n")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SieveConfig::default();
        assert!(config.noise.whitespace);
        assert!(config.noise.ascii_punctuation);
        assert!(config.normalize.lowercase);
        assert_eq!(config.matching.mask, '*');
        assert_eq!(config.matching.max_skip_run, None);
        assert!(!config.vocabulary.prune_on_delete);
        assert_eq!(config.vocabulary.max_word_length, DEFAULT_MAX_WORD_LENGTH);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() -> Result<()> {
        let config = SieveConfig::from_yaml("matching:\n  mask: '#'\n")?;
        assert_eq!(config.matching.mask, '#');
        assert!(config.noise.whitespace);
        Ok(())
    }

    #[test]
    fn test_rejects_alphanumeric_mask() {
        let err = SieveConfig::from_yaml("matching:\n  mask: 'x'\n").unwrap_err();
        assert!(err.to_string().contains("validation failed"));
    }

    #[test]
    fn test_rejects_bad_noise_pattern() {
        let err = SieveConfig::from_yaml("noise:\n  pattern: '[unclosed'\n").unwrap_err();
        assert!(format!("{:#}", err).contains("not a valid regex"));
    }

    #[test]
    fn test_rejects_letter_in_symbols() {
        let mut config = SieveConfig::default();
        config.noise.symbols.push('a');
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_max_word_length() {
        let err = SieveConfig::from_yaml("vocabulary:\n  max_word_length: 0\n").unwrap_err();
        assert!(err.to_string().contains("max_word_length"));
    }
}
