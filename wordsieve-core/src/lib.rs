// wordsieve-core/src/lib.rs
//! # wordsieve Core Library
//!
//! `wordsieve-core` provides the matching engine behind the wordsieve service: a mutable,
//! Unicode-aware vocabulary of sensitive words and a scanner that finds those words in
//! arbitrary text, including occurrences disguised by noise characters placed between
//! their letters (`b.a.d`, `b a d`, `坏 人`).
//!
//! The library performs no I/O of its own beyond reading dictionary sources on request;
//! serving requests and persisting edits belong to the application crate.
//!
//! ## Modules
//!
//! * `classifier`: `CharacterClassifier`, the noise policy.
//! * `normalize`: `Normalizer`, per-character folding applied to words and text alike.
//! * `trie`: the code point trie that stores the vocabulary.
//! * `engine`: the scanning algorithm and the `MatchSink` strategies built on it.
//! * `vocabulary`: `Vocabulary`, the lock-guarded shared state and its public operations.
//! * `dictionary`: readers for one-word-per-line dictionaries (files, readers, URLs).
//! * `headless`: query dispatch and one-shot helpers.
//! * `config`: `SieveConfig` and its YAML loading.
//! * `word_match`: result types and log-redaction helpers.
//! * `errors`: `SieveError`.
//!
//! ## Usage Example
//!
//! ```rust
//! use wordsieve_core::Vocabulary;
//!
//! let vocabulary = Vocabulary::from_words(["bad", "word"]);
//!
//! assert_eq!(vocabulary.find_all("this is a bad word"), vec!["bad", "word"]);
//! assert_eq!(vocabulary.replace("this is a b.a.d word"), "this is a *.*.* ****");
//! assert!(vocabulary.validate("this is clean").clean);
//!
//! vocabulary.del_word("bad").unwrap();
//! assert_eq!(vocabulary.find_all("this is a bad word"), vec!["word"]);
//! ```
//!
//! ## Error Handling
//!
//! Engine operations are total: queries never fail and an empty text simply has no
//! matches. Word edits reject words with nothing to match or longer than the configured
//! `max_word_length` (`SieveError::InvalidWord`), and
//! loading fails only when a dictionary source cannot be read.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod classifier;
pub mod config;
pub mod dictionary;
pub mod engine;
pub mod errors;
pub mod headless;
pub mod normalize;
pub mod trie;
pub mod vocabulary;
pub mod word_match;

/// Re-exports the configuration types.
pub use config::{
    MatchConfig, NoiseConfig, NormalizeConfig, SieveConfig, VocabularyConfig, DEFAULT_MASK,
    DEFAULT_MAX_WORD_LENGTH, DEFAULT_NOISE_SYMBOLS,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::SieveError;

pub use classifier::CharacterClassifier;
pub use dictionary::DictionarySource;
pub use engine::{FilterSink, FindAllSink, FirstMatchSink, MaskSink, MatchEngine, MatchSink, Matches};
pub use normalize::Normalizer;
pub use trie::{Trie, TrieNode};
pub use vocabulary::{LoadReport, Vocabulary, VocabularyStats};
pub use word_match::{redact_word, Validation, WordMatch};

/// Re-exports types and functions for one-shot, non-interactive use.
pub use headless::{headless_query, run_query, Query, QueryOutput};
