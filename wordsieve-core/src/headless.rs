// File: wordsieve-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for running queries without a long-lived service.
//!
//! [`Query`] names the four read-only operations so that callers such as the CLI and the
//! HTTP adapter can dispatch on a value instead of repeating themselves, and
//! [`headless_query`] does a full one-shot run: build a vocabulary, load a dictionary,
//! answer one query.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::SieveConfig;
use crate::dictionary::DictionarySource;
use crate::vocabulary::Vocabulary;
use crate::word_match::Validation;

/// The read-only operations a vocabulary answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Query {
    Replace,
    Filter,
    Validate,
    FindAll,
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Query::Replace => "replace",
            Query::Filter => "filter",
            Query::Validate => "validate",
            Query::FindAll => "find-all",
        };
        f.write_str(name)
    }
}

/// The answer to a [`Query`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryOutput {
    Text(String),
    Words(Vec<String>),
    Validation(Validation),
}

impl QueryOutput {
    /// False only for a validation that found a word.
    pub fn is_clean(&self) -> bool {
        match self {
            QueryOutput::Validation(v) => v.clean,
            _ => true,
        }
    }
}

/// Answers `query` against an existing vocabulary.
pub fn run_query(vocabulary: &Vocabulary, query: Query, text: &str) -> QueryOutput {
    match query {
        Query::Replace => QueryOutput::Text(vocabulary.replace(text)),
        Query::Filter => QueryOutput::Words(vocabulary.filter(text)),
        Query::Validate => QueryOutput::Validation(vocabulary.validate(text)),
        Query::FindAll => QueryOutput::Words(vocabulary.find_all(text)),
    }
}

/// Builds a vocabulary from `config` and `source`, then answers a single query.
pub fn headless_query(
    config: &SieveConfig,
    source: &DictionarySource,
    text: &str,
    query: Query,
) -> Result<QueryOutput> {
    let vocabulary = Vocabulary::with_config(config).context("Failed to build vocabulary")?;
    vocabulary
        .load_from_source(source)
        .with_context(|| format!("Failed to load dictionary {}", source))?;
    Ok(run_query(&vocabulary, query, text))
}
