//! Command implementations for the wordsieve binary.

pub mod query;
pub mod serve;

use anyhow::{Context, Result};
use log::{error, info};

use wordsieve_core::{DictionarySource, Vocabulary};

use crate::config::{AppConfig, LoadFailurePolicy};

/// Builds the vocabulary described by `config` and loads its dictionary.
///
/// Blocking: reads a file or downloads a URL. With [`LoadFailurePolicy::Empty`] an unreadable
/// dictionary leaves the vocabulary empty instead of failing.
pub fn load_vocabulary(config: &AppConfig) -> Result<Vocabulary> {
    let vocabulary =
        Vocabulary::with_config(&config.sieve).context("Invalid sieve configuration")?;
    let source = DictionarySource::parse(&config.dictionary.source);

    match vocabulary.load_from_source(&source) {
        Ok(report) => {
            info!(
                "Dictionary {} loaded: {} words ({} duplicates, {} rejected).",
                source,
                vocabulary.len(),
                report.duplicates,
                report.rejected
            );
        }
        Err(e) => match config.dictionary.on_load_failure {
            LoadFailurePolicy::Abort => {
                return Err(e).with_context(|| format!("Failed to load dictionary {}", source));
            }
            LoadFailurePolicy::Empty => {
                error!("Failed to load dictionary {}: {}. Starting with an empty vocabulary.", source, e);
            }
        },
    }
    Ok(vocabulary)
}
