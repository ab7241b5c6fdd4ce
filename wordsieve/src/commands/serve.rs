//! The `serve` command: load the dictionary, then run the HTTP service.

use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::server::{self, AppState};
use crate::store::{store_for, DictionaryStore};

pub async fn run_serve(config: AppConfig) -> Result<()> {
    let load_config = config.clone();
    let vocabulary = tokio::task::spawn_blocking(move || super::load_vocabulary(&load_config))
        .await
        .context("Dictionary loading task failed")??;

    let store: Arc<dyn DictionaryStore> =
        Arc::from(store_for(&config.dictionary.source, config.dictionary.persist));
    info!(
        "Serving {} words from {} (edits stored in {}).",
        vocabulary.len(),
        config.dictionary.source,
        store.location()
    );

    let state = Arc::new(AppState::new(Arc::new(vocabulary), store));
    server::serve(&config.server.bind, state).await
}
