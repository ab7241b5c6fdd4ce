//! HTTP adapter over the shared vocabulary.
//!
//! Every endpoint answers HTTP 200 with a `{code, data, message}` envelope; `code` is 0 on
//! success and 1 when the request was rejected.

pub mod extract;
pub mod handlers;
pub mod router;
pub mod types;

use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;

pub use router::{create_router, AppState};

/// Binds `addr` and serves until Ctrl-C.
pub async fn serve(addr: &str, state: Arc<AppState>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("wordsieve listening on {}", listener.local_addr()?);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("wordsieve stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received.");
}
