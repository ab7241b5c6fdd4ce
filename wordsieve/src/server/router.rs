use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use log::info;
use std::sync::Arc;
use std::time::Instant;

use wordsieve_core::Vocabulary;

use super::handlers;
use crate::store::DictionaryStore;

/// Shared state handed to every handler.
pub struct AppState {
    pub vocabulary: Arc<Vocabulary>,
    pub store: Arc<dyn DictionaryStore>,
}

impl AppState {
    pub fn new(vocabulary: Arc<Vocabulary>, store: Arc<dyn DictionaryStore>) -> Self {
        Self { vocabulary, store }
    }
}

/// One line per request. Bodies are never logged since they carry user text.
async fn access_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();
    let response = next.run(req).await;
    info!(
        "{} {} -> {} ({} ms)",
        method,
        path,
        response.status().as_u16(),
        started.elapsed().as_millis()
    );
    response
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/replace", post(handlers::replace))
        .route("/filter", post(handlers::filter))
        .route("/validate", post(handlers::validate))
        .route("/findAll", post(handlers::find_all))
        .route("/addWord", post(handlers::add_word))
        .route("/delWord", post(handlers::del_word))
        .route("/health", get(handlers::health))
        .layer(middleware::from_fn(access_log))
        .with_state(state)
}
