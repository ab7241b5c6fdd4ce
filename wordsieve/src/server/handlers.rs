use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{error, warn};
use std::sync::Arc;

use wordsieve_core::{run_query, Query, QueryOutput, SieveError};

use super::extract::Payload;
use super::router::AppState;
use super::types::*;

const INVALID_PARAMETER: &str = "invalid parameter";

/// Error wrapper for API handlers.
///
/// Failures are reported inside the envelope with `code = 1`; the HTTP status stays 200
/// so clients only ever inspect the body.
#[derive(Debug)]
pub enum ApiError {
    /// Missing or empty `str`/`word`.
    InvalidParameter,
    /// The body could not be decoded.
    Bind(String),
    Sieve(SieveError),
}

impl From<SieveError> for ApiError {
    fn from(e: SieveError) -> Self {
        ApiError::Sieve(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match self {
            ApiError::InvalidParameter => INVALID_PARAMETER.to_string(),
            ApiError::Bind(msg) => msg,
            ApiError::Sieve(e) if e.is_validation() => {
                warn!("Rejected request: {}", e);
                INVALID_PARAMETER.to_string()
            }
            ApiError::Sieve(e) => {
                error!("Request failed: {}", e);
                e.to_string()
            }
        };
        (StatusCode::OK, Json(Envelope::<()>::error(message))).into_response()
    }
}

fn answer(state: &AppState, query: Query, req: TextRequest) -> Result<QueryOutput, ApiError> {
    let text = req.into_text()?;
    Ok(run_query(&state.vocabulary, query, &text))
}

/// Carries an edit of `word` to the configured store, returning a message for the
/// envelope. The in-memory edit stands even if this fails.
async fn persist(state: &Arc<AppState>, word: String) -> String {
    let state = Arc::clone(state);
    let result =
        tokio::task::spawn_blocking(move || state.store.sync_word(&state.vocabulary, &word)).await;
    match result {
        Ok(Ok(_)) => String::new(),
        Ok(Err(e)) => {
            warn!("Vocabulary edit applied in memory but not persisted: {}", e);
            format!("applied in memory only: {}", e)
        }
        Err(e) => {
            error!("Persistence task failed: {}", e);
            "applied in memory only: persistence task failed".to_string()
        }
    }
}

/// POST /replace
pub async fn replace(
    State(state): State<Arc<AppState>>,
    Payload(req): Payload<TextRequest>,
) -> Result<Json<Envelope<QueryOutput>>, ApiError> {
    Ok(Json(Envelope::ok(answer(&state, Query::Replace, req)?)))
}

/// POST /filter
pub async fn filter(
    State(state): State<Arc<AppState>>,
    Payload(req): Payload<TextRequest>,
) -> Result<Json<Envelope<QueryOutput>>, ApiError> {
    Ok(Json(Envelope::ok(answer(&state, Query::Filter, req)?)))
}

/// POST /validate
pub async fn validate(
    State(state): State<Arc<AppState>>,
    Payload(req): Payload<TextRequest>,
) -> Result<Json<Envelope<ValidateData>>, ApiError> {
    let data = match answer(&state, Query::Validate, req)? {
        QueryOutput::Validation(v) => ValidateData {
            result: if v.clean { 1 } else { 0 },
            words: v.word.into_iter().collect(),
        },
        other => {
            error!("Validate query produced unexpected output: {:?}", other);
            return Err(ApiError::Bind("internal error".to_string()));
        }
    };
    Ok(Json(Envelope::ok(data)))
}

/// POST /findAll
pub async fn find_all(
    State(state): State<Arc<AppState>>,
    Payload(req): Payload<TextRequest>,
) -> Result<Json<Envelope<QueryOutput>>, ApiError> {
    Ok(Json(Envelope::ok(answer(&state, Query::FindAll, req)?)))
}

/// POST /addWord
pub async fn add_word(
    State(state): State<Arc<AppState>>,
    Payload(req): Payload<WordRequest>,
) -> Result<Json<Envelope<AddWordData>>, ApiError> {
    let word = req.into_word()?;
    let added = state.vocabulary.add_word(&word)?;
    let message = if added { persist(&state, word).await } else { String::new() };
    Ok(Json(Envelope::ok_with_message(AddWordData { added }, message)))
}

/// POST /delWord
pub async fn del_word(
    State(state): State<Arc<AppState>>,
    Payload(req): Payload<WordRequest>,
) -> Result<Json<Envelope<DelWordData>>, ApiError> {
    let word = req.into_word()?;
    let removed = state.vocabulary.del_word(&word)?;
    let message = if removed { persist(&state, word).await } else { String::new() };
    Ok(Json(Envelope::ok_with_message(DelWordData { removed }, message)))
}

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<Envelope<HealthData>> {
    let stats = state.vocabulary.stats();
    Json(Envelope::ok(HealthData {
        status: "ok".to_string(),
        words: stats.words,
        nodes: stats.nodes,
        fingerprint: stats.fingerprint,
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
