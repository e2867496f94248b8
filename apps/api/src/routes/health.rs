use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-match-api"
    }))
}

/// GET /testing
/// Diagnostic echo of the configured frontend origin.
pub async fn testing_handler(State(state): State<AppState>) -> Json<String> {
    Json(state.config.frontend_url.clone())
}
