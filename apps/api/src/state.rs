use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::embedding::Embedder;
use crate::vector_index::PineconeClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Pluggable embedding backend, chosen at startup via EMBEDDING_BACKEND.
    pub embedder: Arc<dyn Embedder>,
    pub index: PineconeClient,
    pub config: Config,
}
