//! Embedding — maps résumé text to a fixed-length vector.
//!
//! Two interchangeable backends exist (remote OpenAI API vs a local
//! sentence-embedding server), selected at startup via EMBEDDING_BACKEND.
//! `AppState` holds an `Arc<dyn Embedder>` so the pipeline never knows which
//! one is running.

use async_trait::async_trait;

use crate::errors::AppError;

pub mod local;
pub mod openai;

pub use local::LocalEmbedder;
pub use openai::OpenAiEmbedder;

/// The embedder trait. Implement this to swap backends without touching the
/// handler or pipeline code.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, AppError>;

    /// Backend name for startup logging.
    fn backend(&self) -> &'static str;
}
