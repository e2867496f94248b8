use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::embedding::Embedder;
use crate::errors::AppError;

#[derive(Debug, Serialize)]
struct EmbedRequest<'a> {
    inputs: &'a str,
}

/// Local embedder backed by a sentence-embedding inference server speaking
/// the text-embeddings-inference wire shape (all-MiniLM-L6-v2 deployment).
#[derive(Clone)]
pub struct LocalEmbedder {
    client: Client,
    server_url: String,
}

impl LocalEmbedder {
    pub fn new(server_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            server_url,
        }
    }
}

#[async_trait]
impl Embedder for LocalEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, AppError> {
        let url = format!("{}/embed", self.server_url.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .json(&EmbedRequest { inputs: text })
            .send()
            .await
            .map_err(|e| AppError::Embedding(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Embedding(format!(
                "embedding server returned {status}: {body}"
            )));
        }

        // The server returns one embedding per input, as a nested array.
        let mut rows: Vec<Vec<f32>> = response
            .json()
            .await
            .map_err(|e| AppError::Embedding(e.to_string()))?;

        if rows.is_empty() {
            return Err(AppError::Embedding(
                "embedding server returned no vectors".to_string(),
            ));
        }

        let embedding = rows.swap_remove(0);
        debug!("Local embedding computed (dimension {})", embedding.len());
        Ok(embedding)
    }

    fn backend(&self) -> &'static str {
        "local"
    }
}
