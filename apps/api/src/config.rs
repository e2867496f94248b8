use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub frontend_url: String,
    pub database_url: String,
    pub pinecone_api_key: String,
    pub pinecone_index_host: String,
    pub embedding: EmbeddingConfig,
    pub port: u16,
    pub rust_log: String,
}

/// Which embedding backend to run, chosen via EMBEDDING_BACKEND.
/// Both backends are functionally equivalent from the pipeline's view.
#[derive(Debug, Clone)]
pub enum EmbeddingConfig {
    /// Remote OpenAI embeddings API.
    OpenAi { api_key: String },
    /// Local sentence-embedding inference server (text-embeddings-inference).
    Local { server_url: String },
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let backend = std::env::var("EMBEDDING_BACKEND").unwrap_or_else(|_| "local".to_string());
        let embedding = match backend.as_str() {
            "openai" => EmbeddingConfig::OpenAi {
                api_key: require_env("OPENAI_API_KEY")?,
            },
            "local" => EmbeddingConfig::Local {
                server_url: require_env("EMBEDDING_SERVER_URL")?,
            },
            other => bail!("EMBEDDING_BACKEND must be 'openai' or 'local', got '{other}'"),
        };

        Ok(Config {
            frontend_url: require_env("FRONTEND_URL")?,
            database_url: require_env("DATABASE_URL")?,
            pinecone_api_key: require_env("PINECONE_API_KEY")?,
            pinecone_index_host: require_env("PINECONE_INDEX_HOST")?,
            embedding,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
