mod config;
mod db;
mod embedding;
mod errors;
mod extract;
mod matching;
mod models;
mod routes;
mod state;
mod vector_index;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, EmbeddingConfig};
use crate::db::create_pool;
use crate::embedding::{Embedder, LocalEmbedder, OpenAiEmbedder};
use crate::routes::build_router;
use crate::state::AppState;
use crate::vector_index::PineconeClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let crate_target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{crate_target}={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume-match API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize embedding backend
    let embedder: Arc<dyn Embedder> = match &config.embedding {
        EmbeddingConfig::OpenAi { api_key } => Arc::new(OpenAiEmbedder::new(api_key.clone())),
        EmbeddingConfig::Local { server_url } => Arc::new(LocalEmbedder::new(server_url.clone())),
    };
    info!("Embedder initialized (backend: {})", embedder.backend());

    // Initialize vector index client
    let index = PineconeClient::new(
        config.pinecone_api_key.clone(),
        config.pinecone_index_host.clone(),
    );
    info!("Vector index client initialized ({})", config.pinecone_index_host);

    // CORS restricted to the configured frontend, credentials allowed
    let cors = CorsLayer::new()
        .allow_origin(
            config
                .frontend_url
                .parse::<HeaderValue>()
                .context("FRONTEND_URL is not a valid origin")?,
        )
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    // Build app state
    let state = AppState {
        db,
        embedder,
        index,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
