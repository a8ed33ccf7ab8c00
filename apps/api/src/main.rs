mod catalog;
mod config;
mod errors;
mod fees;
mod llm_client;
mod posting;
mod routes;
mod state;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::JobCatalog;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Credential and configuration checks run before anything user-facing.
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let package = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{}={}", package, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Posting Generator v{}", env!("CARGO_PKG_VERSION"));

    // Load the job catalog once; it stays immutable for the process lifetime.
    let catalog = JobCatalog::load(Path::new(&config.catalog_path))
        .with_context(|| format!("Failed to load job catalog from {}", config.catalog_path))?;
    info!("Job catalog loaded: {} jobs", catalog.len());

    let llm = LlmClient::new(config.openai_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let state = AppState {
        catalog: Arc::new(catalog),
        llm,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
