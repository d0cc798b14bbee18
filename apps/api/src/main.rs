mod coach;
mod config;
mod errors;
mod github;
mod learning;
mod llm_client;
mod pages;
mod resume;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::github::GithubClient;
use crate::learning::store::LearningStore;
use crate::llm_client::{ChatClient, GeminiClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    let github = GithubClient::new(
        &config.github_api_url,
        &config.github_username,
        config.github_token.clone(),
        Duration::from_secs(config.github_cache_secs),
    )?;
    info!(
        "GitHub client initialized (user: {}, revalidate: {}s)",
        config.github_username, config.github_cache_secs
    );

    let chat = ChatClient::new(&config.openai_base_url, config.openai_api_key.clone())?;
    let gemini = GeminiClient::new(&config.gemini_base_url, config.gemini_api_key.clone())?;
    info!(
        "LLM clients initialized (chat key: {}, gemini key: {})",
        config.openai_api_key.is_some(),
        config.gemini_api_key.is_some()
    );

    let learning = Arc::new(LearningStore::open(&config.data_dir).await?);

    let state = AppState {
        config: config.clone(),
        repos: Arc::new(github),
        chat,
        gemini,
        learning,
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
