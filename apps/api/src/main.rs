mod config;
mod db;
mod errors;
mod models;
mod routes;
mod state;
mod store;
mod wordhunt;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, StoreBackend};
use crate::db::{create_pool, ensure_schema};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{MemoryStore, PgStore, ScoreStore, SeedStore};
use crate::wordhunt::dictionary::{Dictionary, WordList};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Word Hunt API v{}", env!("CARGO_PKG_VERSION"));

    let (seed_store, score_store) = build_stores(&config).await?;
    let dictionary = load_dictionary(&config)?;

    let state = AppState::new(seed_store, score_store, dictionary);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn build_stores(config: &Config) -> Result<(Arc<dyn SeedStore>, Arc<dyn ScoreStore>)> {
    match config.store_backend {
        StoreBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required for the postgres backend")?;
            let pool = create_pool(url, config.database_max_connections).await?;
            ensure_schema(&pool).await?;
            let store = Arc::new(PgStore::new(pool));
            let seeds: Arc<dyn SeedStore> = store.clone();
            let scores: Arc<dyn ScoreStore> = store;
            Ok((seeds, scores))
        }
        StoreBackend::Memory => {
            info!("Using in-memory store; data is lost on restart");
            let store = Arc::new(MemoryStore::new());
            let seeds: Arc<dyn SeedStore> = store.clone();
            let scores: Arc<dyn ScoreStore> = store;
            Ok((seeds, scores))
        }
    }
}

fn load_dictionary(config: &Config) -> Result<Arc<dyn Dictionary>> {
    let words = match &config.word_list_path {
        Some(path) => WordList::from_file(path)?,
        None => WordList::demo(),
    };
    info!("Dictionary loaded ({} words)", words.len());
    Ok(Arc::new(words))
}
