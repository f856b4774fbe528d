//! Media API - REST facade over the `media` MongoDB database.
//!
//! Exposes CRUD endpoints for films and pokemon plus read-only pokemon
//! rankings and statistics.
//!
//! ## Architecture
//!
//! - `config` - Environment configuration
//! - `database` - MongoDB client and collection repositories
//! - `query` - Filter and aggregation pipeline builders
//! - `api` - Route handlers, error and response shaping
//! - `server` - HTTP listener and graceful shutdown

mod api;
mod config;
mod database;
mod query;
mod server;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use database::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file first (before anything else)
    dotenvy::dotenv().ok();

    // If RUST_LOG is not set, default to "info" level for our crate
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("media_api=info,tower_http=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();

    info!("Starting media API...");

    let config = Config::from_env()?;
    info!("Configuration loaded successfully");

    info!("Connecting to MongoDB...");
    let db = Database::connect(
        &config.mongodb_uri,
        &config.mongodb_database,
        config.mongodb_timeout,
    )
    .await?;
    info!("Database connected: {}", config.mongodb_database);

    server::run(&config, db).await
}
