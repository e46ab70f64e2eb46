mod api;
mod config;
mod ip;
mod models;
mod storage;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use config::{Config, DatabaseBackend};
use storage::{PostgresStorage, SqliteStorage, Storage};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration; a missing DATABASE_URL is fatal here
    let config = Config::from_env()?;
    info!("Loaded configuration");

    // Initialize storage
    let storage: Arc<dyn Storage> = match config.database.backend {
        DatabaseBackend::Sqlite => {
            info!("Using SQLite storage: {}", config.database.url);
            Arc::new(SqliteStorage::new(&config.database.url).await?)
        }
        DatabaseBackend::Postgres => {
            info!("Using PostgreSQL storage: {}", config.database.url);
            Arc::new(PostgresStorage::new(&config.database.url).await?)
        }
    };

    // Create the ip_records table if it does not exist yet
    info!("Initializing database...");
    storage.init().await?;
    info!("Database initialized successfully");

    let router = api::create_router(storage);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🚀 Server listening on http://{}", addr);

    // ConnectInfo carries the peer address for handlers that fall back to it
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
