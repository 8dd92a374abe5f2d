//! Order intake service
//!
//! Reads `MONGODB_URI` (required) and `PORT` (default 8080) from the
//! environment or a `.env` file, verifies MongoDB is reachable, then serves
//! `POST /order`.

use anyhow::Result;
use order_intake::config::ServerConfig;
use order_intake::core::StartupError;
use order_intake::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "order_intake=info,tower_http=info".into()),
        )
        .init();

    if let Err(e) = dotenv {
        tracing::warn!("Could not load .env file: {}", e);
    }

    let config = ServerConfig::from_env()?;

    let store = MongoOrderStore::from_config(&config)
        .await
        .map_err(|e| StartupError::StoreUnavailable(format!("{:#}", e)))?;
    store
        .ping()
        .await
        .map_err(|e| StartupError::StoreUnavailable(format!("{:#}", e)))?;

    tracing::info!(
        database = %config.database,
        collection = %config.collection,
        "Connected to MongoDB"
    );

    ServerBuilder::new()
        .with_store(store)
        .with_store_timeout(config.store_timeout)
        .serve(config.listen_addr())
        .await
}
