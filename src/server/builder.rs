//! ServerBuilder for fluent API to build the order intake HTTP server

use super::cors::enable_cors;
use super::handlers::{AppState, create_order, health_check, method_not_allowed};
use crate::core::gateway::{DEFAULT_STORE_TIMEOUT, StoreGateway};
use crate::core::pipeline::OrderPipeline;
use crate::core::store::OrderStore;
use anyhow::Result;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::StatusCode,
    middleware,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Largest accepted `/order` body, matching MongoDB's 16 MiB document limit
pub const MAX_ORDER_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Builder for the order intake router
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_store(InMemoryOrderStore::new())
///     .with_store_timeout(Duration::from_secs(5))
///     .build()?;
/// ```
pub struct ServerBuilder {
    store: Option<Arc<dyn OrderStore>>,
    store_timeout: Duration,
    body_limit: usize,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            store: None,
            store_timeout: DEFAULT_STORE_TIMEOUT,
            body_limit: MAX_ORDER_BODY_BYTES,
        }
    }

    /// Set the order store (required)
    pub fn with_store(self, store: impl OrderStore + 'static) -> Self {
        self.with_shared_store(Arc::new(store))
    }

    /// Set an already shared order store
    pub fn with_shared_store(mut self, store: Arc<dyn OrderStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Override the bound on each store operation
    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }

    /// Override the largest accepted `/order` body, in bytes
    pub fn with_body_limit(mut self, limit: usize) -> Self {
        self.body_limit = limit;
        self
    }

    /// Build the order pipeline over the configured store
    pub fn build_pipeline(self) -> Result<OrderPipeline> {
        let store = self
            .store
            .ok_or_else(|| anyhow::anyhow!("OrderStore is required. Call .with_store()"))?;

        let gateway = StoreGateway::new(store).with_timeout(self.store_timeout);
        Ok(OrderPipeline::new(gateway))
    }

    /// Build the final router
    ///
    /// Routes:
    /// - `POST /order` (any other method: 405)
    /// - `GET /health`
    ///
    /// Every response carries the CORS headers and `OPTIONS` on any path is
    /// answered with an empty 200.
    pub fn build(self) -> Result<Router> {
        let body_limit = self.body_limit;
        let state = AppState {
            pipeline: Arc::new(self.build_pipeline()?),
        };

        let app = Router::new()
            .route(
                "/order",
                post(create_order)
                    .fallback(method_not_allowed)
                    .layer(DefaultBodyLimit::max(body_limit)),
            )
            .route("/health", get(health_check))
            .fallback(|| async { StatusCode::NOT_FOUND })
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(middleware::from_fn(enable_cors)),
            );

        Ok(app)
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: SocketAddr) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server starting on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryOrderStore;

    #[test]
    fn test_build_requires_store() {
        let err = ServerBuilder::new().build().unwrap_err();
        assert!(err.to_string().contains("OrderStore is required"));
    }

    #[test]
    fn test_build_with_store() {
        assert!(
            ServerBuilder::new()
                .with_store(InMemoryOrderStore::new())
                .build()
                .is_ok()
        );
    }

    #[test]
    fn test_pipeline_uses_configured_timeout() {
        let pipeline = ServerBuilder::new()
            .with_store(InMemoryOrderStore::new())
            .with_store_timeout(Duration::from_millis(250))
            .build_pipeline()
            .unwrap();

        assert_eq!(pipeline.gateway().timeout(), Duration::from_millis(250));
    }

    #[test]
    fn test_default_body_limit() {
        let builder = ServerBuilder::new();
        assert_eq!(builder.body_limit, MAX_ORDER_BODY_BYTES);

        let builder = builder.with_body_limit(1024);
        assert_eq!(builder.body_limit, 1024);
    }

    #[test]
    fn test_default_timeout() {
        let pipeline = ServerBuilder::default()
            .with_store(InMemoryOrderStore::new())
            .build_pipeline()
            .unwrap();

        assert_eq!(pipeline.gateway().timeout(), DEFAULT_STORE_TIMEOUT);
    }
}
