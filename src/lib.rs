//! # Order Intake
//!
//! HTTP intake for print/production order forms.
//!
//! A submission runs through a strictly linear pipeline:
//!
//! 1. **Decode** the JSON body into an [`OrderForm`](core::OrderForm)
//! 2. **Validate** required fields and the order-type rules, composing the
//!    delivery date and time into one instant
//! 3. **Persist** through the [`StoreGateway`](core::StoreGateway): one insert,
//!    bounded by a timeout, returning the store-generated id
//!
//! The store is injected as an [`OrderStore`](core::OrderStore), so the whole
//! pipeline runs against [`InMemoryOrderStore`](storage::InMemoryOrderStore)
//! in tests and against MongoDB in production.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use order_intake::prelude::*;
//!
//! let app = ServerBuilder::new()
//!     .with_store(InMemoryOrderStore::new())
//!     .build()?;
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        Order, OrderError, OrderForm, OrderId, OrderPipeline, OrderReceipt, OrderStore,
        PersistenceError, StoreGateway, ValidatedOrder, ValidationError, validate_order,
    };

    // === Storage ===
    pub use crate::storage::InMemoryOrderStore;
    #[cfg(feature = "mongodb_backend")]
    pub use crate::storage::MongoOrderStore;

    // === Config ===
    pub use crate::config::ServerConfig;

    // === Server ===
    pub use crate::server::ServerBuilder;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
}
