//! Store capability consumed by the order pipeline

use crate::core::order::{Order, OrderId};
use anyhow::Result;
use async_trait::async_trait;

/// Document store the pipeline persists accepted orders into
///
/// Implementations own their connection handling. The pipeline only ever
/// inserts: there is no read-back, update or delete path.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Check that the store is reachable
    async fn ping(&self) -> Result<()>;

    /// Insert an order and return the identifier the store generated for it
    async fn insert(&self, order: &Order) -> Result<OrderId>;
}
