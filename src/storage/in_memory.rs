//! In-memory implementation of OrderStore for testing and development

use crate::core::order::{Order, OrderId};
use crate::core::store::OrderStore;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

/// In-memory order store
///
/// Generates a UUID v4 identifier per insert. Clones share the same
/// underlying map, so a test can keep a handle and inspect what was stored.
///
/// A poisoned lock is recovered on every access: each insert is a single
/// map write, so the map is never left half-updated.
#[derive(Clone, Default)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<HashMap<OrderId, Order>>>,
}

impl InMemoryOrderStore {
    /// Create a new, empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a stored order by its identifier
    pub fn get(&self, id: &OrderId) -> Option<Order> {
        self.read().get(id).cloned()
    }

    /// Number of stored orders
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<OrderId, Order>> {
        self.orders.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<OrderId, Order>> {
        self.orders.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn insert(&self, order: &Order) -> Result<OrderId> {
        let id = OrderId::new(Uuid::new_v4().to_string());
        self.write().insert(id.clone(), order.clone());

        Ok(id)
    }
}
