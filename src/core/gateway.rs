//! Store gateway: single, time-bounded insert of a validated order

use crate::core::error::PersistenceError;
use crate::core::order::{Order, OrderId};
use crate::core::store::OrderStore;
use crate::core::validation::ValidatedOrder;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;

/// Upper bound on a single store operation
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Wraps an [`OrderStore`] with the stamping and timeout rules.
///
/// One attempt per call; retrying is left to the HTTP client.
#[derive(Clone)]
pub struct StoreGateway {
    store: Arc<dyn OrderStore>,
    timeout: Duration,
}

impl StoreGateway {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self {
            store,
            timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Stamp `createdAt`, attach the delivery instant and insert.
    ///
    /// On timeout the insert future is dropped and the order is reported
    /// as not persisted.
    pub async fn persist(&self, validated: ValidatedOrder) -> Result<OrderId, PersistenceError> {
        let (form, delivery_date_time) = validated.into_parts();
        let order = Order::from_form(form, delivery_date_time, Utc::now());

        match tokio::time::timeout(self.timeout, self.store.insert(&order)).await {
            Ok(Ok(id)) => Ok(id),
            Ok(Err(e)) => Err(PersistenceError::Store(format!("{:#}", e))),
            Err(_) => Err(PersistenceError::Timeout {
                after: self.timeout,
            }),
        }
    }

    /// Ping the store, bounded by the same timeout as inserts
    pub async fn ping(&self) -> Result<(), PersistenceError> {
        match tokio::time::timeout(self.timeout, self.store.ping()).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(PersistenceError::Store(format!("{:#}", e))),
            Err(_) => Err(PersistenceError::Timeout {
                after: self.timeout,
            }),
        }
    }
}
