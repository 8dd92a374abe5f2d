//! Order intake pipeline: decode → validate → persist
//!
//! Each submission is independent. A request ends in exactly one of:
//!
//! ```text
//! Received → Decoded → Validated → Persisted
//! Received → Decoded → Rejected
//! Received → Decoded → Validated → PersistFailed
//! ```
//!
//! A malformed body stops before `Decoded`. Nothing is written unless every
//! rule passed, and at most one insert is issued.

use crate::core::error::OrderError;
use crate::core::gateway::StoreGateway;
use crate::core::order::{OrderForm, OrderReceipt};
use crate::core::validation::validate_order;

/// Runs one order submission end to end
#[derive(Clone)]
pub struct OrderPipeline {
    gateway: StoreGateway,
}

impl OrderPipeline {
    pub fn new(gateway: StoreGateway) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &StoreGateway {
        &self.gateway
    }

    /// Submit a raw request body
    pub async fn submit(&self, body: &[u8]) -> Result<OrderReceipt, OrderError> {
        let form = OrderForm::decode(body).inspect_err(|e| {
            tracing::debug!(error = %e, "order payload rejected");
        })?;

        let validated = validate_order(form).inspect_err(|reason| {
            tracing::debug!(%reason, "order rejected");
        })?;

        let order_id = self.gateway.persist(validated).await.inspect_err(|e| {
            tracing::error!(error = %e, "error inserting order");
        })?;

        tracing::info!(order_id = %order_id, "order received");
        Ok(OrderReceipt::received(order_id))
    }
}
