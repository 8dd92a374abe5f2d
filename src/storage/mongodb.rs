//! MongoDB storage backend using the official MongoDB async driver.
//!
//! Provides `MongoOrderStore`, an [`OrderStore`] backed by a single
//! collection (`orderdb.orders` by default).
//!
//! # Feature flag
//!
//! This module is gated behind the `mongodb_backend` feature flag, enabled
//! by default.
//!
//! # Storage model
//!
//! Each accepted order becomes one document. Keys are the camelCase form
//! fields; `brandName` and `specialInstructions` are omitted when empty.
//! `createdAt` and `deliveryDateTime` are stored as BSON datetimes, the
//! latter reading the naive delivery instant as UTC. `_id` is left to the
//! driver, which generates an `ObjectId`.

use crate::config::ServerConfig;
use crate::core::order::{Order, OrderId};
use crate::core::store::OrderStore;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use mongodb::bson::{Bson, DateTime, Document, doc};
use mongodb::{Client, Collection, Database};

/// Convert an order into the document shape stored in MongoDB.
fn order_to_document(order: &Order) -> Document {
    let mut doc = doc! {
        "productType": order.product_type.as_str(),
        "subOption": order.sub_option.as_str(),
        "orderType": order.order_type.as_str(),
        "quantity": order.quantity.as_str(),
        "size": order.size.as_str(),
        "deliveryDate": order.delivery_date.as_str(),
        "deliveryTime": order.delivery_time.as_str(),
        "termsAccepted": order.terms_accepted,
        "companyName": order.company_name.as_str(),
        "email": order.email.as_str(),
        "phoneNumber": order.phone_number.as_str(),
        "address": order.address.as_str(),
        "createdAt": DateTime::from_millis(order.created_at.timestamp_millis()),
        "deliveryDateTime": DateTime::from_millis(
            order.delivery_date_time.and_utc().timestamp_millis()
        ),
    };

    if !order.brand_name.is_empty() {
        doc.insert("brandName", order.brand_name.as_str());
    }
    if !order.special_instructions.is_empty() {
        doc.insert("specialInstructions", order.special_instructions.as_str());
    }

    doc
}

/// Render the driver-reported `_id` as an order identifier.
fn inserted_id_to_order_id(id: Bson) -> OrderId {
    match id {
        Bson::ObjectId(oid) => OrderId::new(oid.to_hex()),
        Bson::String(s) => OrderId::new(s),
        other => OrderId::new(other.to_string()),
    }
}

/// Order store backed by a MongoDB collection.
///
/// The client handle is cheap to clone and pools connections internally;
/// one store is built at startup and shared by every request.
///
/// # Example
///
/// ```rust,ignore
/// use order_intake::storage::MongoOrderStore;
///
/// let store = MongoOrderStore::connect("mongodb://localhost:27017", "orderdb", "orders").await?;
/// store.ping().await?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoOrderStore {
    database: Database,
    collection: Collection<Document>,
}

impl MongoOrderStore {
    /// Create a store over an existing database handle.
    pub fn new(database: Database, collection: &str) -> Self {
        let collection = database.collection(collection);
        Self {
            database,
            collection,
        }
    }

    /// Connect to MongoDB and select the order collection.
    ///
    /// Connecting does not contact the server; call [`OrderStore::ping`]
    /// to verify reachability.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| anyhow!("Failed to connect to MongoDB: {}", e))?;

        Ok(Self::new(client.database(database), collection))
    }

    /// Connect using the service configuration.
    pub async fn from_config(config: &ServerConfig) -> Result<Self> {
        Self::connect(&config.mongodb_uri, &config.database, &config.collection).await
    }

    /// Get a reference to the underlying collection.
    pub fn collection(&self) -> &Collection<Document> {
        &self.collection
    }
}

#[async_trait]
impl OrderStore for MongoOrderStore {
    async fn ping(&self) -> Result<()> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| anyhow!("Failed to ping MongoDB: {}", e))?;

        Ok(())
    }

    async fn insert(&self, order: &Order) -> Result<OrderId> {
        let result = self
            .collection
            .insert_one(order_to_document(order))
            .await
            .map_err(|e| anyhow!("Failed to insert order: {}", e))?;

        Ok(inserted_id_to_order_id(result.inserted_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use mongodb::bson::oid::ObjectId;

    fn sample_order() -> Order {
        Order {
            product_type: "Flyer".to_string(),
            sub_option: "A4".to_string(),
            order_type: "Existing Brand".to_string(),
            brand_name: "Acme Cola".to_string(),
            quantity: "1500".to_string(),
            size: "A4".to_string(),
            delivery_date: "2025-03-10".to_string(),
            delivery_time: "14:30".to_string(),
            special_instructions: String::new(),
            terms_accepted: true,
            company_name: "Acme".to_string(),
            email: "a@b.com".to_string(),
            phone_number: "555".to_string(),
            address: "1 Main St".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap(),
            delivery_date_time: NaiveDate::from_ymd_opt(2025, 3, 10)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_document_shape() {
        let doc = order_to_document(&sample_order());

        assert_eq!(doc.get_str("productType").unwrap(), "Flyer");
        assert_eq!(doc.get_str("brandName").unwrap(), "Acme Cola");
        assert_eq!(doc.get_str("quantity").unwrap(), "1500");
        assert!(doc.get_bool("termsAccepted").unwrap());
        assert!(!doc.contains_key("specialInstructions"));
        assert!(!doc.contains_key("_id"));
    }

    #[test]
    fn test_document_datetimes() {
        let doc = order_to_document(&sample_order());

        let created = doc.get_datetime("createdAt").unwrap();
        assert_eq!(
            created.timestamp_millis(),
            Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0)
                .unwrap()
                .timestamp_millis()
        );

        let delivery = doc.get_datetime("deliveryDateTime").unwrap();
        assert_eq!(
            delivery.timestamp_millis(),
            Utc.with_ymd_and_hms(2025, 3, 10, 14, 30, 0)
                .unwrap()
                .timestamp_millis()
        );
    }

    #[test]
    fn test_inserted_object_id_is_hex() {
        let oid = ObjectId::new();
        let id = inserted_id_to_order_id(Bson::ObjectId(oid));

        assert_eq!(id.as_str(), oid.to_hex());
        assert_eq!(id.as_str().len(), 24);
    }
}
