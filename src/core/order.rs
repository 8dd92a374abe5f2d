//! Order form payload, accepted order record and intake receipt
//!
//! An order moves through three shapes:
//!
//! - [`OrderForm`]: what the client posted, decoded structurally only
//! - [`ValidatedOrder`](crate::core::validation::ValidatedOrder): a form that passed every rule,
//!   carrying the combined delivery instant
//! - [`Order`]: the record handed to the store, stamped with `createdAt`

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::core::error::DecodeError;

/// Status string returned for every accepted order
pub const ORDER_RECEIVED: &str = "Order received";

/// The order form as submitted by the client.
///
/// Decoding is purely structural: a missing key or an explicit `null` yields
/// the field's zero value, and unknown keys (including any client-sent `id`
/// or `createdAt`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderForm {
    #[serde(deserialize_with = "null_as_default")]
    pub product_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_option: String,
    #[serde(deserialize_with = "null_as_default")]
    pub order_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub brand_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub quantity: String,
    #[serde(deserialize_with = "null_as_default")]
    pub size: String,
    #[serde(deserialize_with = "null_as_default")]
    pub delivery_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub delivery_time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub special_instructions: String,
    #[serde(deserialize_with = "null_as_default")]
    pub terms_accepted: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub company_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
}

impl OrderForm {
    /// Decode a raw request body into a form.
    ///
    /// Fails only when the body is not a well-formed JSON object whose
    /// known keys carry the right basic types. A repeated key keeps its
    /// last value.
    pub fn decode(body: &[u8]) -> Result<Self, DecodeError> {
        let value: serde_json::Value = serde_json::from_slice(body)?;
        Ok(serde_json::from_value(value)?)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// An accepted order, ready to be persisted exactly once.
///
/// `created_at` and `delivery_date_time` are server-computed; nothing
/// mutates an `Order` after it has been handed to a store.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub product_type: String,
    pub sub_option: String,
    pub order_type: String,
    pub brand_name: String,
    pub quantity: String,
    pub size: String,
    pub delivery_date: String,
    pub delivery_time: String,
    pub special_instructions: String,
    pub terms_accepted: bool,
    pub company_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
    /// Naive instant composed from `delivery_date` and `delivery_time`
    pub delivery_date_time: NaiveDateTime,
}

impl Order {
    pub(crate) fn from_form(
        form: OrderForm,
        delivery_date_time: NaiveDateTime,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            product_type: form.product_type,
            sub_option: form.sub_option,
            order_type: form.order_type,
            brand_name: form.brand_name,
            quantity: form.quantity,
            size: form.size,
            delivery_date: form.delivery_date,
            delivery_time: form.delivery_time,
            special_instructions: form.special_instructions,
            terms_accepted: form.terms_accepted,
            company_name: form.company_name,
            email: form.email,
            phone_number: form.phone_number,
            address: form.address,
            created_at,
            delivery_date_time,
        }
    }
}

/// Identifier generated by the store on insert
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Response body for an accepted order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    #[serde(rename = "orderID")]
    pub order_id: OrderId,
    pub status: String,
}

impl OrderReceipt {
    pub fn received(order_id: OrderId) -> Self {
        Self {
            order_id,
            status: ORDER_RECEIVED.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_missing_fields_yield_zero_values() {
        let form = OrderForm::decode(br#"{"productType": "Flyer"}"#).unwrap();

        assert_eq!(form.product_type, "Flyer");
        assert_eq!(form.quantity, "");
        assert!(!form.terms_accepted);
    }

    #[test]
    fn test_decode_null_is_zero_value() {
        let form = OrderForm::decode(br#"{"brandName": null, "termsAccepted": null}"#).unwrap();

        assert_eq!(form.brand_name, "");
        assert!(!form.terms_accepted);
    }

    #[test]
    fn test_decode_ignores_server_fields() {
        let body = br#"{"id": "abc", "createdAt": "2020-01-01T00:00:00Z", "email": "a@b.com"}"#;
        let form = OrderForm::decode(body).unwrap();

        assert_eq!(form.email, "a@b.com");
    }

    #[test]
    fn test_decode_repeated_key_keeps_last_value() {
        let body = br#"{"email": "x", "productType": "Flyer", "email": "a@b.com"}"#;
        let form = OrderForm::decode(body).unwrap();

        assert_eq!(form.email, "a@b.com");
        assert_eq!(form.product_type, "Flyer");
    }

    #[test]
    fn test_decode_rejects_malformed_body() {
        assert!(OrderForm::decode(b"{not json").is_err());
        assert!(OrderForm::decode(b"").is_err());
        assert!(OrderForm::decode(br#"["Flyer", 2]"#).is_err());
    }

    #[test]
    fn test_decode_rejects_wrong_basic_type() {
        assert!(OrderForm::decode(br#"{"quantity": 50}"#).is_err());
        assert!(OrderForm::decode(br#"{"termsAccepted": "yes"}"#).is_err());
    }

    #[test]
    fn test_receipt_serializes_order_id_key() {
        let receipt = OrderReceipt::received(OrderId::new("65f0c0ffee"));
        let json = serde_json::to_value(&receipt).unwrap();

        assert_eq!(json["orderID"], "65f0c0ffee");
        assert_eq!(json["status"], "Order received");
    }
}
