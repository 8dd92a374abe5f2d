//! Typed error handling for the order intake pipeline
//!
//! Every failure a request can hit is one of three kinds, each with a fixed
//! HTTP mapping:
//!
//! - [`DecodeError`]: the body is unreadable or not well-formed JSON (`400`)
//! - [`ValidationError`]: well-formed but violates a business rule (`400`, reason in body)
//! - [`PersistenceError`]: the store failed or timed out (`500`, detail only logged)
//!
//! [`StartupError`] covers the fatal conditions that stop the process before
//! it serves traffic.

use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::time::Duration;
use thiserror::Error;

/// Body sent for any structurally malformed payload
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON data";

/// Body sent for any persistence failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// The request body could not be parsed into an order form
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed order payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The body could not be buffered (over the size limit, aborted stream)
    #[error("unreadable order payload: {0}")]
    Body(#[from] BytesRejection),
}

/// A business rule rejected the order.
///
/// The `Display` output of each variant is the exact reason returned to the
/// client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required fields")]
    MissingRequiredFields,

    #[error("brandName is required for Existing Brand orders")]
    BrandNameRequired,

    #[error("quantity must be a valid number")]
    InvalidQuantity,

    #[error("quantity must be at least 1000 for Existing Brand orders")]
    QuantityBelowMinimum,

    #[error("invalid email format")]
    InvalidEmail,

    #[error("invalid delivery date or time format")]
    InvalidDeliveryDateTime,
}

/// The store could not persist the order
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The insert did not complete within the gateway timeout
    #[error("store operation timed out after {after:?}")]
    Timeout { after: Duration },

    /// The store reported a failure (connectivity, write error, ...)
    #[error("store operation failed: {0}")]
    Store(String),
}

/// Any failure of a single order submission
#[derive(Debug, Error)]
pub enum OrderError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl OrderError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            OrderError::Decode(_) => StatusCode::BAD_REQUEST,
            OrderError::Validation(_) => StatusCode::BAD_REQUEST,
            OrderError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the plain-text body exposed to the client
    ///
    /// Persistence details are never exposed.
    pub fn public_message(&self) -> String {
        match self {
            OrderError::Decode(_) => INVALID_JSON_MESSAGE.to_string(),
            OrderError::Validation(e) => e.to_string(),
            OrderError::Persistence(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        (self.status_code(), self.public_message()).into_response()
    }
}

/// Fatal errors raised while bootstrapping the service
#[derive(Debug, Error)]
pub enum StartupError {
    /// A required environment variable is unset or empty
    #[error("{0} not set in environment")]
    MissingVar(&'static str),

    /// An environment variable holds a value that cannot be used
    #[error("invalid value '{value}' for {name}: {message}")]
    InvalidVar {
        name: &'static str,
        value: String,
        message: String,
    },

    /// The store could not be reached at boot
    #[error("error connecting to order store: {0}")]
    StoreUnavailable(String),
}
