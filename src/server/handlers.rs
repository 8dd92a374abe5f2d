//! HTTP handlers for the order intake service

use crate::core::error::{DecodeError, OrderError};
use crate::core::order::OrderReceipt;
use crate::core::pipeline::OrderPipeline;
use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::sync::Arc;

/// Shared state for the order routes
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<OrderPipeline>,
}

/// POST /order
///
/// The body is read raw so that any malformed payload, whatever its
/// content type, maps to the same `400 Invalid JSON data` response. A body
/// over the route's size limit is treated the same way.
pub async fn create_order(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<OrderReceipt>, OrderError> {
    let body = body.map_err(DecodeError::from).inspect_err(|e| {
        tracing::debug!(error = %e, "order payload rejected");
    })?;
    let receipt = state.pipeline.submit(&body).await?;
    Ok(Json(receipt))
}

/// Any method other than POST on /order
pub async fn method_not_allowed() -> Response {
    (StatusCode::METHOD_NOT_ALLOWED, "Only POST is allowed").into_response()
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Response {
    match state.pipeline.gateway().ping().await {
        Ok(()) => Json(json!({
            "status": "ok",
            "service": "order-intake"
        }))
        .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "order store unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unavailable",
                    "service": "order-intake"
                })),
            )
                .into_response()
        }
    }
}
