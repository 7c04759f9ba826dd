//! API route handlers
//!
//! - `health`: liveness, server metadata and Prometheus metrics
//! - `normalize`: platform webhook normalization

pub mod health;
pub mod normalize;

use crate::error::ServerError;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// Fixed status body served on `GET /`
pub const SERVICE_STATUS: &str = "Normalizer service running";

/// Root status endpoint
///
/// # Response
///
/// ```json
/// { "status": "Normalizer service running" }
/// ```
pub async fn root() -> impl IntoResponse {
    Json(json!({ "status": SERVICE_STATUS }))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
