use crate::error::ServerResult;
use crate::state::ServerState;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use ingest::NormalizeError;
use serde_json::Value;
use std::sync::Arc;

/// Normalize a raw platform webhook payload.
///
/// The platform is taken from the path and resolved through the registry, so
/// `POST /normalize/facebook` and `POST /normalize/instagram` share this
/// handler. The body is parsed as JSON regardless of `Content-Type`.
///
/// # Responses
///
/// - `200` with a normalized message
/// - `200` with `{"error": "..."}` when the normalizer rejects the payload;
///   callers must check for the `error` key
/// - `400` when the body is not valid JSON
/// - `404` when no normalizer is registered for the platform
/// - `500` when a nested payload field cannot be read
///
/// # Example
///
/// ```json
/// // POST /normalize/facebook
/// {"entry": [{"id": "c1", "messaging": [{
///   "sender": {"id": "U1"}, "recipient": {"id": "P1"},
///   "message": {"mid": "m1", "text": "order #12345 shipped"},
///   "timestamp": 100
/// }]}]}
///
/// // Response
/// {
///   "message_id": "m1",
///   "platform": "facebook",
///   "channel_type": "dm",
///   "conversation_id": "c1",
///   "user_id_hashed": "<16 hex chars>",
///   "original_text": "order #12345 shipped",
///   "clean_text": "<ORDER_ID> shipped",
///   "language": "en",
///   "timestamp_utc": 100,
///   "metadata": {"recipient_id": "P1", "sender_id": "U1"}
/// }
/// ```
pub async fn normalize_platform(
    State(state): State<Arc<ServerState>>,
    Path(platform): Path<String>,
    body: Bytes,
) -> ServerResult<Response> {
    let raw: Value = serde_json::from_slice(&body)?;

    match normalizer::normalize_with(&state.registry, &platform, &raw) {
        Ok(message) => Ok(Json(message).into_response()),
        Err(NormalizeError::Rejected(rejection)) => Ok(Json(rejection).into_response()),
        Err(err) => Err(err.into()),
    }
}
