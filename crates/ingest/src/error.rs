//! Error types produced by the ingest crate.
//!
//! Normalization fails in two very different ways, and callers must tell them
//! apart:
//!
//! | Error | Category | Client sees |
//! |-------|----------|-------------|
//! | [`NormalizeError::Rejected`] | Structured | `{"error": "..."}` with a success status |
//! | [`NormalizeError::FieldAccess`] | Unstructured | generic server error |
//! | [`NormalizeError::UnsupportedPlatform`] | Routing | not found |
//!
//! A [`NormalizationError`] is a *result*, not a failure of the service: it is
//! serialized verbatim as the response body. Field-access failures come from
//! nested payload fields that are only checked when they are read.
//!
//! # Examples
//!
//! ```rust
//! use ingest::{normalize_facebook, NormalizeError};
//! use serde_json::json;
//!
//! match normalize_facebook(&json!({})) {
//!     Err(NormalizeError::Rejected(err)) => {
//!         assert_eq!(err.error, "Invalid Facebook payload structure.");
//!     }
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned when `entry[0].messaging[0]` cannot be resolved.
pub const INVALID_FACEBOOK_PAYLOAD: &str = "Invalid Facebook payload structure.";

/// Message returned for every Instagram payload.
pub const INSTAGRAM_NOT_IMPLEMENTED: &str =
    "Instagram normalizer not implemented yet. Send IG webhook payload.";

/// Structured normalization failure, serialized as `{"error": "..."}`.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{error}")]
pub struct NormalizationError {
    pub error: String,
}

impl NormalizationError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    pub fn invalid_facebook_structure() -> Self {
        Self::new(INVALID_FACEBOOK_PAYLOAD)
    }

    pub fn instagram_not_implemented() -> Self {
        Self::new(INSTAGRAM_NOT_IMPLEMENTED)
    }
}

/// Errors that can occur while normalizing a raw platform payload.
///
/// The enum is `#[non_exhaustive]`; match with a catch-all arm.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NormalizeError {
    /// The payload was rejected with a structured, client-visible error.
    #[error(transparent)]
    Rejected(#[from] NormalizationError),

    /// A nested field below the guarded top levels was missing or had the
    /// wrong JSON type.
    #[error("payload field `{path}` is missing or not {expected}")]
    FieldAccess {
        path: String,
        expected: &'static str,
    },

    /// No normalizer is registered for the requested platform tag.
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),
}

impl NormalizeError {
    pub(crate) fn field(path: &str, expected: &'static str) -> Self {
        NormalizeError::FieldAccess {
            path: path.to_string(),
            expected,
        }
    }

    /// Returns the structured error if this failure should reach the client as
    /// a normal response body.
    pub fn as_rejection(&self) -> Option<&NormalizationError> {
        match self {
            NormalizeError::Rejected(err) => Some(err),
            _ => None,
        }
    }

    /// Short label used for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            NormalizeError::Rejected(_) => "rejected",
            NormalizeError::FieldAccess { .. } => "field_access",
            NormalizeError::UnsupportedPlatform(_) => "unsupported_platform",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_error_serializes_as_single_field() {
        let value = serde_json::to_value(NormalizationError::invalid_facebook_structure()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"error": "Invalid Facebook payload structure."})
        );
    }

    #[test]
    fn rejection_is_exposed_only_for_structured_errors() {
        let rejected: NormalizeError = NormalizationError::instagram_not_implemented().into();
        assert_eq!(
            rejected.as_rejection().map(|e| e.error.as_str()),
            Some(INSTAGRAM_NOT_IMPLEMENTED)
        );
        assert_eq!(rejected.to_string(), INSTAGRAM_NOT_IMPLEMENTED);

        let field = NormalizeError::field("sender.id", "a string");
        assert!(field.as_rejection().is_none());
        assert_eq!(
            field.to_string(),
            "payload field `sender.id` is missing or not a string"
        );
        assert_eq!(field.kind(), "field_access");
    }
}
