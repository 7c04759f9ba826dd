//! Instagram placeholder.
//!
//! Registered so the route exists, but every payload is answered with the
//! same not-implemented error. The input is never inspected.
use serde_json::Value;

use crate::error::{NormalizationError, NormalizeError};
use crate::platform::PlatformNormalizer;
use crate::types::{NormalizedMessage, Platform};

/// [`PlatformNormalizer`] placeholder for Instagram.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstagramNormalizer;

impl PlatformNormalizer for InstagramNormalizer {
    fn platform(&self) -> Platform {
        Platform::Instagram
    }

    fn normalize(&self, raw: &Value) -> Result<NormalizedMessage, NormalizeError> {
        normalize_instagram(raw)
    }
}

/// Always returns the not-implemented [`NormalizationError`].
pub fn normalize_instagram(_raw: &Value) -> Result<NormalizedMessage, NormalizeError> {
    Err(NormalizationError::instagram_not_implemented().into())
}
