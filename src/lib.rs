//! Workspace umbrella crate for the social message normalizer.
//!
//! This crate stitches together PII masking ([`redact`]) and per-platform
//! payload normalization ([`ingest`]) so callers get a single entry point:
//! hand it a platform tag and a raw webhook body, get back a
//! [`NormalizedMessage`] or a typed error.

pub use ingest::{
    normalize_facebook, normalize_instagram, ChannelType, FacebookNormalizer, InstagramNormalizer,
    NormalizationError, NormalizeError, NormalizedMessage, Platform, PlatformNormalizer,
    PlatformRegistry, DEFAULT_LANGUAGE, INSTAGRAM_NOT_IMPLEMENTED, INVALID_FACEBOOK_PAYLOAD,
};
pub use redact::{detect_pii, hash_id, mask_pii, PiiKind, HASH_ID_LEN};

use serde_json::Value;
use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};

/// How a normalization call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// A [`NormalizedMessage`] was produced.
    Normalized,
    /// A structured [`NormalizationError`] was returned.
    Rejected,
    /// A nested payload field could not be read.
    Failed,
    /// No normalizer exists for the requested platform.
    Unsupported,
}

impl Outcome {
    pub fn of(result: &Result<NormalizedMessage, NormalizeError>) -> Self {
        match result {
            Ok(_) => Outcome::Normalized,
            Err(NormalizeError::Rejected(_)) => Outcome::Rejected,
            Err(NormalizeError::UnsupportedPlatform(_)) => Outcome::Unsupported,
            Err(_) => Outcome::Failed,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Outcome::Normalized => "normalized",
            Outcome::Rejected => "rejected",
            Outcome::Failed => "failed",
            Outcome::Unsupported => "unsupported",
        }
    }
}

/// Metrics observer for normalization calls.
///
/// `platform` is the registered platform tag, or `"unknown"` when the tag did
/// not resolve to a platform.
pub trait NormalizeMetrics: Send + Sync {
    fn record_normalize(&self, platform: &str, latency: Duration, outcome: Outcome);
}

/// Install or clear the global normalization metrics recorder.
pub fn set_normalize_metrics(recorder: Option<Arc<dyn NormalizeMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn NormalizeMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn NormalizeMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn NormalizeMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

struct MetricsSpan {
    recorder: Arc<dyn NormalizeMetrics>,
    start: Instant,
}

impl MetricsSpan {
    fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    fn record(self, platform: &str, outcome: Outcome) {
        self.recorder
            .record_normalize(platform, self.start.elapsed(), outcome);
    }
}

/// Registry with every built-in platform, built on first use.
pub fn default_registry() -> &'static PlatformRegistry {
    static REGISTRY: OnceLock<PlatformRegistry> = OnceLock::new();
    REGISTRY.get_or_init(PlatformRegistry::with_defaults)
}

/// Normalize `raw` for the platform named by `tag` using an explicit registry.
pub fn normalize_with(
    registry: &PlatformRegistry,
    tag: &str,
    raw: &Value,
) -> Result<NormalizedMessage, NormalizeError> {
    let span = MetricsSpan::start();
    let result = registry.normalize_tag(tag, raw);
    let outcome = Outcome::of(&result);

    match &result {
        Ok(_) | Err(NormalizeError::Rejected(_)) => {
            tracing::debug!(platform = tag, outcome = outcome.as_str(), "normalize")
        }
        Err(err) => tracing::warn!(platform = tag, error = %err, "normalize_failure"),
    }

    if let Some(span) = span {
        let label = tag
            .parse::<Platform>()
            .map(Platform::as_str)
            .unwrap_or("unknown");
        span.record(label, outcome);
    }
    result
}

/// Normalize `raw` for the platform named by `tag` using [`default_registry`].
///
/// ```rust
/// use serde_json::json;
///
/// let err = normalizer::normalize("facebook", &json!({})).unwrap_err();
/// assert_eq!(
///     err.as_rejection().unwrap().error,
///     "Invalid Facebook payload structure."
/// );
/// ```
pub fn normalize(tag: &str, raw: &Value) -> Result<NormalizedMessage, NormalizeError> {
    normalize_with(default_registry(), tag, raw)
}
