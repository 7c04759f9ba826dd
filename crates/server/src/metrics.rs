//! Prometheus-backed normalization metrics
//!
//! Exposed series:
//!
//! - `normalizer_requests_total{platform, outcome}` counter
//! - `normalizer_latency_seconds{platform}` histogram

use crate::error::{ServerError, ServerResult};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use normalizer::{NormalizeMetrics, Outcome};
use std::sync::Arc;
use std::time::Duration;

/// [`NormalizeMetrics`] observer that forwards to the global `metrics` recorder
#[derive(Debug, Default)]
pub struct PrometheusMetrics;

impl NormalizeMetrics for PrometheusMetrics {
    fn record_normalize(&self, platform: &str, latency: Duration, outcome: Outcome) {
        ::metrics::counter!(
            "normalizer_requests_total",
            "platform" => platform.to_string(),
            "outcome" => outcome.as_str()
        )
        .increment(1);
        ::metrics::histogram!("normalizer_latency_seconds", "platform" => platform.to_string())
            .record(latency.as_secs_f64());
    }
}

/// Install the process-wide Prometheus recorder and hook it into normalization
pub fn install_prometheus() -> ServerResult<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|err| ServerError::Internal(format!("metrics recorder: {err}")))?;
    normalizer::set_normalize_metrics(Some(Arc::new(PrometheusMetrics)));
    Ok(handle)
}
