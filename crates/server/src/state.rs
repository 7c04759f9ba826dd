use crate::config::ServerConfig;
use ingest::PlatformRegistry;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state, built once at startup
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Platform tag -> normalizer lookup (read-only after startup)
    pub registry: Arc<PlatformRegistry>,

    /// Prometheus render handle, present when metrics are enabled
    pub metrics: Option<PrometheusHandle>,
}

impl ServerState {
    /// Create new server state with every built-in platform registered
    pub fn new(config: ServerConfig) -> Self {
        Self::with_registry(config, PlatformRegistry::with_defaults())
    }

    /// Create server state around a caller-built registry
    pub fn with_registry(config: ServerConfig, registry: PlatformRegistry) -> Self {
        Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
            metrics: None,
        }
    }

    /// Attach the Prometheus handle served on `/metrics`
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

/// Server metadata for health checks
#[derive(Debug, serde::Serialize)]
pub struct ServerMetadata {
    pub version: String,
    pub uptime_seconds: u64,
    pub platforms: Vec<String>,
}
