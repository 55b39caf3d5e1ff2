//! Shared application state

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use scamcheck_rules::DecisionPipeline;
use scamcheck_telemetry::MetricsCollector;

use crate::config::ServerConfig;

/// Shared application state
///
/// Everything here is initialized once at startup and read-only afterwards;
/// handlers never mutate it.
#[derive(Clone)]
pub struct AppState {
    /// The decision pipeline around the loaded model
    pub pipeline: Arc<DecisionPipeline>,

    /// Verdict and latency counters
    pub metrics: MetricsCollector,

    /// Prometheus exposition handle (absent in tests)
    pub prometheus: Option<PrometheusHandle>,

    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(pipeline: Arc<DecisionPipeline>, config: ServerConfig) -> Self {
        Self {
            pipeline,
            metrics: MetricsCollector::new(),
            prometheus: None,
            config: Arc::new(config),
        }
    }

    /// Attach a Prometheus handle for the /metrics endpoint
    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }
}
