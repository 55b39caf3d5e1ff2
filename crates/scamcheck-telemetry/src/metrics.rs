//! Metrics collection and reporting

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use scamcheck_core::Label;
use serde::Serialize;

/// Metrics collector for Scamcheck performance monitoring
#[derive(Clone)]
pub struct MetricsCollector {
    inner: Arc<MetricsInner>,
}

struct MetricsInner {
    total_requests: AtomicU64,
    safe_verdicts: AtomicU64,
    scam_verdicts: AtomicU64,
    model_failures: AtomicU64,
    total_latency_us: AtomicU64,
}

impl MetricsCollector {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MetricsInner {
                total_requests: AtomicU64::new(0),
                safe_verdicts: AtomicU64::new(0),
                scam_verdicts: AtomicU64::new(0),
                model_failures: AtomicU64::new(0),
                total_latency_us: AtomicU64::new(0),
            }),
        }
    }

    /// Record a request
    pub fn record_request(&self) {
        self.inner.total_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a verdict by label
    pub fn record_verdict(&self, label: Label) {
        match label {
            Label::Safe => self.inner.safe_verdicts.fetch_add(1, Ordering::Relaxed),
            Label::Scam => self.inner.scam_verdicts.fetch_add(1, Ordering::Relaxed),
        };
    }

    /// Record a model failure
    pub fn record_model_failure(&self) {
        self.inner.model_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Record request latency
    pub fn record_latency(&self, latency_us: u64) {
        self.inner
            .total_latency_us
            .fetch_add(latency_us, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            total_requests: self.inner.total_requests.load(Ordering::Relaxed),
            safe_verdicts: self.inner.safe_verdicts.load(Ordering::Relaxed),
            scam_verdicts: self.inner.scam_verdicts.load(Ordering::Relaxed),
            model_failures: self.inner.model_failures.load(Ordering::Relaxed),
            total_latency_us: self.inner.total_latency_us.load(Ordering::Relaxed),
        }
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of current metrics
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub total_requests: u64,
    pub safe_verdicts: u64,
    pub scam_verdicts: u64,
    pub model_failures: u64,
    pub total_latency_us: u64,
}

impl MetricsSnapshot {
    /// Calculate average latency per request
    pub fn avg_latency_us(&self) -> u64 {
        if self.total_requests == 0 {
            0
        } else {
            self.total_latency_us / self.total_requests
        }
    }

    /// Calculate the share of verdicts flagged as SCAM
    pub fn scam_rate(&self) -> f64 {
        let verdicts = self.safe_verdicts + self.scam_verdicts;
        if verdicts == 0 {
            0.0
        } else {
            self.scam_verdicts as f64 / verdicts as f64
        }
    }
}
