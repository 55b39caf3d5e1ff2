//! Scamcheck Telemetry
//!
//! Performance metrics and verdict accounting for the Scamcheck service.

pub mod metrics;

pub use metrics::{MetricsCollector, MetricsSnapshot};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::metrics::{MetricsCollector, MetricsSnapshot};
}
