//! Classifier trait and common types

use async_trait::async_trait;
use scamcheck_core::Result;

/// Trait for all scam-probability classifiers
#[async_trait]
pub trait TextClassifier: Send + Sync {
    /// Score the given normalized text, returning the probability that it
    /// is a scam
    async fn scam_probability(&self, text: &str) -> Result<ScamScore>;

    /// Get the classifier name
    fn name(&self) -> &str;
}

/// Result of a single scoring call
#[derive(Debug, Clone)]
pub struct ScamScore {
    /// Scam probability (0.0-1.0)
    pub probability: f32,

    /// Model name or version that produced the score
    pub model: Option<String>,

    /// Latency in microseconds
    pub latency_us: u64,
}

impl ScamScore {
    /// Create a new score with no metadata
    pub fn new(probability: f32) -> Self {
        Self {
            probability,
            model: None,
            latency_us: 0,
        }
    }

    /// Check if the probability meets a decision threshold
    pub fn exceeds_threshold(&self, threshold: f32) -> bool {
        self.probability >= threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exceeds_threshold() {
        assert!(ScamScore::new(0.8).exceeds_threshold(0.5));
        assert!(ScamScore::new(0.5).exceeds_threshold(0.5));
        assert!(!ScamScore::new(0.49).exceeds_threshold(0.5));
    }
}
