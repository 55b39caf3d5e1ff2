//! TF-IDF + logistic-regression classifier
//!
//! Evaluates the pre-trained linear model from a [`ScamModelArtifact`]:
//! whitespace tokens are mapped through the artifact vocabulary,
//! length-normalized term frequencies are weighted by IDF, and the
//! resulting feature vector is pushed through the logistic function.
//! Scoring is a pure function of the text and the loaded artifact.

use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;

use scamcheck_core::Result;

use crate::artifact::ScamModelArtifact;
use crate::classifier::{ScamScore, TextClassifier};

pub struct LinearScamClassifier {
    name: String,
    artifact: ScamModelArtifact,
}

impl LinearScamClassifier {
    /// Create a classifier from a validated artifact
    pub fn new(artifact: ScamModelArtifact) -> Result<Self> {
        artifact.validate()?;
        Ok(Self {
            name: "scam-linear".to_string(),
            artifact,
        })
    }

    /// Load a classifier from a JSON artifact on disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let artifact = ScamModelArtifact::from_file(path.as_ref())?;
        tracing::info!(
            path = %path.as_ref().display(),
            model = %artifact.metadata.name,
            features = artifact.feature_count(),
            "loaded scam model artifact"
        );
        Self::new(artifact)
    }

    /// Metadata of the loaded artifact
    pub fn artifact(&self) -> &ScamModelArtifact {
        &self.artifact
    }

    fn score_text(&self, text: &str) -> f64 {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.is_empty() {
            return sigmoid(self.artifact.intercept);
        }

        // Sparse term counts over the artifact vocabulary; out-of-vocabulary
        // tokens contribute nothing.
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in &tokens {
            if let Some(&index) = self.artifact.vocabulary.get(*token) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let doc_length = tokens.len() as f64;
        let mut z = self.artifact.intercept;
        for (index, count) in counts {
            let tf = count / doc_length;
            z += tf * self.artifact.idf[index] * self.artifact.weights[index];
        }

        sigmoid(z)
    }
}

#[async_trait::async_trait]
impl TextClassifier for LinearScamClassifier {
    async fn scam_probability(&self, text: &str) -> Result<ScamScore> {
        let start = Instant::now();

        let probability = self.score_text(text).clamp(0.0, 1.0) as f32;

        Ok(ScamScore {
            probability,
            model: Some(self.artifact.metadata.name.clone()),
            latency_us: start.elapsed().as_micros() as u64,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
