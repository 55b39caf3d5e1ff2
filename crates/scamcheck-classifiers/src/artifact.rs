//! Model artifact schema and loading
//!
//! A scam model artifact bundles the fitted TF-IDF vectorizer (vocabulary
//! and IDF table) with the logistic-regression parameters trained against
//! it. The three parallel tables must agree on dimensions; a mismatched
//! artifact is rejected at load time so the service never starts on a
//! corrupt model.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use scamcheck_core::{Error, Result};

/// On-disk schema for a trained scam model artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScamModelArtifact {
    /// Model metadata
    #[serde(default)]
    pub metadata: ArtifactMetadata,

    /// Token to feature-index mapping from the fitted vectorizer
    pub vocabulary: HashMap<String, usize>,

    /// Inverse document frequency per feature index
    pub idf: Vec<f64>,

    /// Logistic-regression coefficient per feature index
    pub weights: Vec<f64>,

    /// Logistic-regression intercept
    pub intercept: f64,
}

/// Metadata about a model artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    /// Model name/identifier
    pub name: String,

    /// Model version
    pub version: String,
}

impl Default for ArtifactMetadata {
    fn default() -> Self {
        Self {
            name: "scam-linear".to_string(),
            version: "1.0".to_string(),
        }
    }
}

impl ScamModelArtifact {
    /// Load and validate an artifact from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::model(format!("failed to read model artifact {}: {e}", path.display()))
        })?;

        let artifact: Self = serde_json::from_str(&raw).map_err(|e| {
            Error::model(format!(
                "failed to parse model artifact {}: {e}",
                path.display()
            ))
        })?;

        artifact.validate()?;
        Ok(artifact)
    }

    /// Check the artifact's internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.vocabulary.is_empty() {
            return Err(Error::model("model artifact has an empty vocabulary"));
        }

        if self.idf.len() != self.vocabulary.len() || self.weights.len() != self.vocabulary.len() {
            return Err(Error::model(format!(
                "model artifact dimensions disagree: vocabulary={}, idf={}, weights={}",
                self.vocabulary.len(),
                self.idf.len(),
                self.weights.len()
            )));
        }

        if let Some((token, &index)) = self
            .vocabulary
            .iter()
            .find(|(_, &index)| index >= self.idf.len())
        {
            return Err(Error::model(format!(
                "model artifact token {token:?} maps to out-of-range feature index {index}"
            )));
        }

        Ok(())
    }

    /// Number of features in the fitted vectorizer
    pub fn feature_count(&self) -> usize {
        self.vocabulary.len()
    }
}
