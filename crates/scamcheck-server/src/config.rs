//! Server configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use scamcheck_rules::RuleConfig;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Path to the trained model artifact
    #[serde(default = "default_model_path")]
    pub model_path: String,

    /// Allow any origin (the service is consumed by browser frontends)
    #[serde(default = "default_true")]
    pub allow_any_origin: bool,

    /// Explicit origin allowlist used when `allow_any_origin` is off
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Maximum accepted request body size in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// Decision pipeline tuning
    #[serde(default)]
    pub rules: RuleConfig,
}

impl ServerConfig {
    /// Load configuration from file and CLI overrides
    pub fn load(config_path: &str, cli: &crate::Cli) -> anyhow::Result<Self> {
        // Try to load from file, or use defaults
        let mut config: Self = if Path::new(config_path).exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_yaml::from_str(&content)?
        } else {
            Self::default()
        };

        // Apply CLI overrides
        if let Some(model) = &cli.model {
            config.model_path = model.clone();
        }

        config.rules.validate()?;
        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            allow_any_origin: true,
            allowed_origins: Vec::new(),
            max_body_bytes: default_max_body_bytes(),
            rules: RuleConfig::default(),
        }
    }
}

fn default_model_path() -> String {
    "./models/scam-linear.json".to_string()
}

fn default_max_body_bytes() -> usize {
    64 * 1024
}

fn default_true() -> bool {
    true
}
