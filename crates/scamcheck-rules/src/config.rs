//! Decision pipeline configuration

use serde::{Deserialize, Serialize};

use scamcheck_core::{Error, Result};

/// Tunable thresholds and phrase lists for the decision pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Scam probability at or above which the tentative label is SCAM
    #[serde(default = "default_decision_threshold")]
    pub decision_threshold: f32,

    /// SCAM confidence below which short messages are reconsidered
    #[serde(default = "default_low_confidence_threshold")]
    pub low_confidence_threshold: f32,

    /// Word count below which a message counts as short
    #[serde(default = "default_short_message_words")]
    pub short_message_words: usize,

    /// Confidence reported when the greeting rule fires
    #[serde(default = "default_greeting_confidence")]
    pub greeting_confidence: f32,

    /// Confidence reported for empty or whitespace-only input
    #[serde(default = "default_empty_confidence")]
    pub empty_confidence: f32,

    /// Confidence reported when the reconsideration rule downgrades to SAFE
    #[serde(default = "default_reconsidered_confidence")]
    pub reconsidered_confidence: f32,

    /// Exact-match greeting phrases (compared against normalized text)
    #[serde(default = "default_greetings")]
    pub greetings: Vec<String>,

    /// Enable the contains-match benign phrase override
    #[serde(default)]
    pub benign_phrases_enabled: bool,

    /// Benign phrases for the optional contains-match override
    #[serde(default = "default_benign_phrases")]
    pub benign_phrases: Vec<String>,
}

impl RuleConfig {
    /// Load configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("failed to parse rule config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every threshold is usable
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("decision_threshold", self.decision_threshold),
            ("low_confidence_threshold", self.low_confidence_threshold),
            ("greeting_confidence", self.greeting_confidence),
            ("empty_confidence", self.empty_confidence),
            ("reconsidered_confidence", self.reconsidered_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::config(format!(
                    "{name} must be within [0.0, 1.0], got {value}"
                )));
            }
        }

        if self.short_message_words == 0 {
            return Err(Error::config("short_message_words must be at least 1"));
        }

        Ok(())
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            decision_threshold: default_decision_threshold(),
            low_confidence_threshold: default_low_confidence_threshold(),
            short_message_words: default_short_message_words(),
            greeting_confidence: default_greeting_confidence(),
            empty_confidence: default_empty_confidence(),
            reconsidered_confidence: default_reconsidered_confidence(),
            greetings: default_greetings(),
            benign_phrases_enabled: false,
            benign_phrases: default_benign_phrases(),
        }
    }
}

fn default_decision_threshold() -> f32 {
    0.5
}

fn default_low_confidence_threshold() -> f32 {
    0.65
}

fn default_short_message_words() -> usize {
    5
}

fn default_greeting_confidence() -> f32 {
    0.99
}

fn default_empty_confidence() -> f32 {
    1.0
}

fn default_reconsidered_confidence() -> f32 {
    0.60
}

fn default_greetings() -> Vec<String> {
    [
        "hi",
        "hii",
        "helo",
        "hello",
        "hey",
        "hi there",
        "hello there",
        "good morning",
        "good afternoon",
        "good evening",
        "how are you",
        "ok",
        "okay",
        "thanks",
        "thank you",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

fn default_benign_phrases() -> Vec<String> {
    [
        "on my way",
        "running late",
        "see you soon",
        "see you later",
        "call me when you can",
        "call me later",
        "received the file",
        "thanks for the update",
        "thank you for your help",
        "happy birthday",
        "congratulations",
        "i will be there",
        "payment received",
        "invoice received",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}
