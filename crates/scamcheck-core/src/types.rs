//! Core types for Scamcheck

use serde::{Deserialize, Serialize};

/// Final classification label for a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Label {
    /// The message is considered legitimate
    Safe,
    /// The message is considered a scam
    Scam,
}

impl Label {
    /// Get the wire representation of this label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "SAFE",
            Self::Scam => "SCAM",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final structured verdict returned to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Classification label
    #[serde(rename = "prediction")]
    pub label: Label,

    /// Confidence in the returned label (0.0-1.0, two decimals)
    pub confidence: f32,

    /// Human-readable explanation of which rule or model path fired
    pub reason: String,
}

impl Verdict {
    /// Create a new verdict, clamping and rounding confidence for display
    pub fn new(label: Label, confidence: f32, reason: impl Into<String>) -> Self {
        Self {
            label,
            confidence: round_confidence(confidence.clamp(0.0, 1.0)),
            reason: reason.into(),
        }
    }

    /// Check whether the verdict flags the message as a scam
    pub fn is_scam(&self) -> bool {
        self.label == Label::Scam
    }
}

/// Round a confidence value to two decimals for the wire format
fn round_confidence(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
