//! The decision pipeline
//!
//! Turns one raw message into a final verdict by combining the override
//! rules with the classifier's probability. The pipeline holds no mutable
//! state: given the same input and an unchanged classifier, it returns an
//! identical verdict.

use std::sync::Arc;

use scamcheck_classifiers::TextClassifier;
use scamcheck_core::{Label, Result, Verdict};
use tracing::debug;

use crate::config::RuleConfig;
use crate::normalize::{word_count, MessageNormalizer};
use crate::rules::{BenignPhraseRule, GreetingRule};

const EMPTY_MESSAGE_REASON: &str = "empty/whitespace message treated as SAFE";
const GREETING_REASON: &str = "Classified as SAFE by greeting rule.";
const BENIGN_PHRASE_REASON: &str = "Classified as SAFE by benign phrase rule.";

pub struct DecisionPipeline {
    classifier: Arc<dyn TextClassifier>,
    config: RuleConfig,
    normalizer: MessageNormalizer,
    greeting: GreetingRule,
    benign: Option<BenignPhraseRule>,
}

impl DecisionPipeline {
    /// Build a pipeline around a loaded classifier
    pub fn new(classifier: Arc<dyn TextClassifier>, config: RuleConfig) -> Result<Self> {
        config.validate()?;

        let greeting = GreetingRule::new(&config.greetings, config.greeting_confidence);
        let benign = if config.benign_phrases_enabled {
            Some(BenignPhraseRule::new(
                &config.benign_phrases,
                config.greeting_confidence,
            )?)
        } else {
            None
        };

        Ok(Self {
            classifier,
            config,
            normalizer: MessageNormalizer::new(),
            greeting,
            benign,
        })
    }

    /// Classify one raw message into a final verdict
    ///
    /// Overrides short-circuit before the model is consulted; classifier
    /// failures propagate instead of defaulting to a label.
    pub async fn decide(&self, raw: &str) -> Result<Verdict> {
        let normalized = self.normalizer.normalize(raw);

        // Empty input never reaches the vectorizer.
        if normalized.is_empty() {
            return Ok(Verdict::new(
                Label::Safe,
                self.config.empty_confidence,
                EMPTY_MESSAGE_REASON,
            ));
        }

        if self.greeting.matches(&normalized) {
            debug!(message = %normalized, "greeting rule fired");
            return Ok(Verdict::new(
                Label::Safe,
                self.greeting.confidence(),
                GREETING_REASON,
            ));
        }

        if let Some(benign) = &self.benign {
            if benign.matches(&normalized) {
                debug!(message = %normalized, "benign phrase rule fired");
                return Ok(Verdict::new(
                    Label::Safe,
                    benign.confidence(),
                    BENIGN_PHRASE_REASON,
                ));
            }
        }

        let score = self.classifier.scam_probability(&normalized).await?;
        let probability = score.probability.clamp(0.0, 1.0);
        debug!(
            model = score.model.as_deref().unwrap_or("unknown"),
            probability, "model scored message"
        );

        Ok(self.verdict_from_probability(&normalized, probability))
    }

    /// Threshold the model's probability and apply the reconsideration rule
    fn verdict_from_probability(&self, normalized: &str, probability: f32) -> Verdict {
        let (label, confidence) = if probability >= self.config.decision_threshold {
            (Label::Scam, probability)
        } else {
            (Label::Safe, 1.0 - probability)
        };

        // Short messages yield unreliable high-variance model outputs, so a
        // weak SCAM signal on one is downgraded to SAFE.
        if label == Label::Scam
            && confidence < self.config.low_confidence_threshold
            && word_count(normalized) < self.config.short_message_words
        {
            return Verdict::new(
                Label::Safe,
                self.config.reconsidered_confidence,
                format!(
                    "Re-evaluated as SAFE: low-confidence SCAM signal ({confidence:.2} confidence) on a short message."
                ),
            );
        }

        let reason = if confidence > 0.8 {
            format!(
                "Highly likely {label} based on ML model prediction ({confidence:.2} confidence)."
            )
        } else {
            format!("Classified by ML model with {confidence:.2} confidence.")
        };

        Verdict::new(label, confidence, reason)
    }
}
