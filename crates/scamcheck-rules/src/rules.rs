//! Override rules applied around the model
//!
//! Rules are deterministic checks that can short-circuit the classifier.
//! They match against normalized text only.

use aho_corasick::AhoCorasick;
use std::collections::HashSet;

use scamcheck_core::{Error, Result};

/// Exact-match greeting override
///
/// Membership is a configuration list, not a derived property: the rule
/// fires only when the whole normalized message equals one of the phrases.
pub struct GreetingRule {
    phrases: HashSet<String>,
    confidence: f32,
}

impl GreetingRule {
    pub fn new(phrases: &[String], confidence: f32) -> Self {
        Self {
            phrases: phrases.iter().map(|phrase| phrase.to_lowercase()).collect(),
            confidence,
        }
    }

    /// Check whether the normalized text is exactly a known greeting
    pub fn matches(&self, normalized: &str) -> bool {
        self.phrases.contains(normalized)
    }

    /// Confidence reported when this rule fires
    pub fn confidence(&self) -> f32 {
        self.confidence
    }
}

/// Contains-match benign phrase override
///
/// Fires when any configured benign phrase appears anywhere in the
/// normalized message. Optional; the pipeline only builds it when enabled.
pub struct BenignPhraseRule {
    matcher: AhoCorasick,
    confidence: f32,
}

impl BenignPhraseRule {
    pub fn new(phrases: &[String], confidence: f32) -> Result<Self> {
        let lowered: Vec<String> = phrases.iter().map(|phrase| phrase.to_lowercase()).collect();

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&lowered)
            .map_err(|e| Error::config(format!("failed to build benign phrase matcher: {e}")))?;

        Ok(Self {
            matcher,
            confidence,
        })
    }

    /// Check whether the normalized text contains a benign phrase
    pub fn matches(&self, normalized: &str) -> bool {
        self.matcher.is_match(normalized)
    }

    /// Confidence reported when this rule fires
    pub fn confidence(&self) -> f32 {
        self.confidence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greetings() -> Vec<String> {
        vec!["hi".to_string(), "hi there".to_string(), "thanks".to_string()]
    }

    #[test]
    fn test_greeting_rule_is_exact_match() {
        let rule = GreetingRule::new(&greetings(), 0.99);

        assert!(rule.matches("hi"));
        assert!(rule.matches("hi there"));
        assert!(!rule.matches("hi there friend"));
        assert!(!rule.matches(""));
    }

    #[test]
    fn test_greeting_rule_normalizes_phrase_case() {
        let rule = GreetingRule::new(&["Good Morning".to_string()], 0.99);
        assert!(rule.matches("good morning"));
    }

    #[test]
    fn test_benign_phrase_rule_is_contains_match() {
        let phrases = vec!["on my way".to_string(), "happy birthday".to_string()];
        let rule = BenignPhraseRule::new(&phrases, 0.99).unwrap();

        assert!(rule.matches("im on my way home"));
        assert!(rule.matches("happy birthday"));
        assert!(!rule.matches("your account is blocked"));
    }
}
