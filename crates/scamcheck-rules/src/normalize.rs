//! Message normalization
//!
//! Both the override rules and the model see the same normalized view of a
//! message: lower-cased, stripped of everything outside ASCII letters and
//! whitespace, with whitespace runs collapsed to single spaces. Input that
//! normalizes to the empty string (whitespace- or symbols-only) must never
//! reach the vectorizer.

use regex::Regex;

pub struct MessageNormalizer {
    strip: Regex,
}

impl MessageNormalizer {
    pub fn new() -> Self {
        Self {
            // Anything that is not a lower-case ASCII letter or whitespace
            // is dropped after lower-casing.
            strip: Regex::new(r"[^a-z\s]").expect("static normalization pattern is valid"),
        }
    }

    /// Normalize raw message text for rule matching and model input
    pub fn normalize(&self, raw: &str) -> String {
        let lowered = raw.to_lowercase();
        let stripped = self.strip.replace_all(&lowered, "");
        stripped.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl Default for MessageNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Count whitespace-separated words in normalized text
pub fn word_count(normalized: &str) -> usize {
    normalized.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_trims() {
        let normalizer = MessageNormalizer::new();
        assert_eq!(normalizer.normalize("  Hello There  "), "hello there");
    }

    #[test]
    fn test_strips_digits_and_punctuation() {
        let normalizer = MessageNormalizer::new();
        assert_eq!(
            normalizer.normalize("Win $1,000,000 NOW!!!"),
            "win now"
        );
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        let normalizer = MessageNormalizer::new();
        assert_eq!(normalizer.normalize("hi\t\n   there"), "hi there");
    }

    #[test]
    fn test_symbols_only_normalizes_to_empty() {
        let normalizer = MessageNormalizer::new();
        assert_eq!(normalizer.normalize("... !!! 123"), "");
        assert_eq!(normalizer.normalize("   "), "");
        assert_eq!(normalizer.normalize(""), "");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let normalizer = MessageNormalizer::new();
        let once = normalizer.normalize("URGENT: your account #42 is blocked!");
        let twice = normalizer.normalize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("win a prize"), 3);
        assert_eq!(word_count(""), 0);
    }
}
