//! Scamcheck Rules
//!
//! Deterministic override rules and the decision pipeline that combines
//! them with a pre-trained scam classifier.
//!
//! Rule precedence is fixed and total: empty-input check, greeting
//! override, optional benign-phrase override, model scoring, primary
//! threshold, context-aware reconsideration, model-driven reason. Exactly
//! one terminal branch produces the returned verdict.

pub mod config;
pub mod normalize;
pub mod pipeline;
pub mod rules;

pub use config::RuleConfig;
pub use normalize::MessageNormalizer;
pub use pipeline::DecisionPipeline;
pub use rules::{BenignPhraseRule, GreetingRule};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::RuleConfig;
    pub use crate::normalize::MessageNormalizer;
    pub use crate::pipeline::DecisionPipeline;
    pub use crate::rules::{BenignPhraseRule, GreetingRule};
}
