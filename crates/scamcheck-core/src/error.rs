//! Error types for Scamcheck

/// Result type alias using Scamcheck's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for Scamcheck operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structurally unusable request input
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Model artifact loading or inference errors
    #[error("model error: {0}")]
    Model(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new invalid-input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new model error
    pub fn model(msg: impl Into<String>) -> Self {
        Self::Model(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
