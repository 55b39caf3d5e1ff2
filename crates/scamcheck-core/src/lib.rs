//! Scamcheck Core
//!
//! Core types and utilities shared across Scamcheck components.
//!
//! This crate provides:
//! - The `Verdict` and `Label` types returned to callers
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{Label, Verdict};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{Label, Verdict};
}
