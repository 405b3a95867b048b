//! Error types for conversion operations

use std::fmt;

/// Errors that can occur during conversion operations
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Scope name not recognized
    ScopeNotFound(String),
    /// An iterated rule failed to reach a fixed point within its pass ceiling
    TooManyPasses(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::ScopeNotFound(name) => write!(f, "Scope '{name}' not found"),
            ConvertError::TooManyPasses(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ConvertError {}
