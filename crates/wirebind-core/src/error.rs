//! Error types for wirebind generation

use crate::diagnostic::Diagnostic;
use thiserror::Error;

/// Result type alias for generation operations
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Error type for generation operations
///
/// Structural omissions are not errors; see [`Diagnostic`]. These variants cover
/// inputs that cannot be used at all and strict-mode rejection.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Schema document could not be decoded
    #[error("schema error: {0}")]
    Schema(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Template rendering failed
    #[error("template error: {0}")]
    Template(String),

    /// Strict mode rejected a run that recorded diagnostics
    #[error("generation recorded {} diagnostic(s) in strict mode", .diagnostics.len())]
    Strict { diagnostics: Vec<Diagnostic> },
}

impl GenerateError {
    /// Diagnostics attached to a strict-mode rejection
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            GenerateError::Strict { diagnostics } => diagnostics,
            _ => &[],
        }
    }
}

impl From<serde_json::Error> for GenerateError {
    fn from(err: serde_json::Error) -> Self {
        GenerateError::Schema(err.to_string())
    }
}

impl From<toml::de::Error> for GenerateError {
    fn from(err: toml::de::Error) -> Self {
        GenerateError::Schema(err.to_string())
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
