//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid flag format: {0:?} (expected 3 or 4 of '+'/'-', e.g. ++-+)")]
    InvalidFlagFormat(String),

    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    #[error("Prompt cannot be empty")]
    EmptyPrompt,
}

impl DomainError {
    /// Check if this error was caused by a malformed flag string
    pub fn is_flag_format(&self) -> bool {
        matches!(self, DomainError::InvalidFlagFormat(_))
    }
}
