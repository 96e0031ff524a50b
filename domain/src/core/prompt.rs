//! Prompt value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A resolved prompt sent to every enabled provider (Value Object)
///
/// "Resolved" means inline flag directives have been stripped and file
/// references expanded; the text is exactly what providers receive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Prompt {
    content: String,
}

impl Prompt {
    /// Create a new prompt
    ///
    /// # Panics
    /// Panics if the content is empty or only whitespace
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        assert!(!content.trim().is_empty(), "Prompt cannot be empty");
        Self { content }
    }

    /// Try to create a new prompt, rejecting blank content
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            Err(DomainError::EmptyPrompt)
        } else {
            Ok(Self { content })
        }
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// First `max_chars` characters, with an ellipsis when truncated
    pub fn preview(&self, max_chars: usize) -> String {
        let mut chars = self.content.chars();
        let head: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            format!("{}...", head)
        } else {
            head
        }
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
