//! Generation parameters for primary providers.
//!
//! [`GenerationParams`] is what a primary request is built from.
//! [`GenerationSnapshot`] is the subset recorded with every round; it never
//! carries credentials or transport settings.

use serde::{Deserialize, Serialize};

/// Default cap on web search tool invocations per request
pub const DEFAULT_WEB_SEARCH_MAX_USES: u32 = 3;

/// Sampling and tool settings shared by every primary request in a round.
///
/// Optional fields left as `None` (or an empty `stop_sequences`) are omitted
/// from the request so backend defaults apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Required output token cap
    pub max_tokens: u32,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    pub top_k: Option<u32>,
    /// System instruction
    pub system: Option<String>,
    pub stop_sequences: Vec<String>,
    /// Activate the web search tool
    pub web_search: bool,
    pub web_search_max_uses: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: 4096,
            temperature: None,
            top_p: None,
            top_k: None,
            system: None,
            stop_sequences: Vec::new(),
            web_search: false,
            web_search_max_uses: DEFAULT_WEB_SEARCH_MAX_USES,
        }
    }
}

impl GenerationParams {
    // ==================== Builder Methods ====================

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_web_search(mut self, max_uses: u32) -> Self {
        self.web_search = true;
        self.web_search_max_uses = max_uses;
        self
    }

    /// System instruction, if set to non-empty text
    pub fn system_text(&self) -> Option<&str> {
        self.system.as_deref().filter(|s| !s.is_empty())
    }

    /// The subset recorded with a round
    pub fn snapshot(&self) -> GenerationSnapshot {
        GenerationSnapshot {
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            top_p: self.top_p,
            top_k: self.top_k,
            system: self.system.clone(),
            stop_sequences: self.stop_sequences.clone(),
            web_search: self.web_search,
        }
    }
}

/// Generation settings in effect for a round, as stored in the record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSnapshot {
    pub max_tokens: u32,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    pub top_k: Option<u32>,
    pub system: Option<String>,
    pub stop_sequences: Vec<String>,
    pub web_search: bool,
}
