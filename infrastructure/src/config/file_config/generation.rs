//! Generation settings from TOML (`[generation]` section)

use serde::{Deserialize, Serialize};
use suite_domain::GenerationParams;

/// Raw generation settings shared by all primary requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    /// System instruction (empty is treated as unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    pub stop_sequences: Vec<String>,
    pub web_search: bool,
    pub web_search_max_uses: u32,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        let params = GenerationParams::default();
        Self {
            max_tokens: params.max_tokens,
            temperature: None,
            top_p: None,
            top_k: None,
            system: None,
            stop_sequences: Vec::new(),
            web_search: params.web_search,
            web_search_max_uses: params.web_search_max_uses,
        }
    }
}

impl FileGenerationConfig {
    pub fn to_params(&self) -> GenerationParams {
        GenerationParams {
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            top_p: self.top_p,
            top_k: self.top_k,
            system: self.system.clone().filter(|s| !s.trim().is_empty()),
            stop_sequences: self.stop_sequences.clone(),
            web_search: self.web_search,
            web_search_max_uses: self.web_search_max_uses,
        }
    }
}
