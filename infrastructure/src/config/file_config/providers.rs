//! Provider connection settings from TOML (`[anthropic]`, `[ollama]` sections)

use serde::{Deserialize, Serialize};
use suite_domain::ComparisonParams;

/// Anthropic API provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnthropicConfig {
    /// Base URL for the Anthropic API.
    pub base_url: String,
    /// Environment variable name for the API key (default: "ANTHROPIC_API_KEY").
    pub api_key_env: String,
    /// Anthropic API version header.
    pub api_version: String,
    /// Per-request timeout.
    pub timeout_seconds: u64,
}

impl Default for FileAnthropicConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.anthropic.com".to_string(),
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
            api_version: "2023-06-01".to_string(),
            timeout_seconds: 300,
        }
    }
}

/// Ollama comparison backend configuration.
///
/// The whole section is optional; without it no comparison runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOllamaConfig {
    pub base_url: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat_penalty: Option<f64>,
    pub timeout_seconds: u64,
}

impl Default for FileOllamaConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: String::new(),
            temperature: None,
            top_p: None,
            top_k: None,
            num_predict: None,
            repeat_penalty: None,
            timeout_seconds: 600,
        }
    }
}

impl FileOllamaConfig {
    pub fn to_params(&self) -> ComparisonParams {
        ComparisonParams {
            model: self.model.trim().to_string(),
            temperature: self.temperature,
            top_p: self.top_p,
            top_k: self.top_k,
            num_predict: self.num_predict,
            repeat_penalty: self.repeat_penalty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ollama_section() {
        let config: FileOllamaConfig = toml::from_str(
            r#"
model = "llama3.1"
num_predict = 512
"#,
        )
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:11434");
        assert_eq!(config.timeout_seconds, 600);
        let params = config.to_params();
        assert_eq!(params.model, "llama3.1");
        assert_eq!(params.num_predict, Some(512));
        assert!(params.temperature.is_none());
    }
}
