//! Provider model configuration from TOML (`[models]` section)

use serde::{Deserialize, Serialize};
use suite_domain::{PrimaryModels, PrimaryProvider};

/// Model identifier per primary provider
///
/// # Example
///
/// ```toml
/// [models]
/// opus = "claude-opus-4-5"
/// sonnet = "claude-sonnet-4-5"
/// haiku = "claude-haiku-4-5"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    pub opus: String,
    pub sonnet: String,
    pub haiku: String,
}

impl Default for FileModelsConfig {
    fn default() -> Self {
        let models = PrimaryModels::default();
        Self {
            opus: models.opus,
            sonnet: models.sonnet,
            haiku: models.haiku,
        }
    }
}

impl FileModelsConfig {
    /// First provider whose model id is blank
    pub fn first_empty(&self) -> Option<PrimaryProvider> {
        PrimaryProvider::ALL
            .into_iter()
            .find(|p| self.model_for(*p).trim().is_empty())
    }

    fn model_for(&self, provider: PrimaryProvider) -> &str {
        match provider {
            PrimaryProvider::Opus => &self.opus,
            PrimaryProvider::Sonnet => &self.sonnet,
            PrimaryProvider::Haiku => &self.haiku,
        }
    }

    pub fn to_primary_models(&self) -> PrimaryModels {
        PrimaryModels {
            opus: self.opus.trim().to_string(),
            sonnet: self.sonnet.trim().to_string(),
            haiku: self.haiku.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: FileModelsConfig = toml::from_str(r#"opus = "claude-opus-4-1""#).unwrap();
        assert_eq!(config.opus, "claude-opus-4-1");
        assert_eq!(config.haiku, "claude-haiku-4-5");
        assert_eq!(config.first_empty(), None);
    }

    #[test]
    fn test_empty_model_detected() {
        let config: FileModelsConfig = toml::from_str(r#"sonnet = " ""#).unwrap();
        assert_eq!(config.first_empty(), Some(PrimaryProvider::Sonnet));
    }
}
