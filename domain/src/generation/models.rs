//! Provider-to-model mapping.

use crate::core::provider::PrimaryProvider;
use serde::{Deserialize, Serialize};

/// Backend model identifier for each primary provider (Value Object)
///
/// Every primary provider always has a model, so any enabled provider can
/// be dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryModels {
    pub opus: String,
    pub sonnet: String,
    pub haiku: String,
}

impl Default for PrimaryModels {
    fn default() -> Self {
        Self {
            opus: "claude-opus-4-5".to_string(),
            sonnet: "claude-sonnet-4-5".to_string(),
            haiku: "claude-haiku-4-5".to_string(),
        }
    }
}

impl PrimaryModels {
    /// Model identifier requested for `provider`
    pub fn model_for(&self, provider: PrimaryProvider) -> &str {
        match provider {
            PrimaryProvider::Opus => &self.opus,
            PrimaryProvider::Sonnet => &self.sonnet,
            PrimaryProvider::Haiku => &self.haiku,
        }
    }

    pub fn with_model(mut self, provider: PrimaryProvider, model: impl Into<String>) -> Self {
        let model = model.into();
        match provider {
            PrimaryProvider::Opus => self.opus = model,
            PrimaryProvider::Sonnet => self.sonnet = model,
            PrimaryProvider::Haiku => self.haiku = model,
        }
        self
    }
}
