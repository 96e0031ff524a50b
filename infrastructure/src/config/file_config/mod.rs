//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application types
//! by [`FileConfig::to_round_config`].

mod generation;
mod models;
mod providers;
mod repl;

pub use generation::FileGenerationConfig;
pub use models::FileModelsConfig;
pub use providers::{FileAnthropicConfig, FileOllamaConfig};
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use suite_application::{CallTimeouts, RoundConfig};
use suite_domain::{EnablementFlags, PrimaryProvider};
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("generation.max_tokens cannot be 0")]
    ZeroMaxTokens,

    #[error("models.{0}: model name cannot be empty")]
    EmptyModelName(PrimaryProvider),

    #[error("ollama.model cannot be empty")]
    EmptyComparisonModel,

    #[error("{0}.timeout_seconds cannot be 0")]
    InvalidTimeout(&'static str),

    #[error("default_flags: invalid flag string '{0}' (expected 3 or 4 of '+'/'-')")]
    InvalidDefaultFlags(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Directory for round artifacts
    pub output_dir: String,
    /// Open the HTML report after each round
    pub open_report: bool,
    /// Flags used when a prompt carries no directive
    pub default_flags: String,
    pub anthropic: FileAnthropicConfig,
    pub models: FileModelsConfig,
    pub generation: FileGenerationConfig,
    /// Comparison backend; absent disables the comparison stage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ollama: Option<FileOllamaConfig>,
    pub repl: FileReplConfig,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            output_dir: "outputs".to_string(),
            open_report: true,
            default_flags: "++++".to_string(),
            anthropic: FileAnthropicConfig::default(),
            models: FileModelsConfig::default(),
            generation: FileGenerationConfig::default(),
            ollama: None,
            repl: FileReplConfig::default(),
        }
    }
}

impl FileConfig {
    /// Validate the configuration, stopping at the first problem
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !EnablementFlags::is_valid(&self.default_flags) {
            return Err(ConfigValidationError::InvalidDefaultFlags(
                self.default_flags.clone(),
            ));
        }

        if self.generation.max_tokens == 0 {
            return Err(ConfigValidationError::ZeroMaxTokens);
        }

        if let Some(provider) = self.models.first_empty() {
            return Err(ConfigValidationError::EmptyModelName(provider));
        }

        if self.anthropic.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout("anthropic"));
        }

        if let Some(ollama) = &self.ollama {
            if ollama.model.trim().is_empty() {
                return Err(ConfigValidationError::EmptyComparisonModel);
            }
            if ollama.timeout_seconds == 0 {
                return Err(ConfigValidationError::InvalidTimeout("ollama"));
            }
        }

        Ok(())
    }

    /// Validated application view of this configuration
    pub fn to_round_config(&self) -> Result<RoundConfig, ConfigValidationError> {
        self.validate()?;

        let comparison_timeout = self
            .ollama
            .as_ref()
            .map(|o| o.timeout_seconds)
            .unwrap_or(FileOllamaConfig::default().timeout_seconds);

        let mut config = RoundConfig::default()
            .with_default_flags(self.default_flags.clone())
            .with_models(self.models.to_primary_models())
            .with_generation(self.generation.to_params())
            .with_timeouts(CallTimeouts {
                primary: Duration::from_secs(self.anthropic.timeout_seconds),
                comparison: Duration::from_secs(comparison_timeout),
            });
        if let Some(ollama) = &self.ollama {
            config = config.with_comparison(ollama.to_params());
        }
        Ok(config)
    }

    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(&self.output_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
output_dir = "runs"
open_report = false
default_flags = "++-"

[anthropic]
timeout_seconds = 120

[models]
haiku = "claude-3-5-haiku-latest"

[generation]
max_tokens = 2048
stop_sequences = ["END"]

[ollama]
model = "llama3.1"
temperature = 0.2
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output_dir(), PathBuf::from("runs"));
        assert!(!config.open_report);

        let round = config.to_round_config().unwrap();
        assert_eq!(round.default_flags, "++-");
        assert_eq!(round.models.haiku, "claude-3-5-haiku-latest");
        assert_eq!(round.models.opus, "claude-opus-4-5");
        assert_eq!(round.generation.max_tokens, 2048);
        assert_eq!(round.generation.stop_sequences, vec!["END".to_string()]);
        assert_eq!(round.timeouts.primary, Duration::from_secs(120));
        assert_eq!(round.timeouts.comparison, Duration::from_secs(600));
        let comparison = round.comparison.unwrap();
        assert_eq!(comparison.model, "llama3.1");
        assert_eq!(comparison.temperature, Some(0.2));
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.ollama.is_none());

        let round = config.to_round_config().unwrap();
        assert!(!round.has_comparison());
        assert_eq!(round.generation.max_tokens, 4096);
    }

    #[test]
    fn test_validate_zero_max_tokens() {
        let config: FileConfig = toml::from_str("[generation]\nmax_tokens = 0").unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::ZeroMaxTokens));
    }

    #[test]
    fn test_validate_bad_default_flags() {
        let config: FileConfig = toml::from_str(r#"default_flags = "+-x""#).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidDefaultFlags(_))
        ));
    }

    #[test]
    fn test_validate_empty_names() {
        let config: FileConfig = toml::from_str("[models]\nopus = \"\"").unwrap();
        assert_eq!(
            config.validate().unwrap_err().to_string(),
            "models.opus: model name cannot be empty"
        );

        let config: FileConfig = toml::from_str("[ollama]\nbase_url = \"http://h:1\"").unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::EmptyComparisonModel)
        );
    }

    #[test]
    fn test_validate_zero_timeout() {
        let config: FileConfig =
            toml::from_str("[ollama]\nmodel = \"m\"\ntimeout_seconds = 0").unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout("ollama"))
        );
    }
}
