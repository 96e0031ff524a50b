//! Round configuration.
//!
//! [`RoundConfig`] is the resolved, validated view of the configuration file
//! that use cases consume. It never carries credentials; those stay inside
//! the provider adapters.

use suite_domain::{ComparisonParams, GenerationParams, PrimaryModels};
use std::time::Duration;

/// Per-call time limits.
///
/// A call that exceeds its limit becomes a failure for that provider only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallTimeouts {
    pub primary: Duration,
    pub comparison: Duration,
}

impl Default for CallTimeouts {
    fn default() -> Self {
        Self {
            primary: Duration::from_secs(300),
            comparison: Duration::from_secs(600),
        }
    }
}

/// Static settings for a round
#[derive(Debug, Clone, PartialEq)]
pub struct RoundConfig {
    /// Flags used when the prompt carries no directive
    pub default_flags: String,
    pub models: PrimaryModels,
    pub generation: GenerationParams,
    /// `None` when no comparison backend is configured
    pub comparison: Option<ComparisonParams>,
    pub timeouts: CallTimeouts,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            default_flags: "++++".to_string(),
            models: PrimaryModels::default(),
            generation: GenerationParams::default(),
            comparison: None,
            timeouts: CallTimeouts::default(),
        }
    }
}

impl RoundConfig {
    // ==================== Builder Methods ====================

    pub fn with_default_flags(mut self, flags: impl Into<String>) -> Self {
        self.default_flags = flags.into();
        self
    }

    pub fn with_models(mut self, models: PrimaryModels) -> Self {
        self.models = models;
        self
    }

    pub fn with_generation(mut self, generation: GenerationParams) -> Self {
        self.generation = generation;
        self
    }

    pub fn with_comparison(mut self, comparison: ComparisonParams) -> Self {
        self.comparison = Some(comparison);
        self
    }

    pub fn with_timeouts(mut self, timeouts: CallTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Whether a comparison backend is configured
    pub fn has_comparison(&self) -> bool {
        self.comparison.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RoundConfig::default();
        assert_eq!(config.default_flags, "++++");
        assert!(!config.has_comparison());
        assert_eq!(config.timeouts.primary, Duration::from_secs(300));
        assert_eq!(config.timeouts.comparison, Duration::from_secs(600));
    }

    #[test]
    fn test_builder() {
        let config = RoundConfig::default()
            .with_default_flags("+--")
            .with_comparison(ComparisonParams::new("llama3"));
        assert_eq!(config.default_flags, "+--");
        assert_eq!(
            config.comparison.map(|c| c.model),
            Some("llama3".to_string())
        );
    }
}
