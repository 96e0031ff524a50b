//! Configuration file loading for model-suite
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `MODEL_SUITE_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./suite.toml` or `./.suite.toml`
//! 4. Global: `$XDG_CONFIG_HOME/model-suite/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAnthropicConfig, FileConfig, FileGenerationConfig,
    FileModelsConfig, FileOllamaConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
