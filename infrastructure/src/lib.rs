//! Infrastructure layer for model-suite
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod attachment;
pub mod config;
pub mod providers;
pub mod storage;

// Re-export commonly used types
pub use attachment::LocalAttachmentLoader;
pub use config::{
    ConfigLoader, ConfigValidationError, FileAnthropicConfig, FileConfig, FileGenerationConfig,
    FileModelsConfig, FileOllamaConfig, FileReplConfig,
};
pub use providers::{AnthropicGateway, OllamaGateway};
pub use storage::{FileRoundStore, SystemReportViewer};
