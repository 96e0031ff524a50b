//! LLM provider adapters
//!
//! - [`anthropic`] - primary family over the Anthropic Messages API
//! - [`ollama`] - comparison backend over the Ollama generate API

pub mod anthropic;
pub mod ollama;

pub use anthropic::AnthropicGateway;
pub use ollama::OllamaGateway;
