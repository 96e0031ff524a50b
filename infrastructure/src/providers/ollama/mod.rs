//! Ollama generate API provider (comparison backend)

mod adapter;
pub mod types;

pub use adapter::OllamaGateway;
