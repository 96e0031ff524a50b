//! Anthropic Messages API provider (primary family)

mod adapter;
pub mod types;

pub use adapter::AnthropicGateway;
