//! LLM Gateway ports
//!
//! Defines the interfaces for communicating with the two provider families:
//! the primary multi-model provider and the single comparison backend.

use async_trait::async_trait;
use suite_domain::{ComparisonParams, GenerationParams, ResponseBlock};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during gateway operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// A single request to a primary provider
#[derive(Debug, Clone, PartialEq)]
pub struct PrimaryRequest {
    /// Backend model identifier
    pub model: String,
    /// Sole user message
    pub prompt: String,
    pub params: GenerationParams,
}

/// Raw primary response, before normalization
#[derive(Debug, Clone, PartialEq)]
pub struct PrimaryResponse {
    /// Model name reported by the backend
    pub model: String,
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub stop_reason: Option<String>,
    pub content: Vec<ResponseBlock>,
}

/// Gateway for the primary provider family
///
/// Implementations (adapters) live in the infrastructure layer. A call
/// performs exactly one request/response cycle; no retries.
#[async_trait]
pub trait PrimaryGateway: Send + Sync {
    async fn send(&self, request: &PrimaryRequest) -> Result<PrimaryResponse, GatewayError>;
}

/// A single request to the comparison backend
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRequest {
    pub params: ComparisonParams,
    /// Synthesized comparison prompt
    pub prompt: String,
}

/// Comparison backend response
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResponse {
    pub response_text: String,
    /// Tokens evaluated, when reported
    pub eval_count: Option<u64>,
    pub total_duration_ns: Option<u64>,
}

/// Gateway for the comparison backend
#[async_trait]
pub trait ComparisonGateway: Send + Sync {
    async fn generate(
        &self,
        request: &ComparisonRequest,
    ) -> Result<ComparisonResponse, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GatewayError::HttpStatus {
            status: 529,
            message: "overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 529: overloaded");
        assert_eq!(
            GatewayError::Timeout(Duration::from_secs(300)).to_string(),
            "Request timed out after 300s"
        );
    }
}
