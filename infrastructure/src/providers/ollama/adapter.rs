//! Ollama provider adapter
//!
//! Implements `ComparisonGateway` with a single non-streaming
//! `POST /api/generate` call.

use super::types::{ErrorResponse, GenerateRequest, GenerateResponse};
use crate::config::FileOllamaConfig;
use async_trait::async_trait;
use std::time::Duration;
use suite_application::{ComparisonGateway, ComparisonRequest, ComparisonResponse, GatewayError};
use tracing::debug;

pub struct OllamaGateway {
    client: reqwest::Client,
    base_url: String,
}

impl OllamaGateway {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                GatewayError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Create from the `[ollama]` section
    pub fn from_config(config: &FileOllamaConfig) -> Result<Self, GatewayError> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_seconds))
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }
}

#[async_trait]
impl ComparisonGateway for OllamaGateway {
    async fn generate(
        &self,
        request: &ComparisonRequest,
    ) -> Result<ComparisonResponse, GatewayError> {
        let body = GenerateRequest::new(&request.params, &request.prompt);
        debug!(model = %request.params.model, "POST {}", self.generate_url());

        let response = self
            .client
            .post(self.generate_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|e| e.error)
                .unwrap_or_else(|_| text.trim().to_string());
            return Err(GatewayError::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateResponse = serde_json::from_str(&text)
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        Ok(ComparisonResponse {
            response_text: parsed.response,
            eval_count: parsed.eval_count,
            total_duration_ns: parsed.total_duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use suite_domain::ComparisonParams;

    #[test]
    fn test_generate_url() {
        let gateway = OllamaGateway::new("http://localhost:11434/", Duration::from_secs(1)).unwrap();
        assert_eq!(gateway.generate_url(), "http://localhost:11434/api/generate");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_connection_error() {
        // Nothing listens on the discard port locally.
        let gateway = OllamaGateway::new("http://127.0.0.1:9", Duration::from_secs(5)).unwrap();
        let request = ComparisonRequest {
            params: ComparisonParams::new("llama3.1"),
            prompt: "compare".to_string(),
        };

        let err = gateway.generate(&request).await.unwrap_err();
        assert!(matches!(err, GatewayError::ConnectionError(_)));
    }
}
