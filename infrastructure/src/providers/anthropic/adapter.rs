//! Anthropic provider adapter
//!
//! Implements `PrimaryGateway` over the Messages API with one
//! request/response cycle per call.

use super::types::{ContentBlock, ErrorResponse, MessagesRequest, MessagesResponse};
use crate::config::FileAnthropicConfig;
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use std::time::Duration;
use suite_application::{GatewayError, PrimaryGateway, PrimaryRequest, PrimaryResponse};
use tracing::{debug, warn};

pub struct AnthropicGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    api_key_env: String,
}

impl AnthropicGateway {
    /// Create an adapter with an explicit key.
    ///
    /// Without a key every call fails with a configuration error, so a
    /// missing credential surfaces as per-provider failures in the round.
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        api_version: &str,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let version = HeaderValue::from_str(api_version)
            .map_err(|_| GatewayError::Configuration("Invalid API version header".to_string()))?;
        headers.insert("anthropic-version", version);

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| {
                GatewayError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
        })
    }

    /// Create from the `[anthropic]` section, reading the key from its env var
    pub fn from_config(config: &FileAnthropicConfig) -> Result<Self, GatewayError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty());
        if api_key.is_none() {
            warn!("{} is not set; primary requests will fail", config.api_key_env);
        }

        let mut gateway = Self::new(
            &config.base_url,
            api_key,
            &config.api_version,
            Duration::from_secs(config.timeout_seconds),
        )?;
        gateway.api_key_env = config.api_key_env.clone();
        Ok(gateway)
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }

    fn map_send_error(e: reqwest::Error) -> GatewayError {
        if e.is_timeout() {
            GatewayError::ConnectionError(format!("request timed out: {e}"))
        } else {
            GatewayError::ConnectionError(e.to_string())
        }
    }

    /// Best-effort readable message from an error body
    fn error_message(body: &str) -> String {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(err) if !err.error.kind.is_empty() => {
                format!("{}: {}", err.error.kind, err.error.message)
            }
            Ok(err) => err.error.message,
            Err(_) => body.trim().to_string(),
        }
    }
}

#[async_trait]
impl PrimaryGateway for AnthropicGateway {
    async fn send(&self, request: &PrimaryRequest) -> Result<PrimaryResponse, GatewayError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            GatewayError::Configuration(format!("{} is not set", self.api_key_env))
        })?;

        let body = MessagesRequest::from_request(request);
        debug!(model = %request.model, "POST {}", self.messages_url());

        let response = self
            .client
            .post(self.messages_url())
            .header("x-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let status = response.status();
        let text = response.text().await.map_err(Self::map_send_error)?;

        if !status.is_success() {
            return Err(GatewayError::HttpStatus {
                status: status.as_u16(),
                message: Self::error_message(&text),
            });
        }

        let parsed: MessagesResponse = serde_json::from_str(&text)
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        Ok(PrimaryResponse {
            model: parsed.model,
            input_tokens: parsed.usage.input_tokens,
            output_tokens: parsed.usage.output_tokens,
            stop_reason: parsed.stop_reason,
            content: parsed
                .content
                .into_iter()
                .map(ContentBlock::into_response_block)
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use suite_domain::GenerationParams;

    #[test]
    fn test_error_message_parsing() {
        let body = r#"{"type":"error","error":{"type":"overloaded_error","message":"Overloaded"}}"#;
        assert_eq!(
            AnthropicGateway::error_message(body),
            "overloaded_error: Overloaded"
        );
        assert_eq!(AnthropicGateway::error_message(" bad gateway \n"), "bad gateway");
    }

    #[test]
    fn test_messages_url_trims_slash() {
        let gateway = AnthropicGateway::new(
            "https://api.anthropic.com/",
            None,
            "2023-06-01",
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(gateway.messages_url(), "https://api.anthropic.com/v1/messages");
    }

    #[tokio::test]
    async fn test_missing_key_fails_without_network() {
        let gateway = AnthropicGateway::new(
            "http://127.0.0.1:9",
            None,
            "2023-06-01",
            Duration::from_secs(5),
        )
        .unwrap();
        let request = PrimaryRequest {
            model: "m".to_string(),
            prompt: "hi".to_string(),
            params: GenerationParams::default(),
        };

        let err = gateway.send(&request).await.unwrap_err();
        assert_eq!(
            err,
            GatewayError::Configuration("ANTHROPIC_API_KEY is not set".to_string())
        );
    }
}
