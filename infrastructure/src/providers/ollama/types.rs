//! Wire types for the Ollama generate API

use serde::{Deserialize, Serialize};
use suite_domain::ComparisonParams;

#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    /// Always `false`: the full answer arrives in one body
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<GenerateOptions>,
}

/// Tuning options, sent only when at least one is set
#[derive(Debug, Default, Serialize)]
pub struct GenerateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat_penalty: Option<f64>,
}

impl<'a> GenerateRequest<'a> {
    pub fn new(params: &'a ComparisonParams, prompt: &'a str) -> Self {
        let options = params.has_options().then(|| GenerateOptions {
            temperature: params.temperature,
            top_p: params.top_p,
            top_k: params.top_k,
            num_predict: params.num_predict,
            repeat_penalty: params.repeat_penalty,
        });

        Self {
            model: &params.model,
            prompt,
            stream: false,
            options,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub response: String,
    pub eval_count: Option<u64>,
    pub total_duration: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_without_options() {
        let params = ComparisonParams::new("llama3.1");
        let body = serde_json::to_value(GenerateRequest::new(&params, "compare")).unwrap();
        assert_eq!(
            body,
            json!({"model": "llama3.1", "prompt": "compare", "stream": false})
        );
    }

    #[test]
    fn test_request_with_options() {
        let params = ComparisonParams::new("llama3.1")
            .with_temperature(0.25)
            .with_num_predict(256);
        let body = serde_json::to_value(GenerateRequest::new(&params, "compare")).unwrap();
        assert_eq!(body["options"], json!({"temperature": 0.25, "num_predict": 256}));
    }

    #[test]
    fn test_response_optional_counters() {
        let response: GenerateResponse =
            serde_json::from_value(json!({"model": "m", "response": "ok", "done": true})).unwrap();
        assert_eq!(response.response, "ok");
        assert!(response.eval_count.is_none());
        assert!(response.total_duration.is_none());
    }
}
