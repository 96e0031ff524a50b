//! Wire types for the Anthropic Messages API
//!
//! Request fields left unset are omitted so the API applies its defaults.

use serde::{Deserialize, Serialize};
use suite_application::PrimaryRequest;
use suite_domain::{ResponseBlock, SearchHit};

pub const WEB_SEARCH_TOOL_TYPE: &str = "web_search_20250305";
pub const WEB_SEARCH_TOOL_NAME: &str = "web_search";

// ─── Request ─────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct MessagesRequest<'a> {
    pub model: &'a str,
    pub max_tokens: u32,
    pub messages: Vec<Message<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub stop_sequences: &'a [String],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
}

#[derive(Debug, Serialize)]
pub struct Message<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
pub struct Tool {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: &'static str,
    pub max_uses: u32,
}

impl<'a> MessagesRequest<'a> {
    pub fn from_request(request: &'a PrimaryRequest) -> Self {
        let params = &request.params;
        let tools = if params.web_search {
            vec![Tool {
                kind: WEB_SEARCH_TOOL_TYPE,
                name: WEB_SEARCH_TOOL_NAME,
                max_uses: params.web_search_max_uses,
            }]
        } else {
            Vec::new()
        };

        Self {
            model: &request.model,
            max_tokens: params.max_tokens,
            messages: vec![Message {
                role: "user",
                content: &request.prompt,
            }],
            system: params.system_text(),
            temperature: params.temperature,
            top_p: params.top_p,
            top_k: params.top_k,
            stop_sequences: &params.stop_sequences,
            tools,
        }
    }
}

// ─── Response ────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    pub model: String,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    pub stop_reason: Option<String>,
    #[serde(default)]
    pub usage: Usage,
}

#[derive(Debug, Default, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        text: String,
    },
    ServerToolUse {
        #[serde(default)]
        name: String,
        #[serde(default)]
        input: serde_json::Value,
    },
    WebSearchToolResult {
        /// Either a list of results or an error object
        #[serde(default)]
        content: serde_json::Value,
    },
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Deserialize)]
struct WebSearchResult {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    page_snippet: String,
}

impl ContentBlock {
    pub fn into_response_block(self) -> ResponseBlock {
        match self {
            ContentBlock::Text { text } => ResponseBlock::Text(text),
            ContentBlock::ServerToolUse { name, input } if name == WEB_SEARCH_TOOL_NAME => {
                let query = input
                    .get("query")
                    .and_then(|q| q.as_str())
                    .unwrap_or_default();
                ResponseBlock::SearchQuery(query.to_string())
            }
            ContentBlock::ServerToolUse { name, .. } => ResponseBlock::Other(name),
            ContentBlock::WebSearchToolResult { content } => {
                let hits = serde_json::from_value::<Vec<WebSearchResult>>(content)
                    .unwrap_or_default()
                    .into_iter()
                    .filter(|r| r.kind == "web_search_result")
                    .map(|r| SearchHit::new(r.title, r.url, r.page_snippet))
                    .collect();
                ResponseBlock::SearchResults(hits)
            }
            ContentBlock::Unsupported => ResponseBlock::Other("unsupported".to_string()),
        }
    }
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use suite_domain::GenerationParams;

    #[test]
    fn test_minimal_request_omits_unset_fields() {
        let request = PrimaryRequest {
            model: "claude-haiku-4-5".to_string(),
            prompt: "hi".to_string(),
            params: GenerationParams::default(),
        };

        let body = serde_json::to_value(MessagesRequest::from_request(&request)).unwrap();
        assert_eq!(
            body,
            json!({
                "model": "claude-haiku-4-5",
                "max_tokens": 4096,
                "messages": [{"role": "user", "content": "hi"}],
            })
        );
    }

    #[test]
    fn test_full_request() {
        let mut params = GenerationParams::default()
            .with_temperature(0.5)
            .with_system("be brief")
            .with_web_search(2);
        params.stop_sequences = vec!["STOP".to_string()];
        let request = PrimaryRequest {
            model: "m".to_string(),
            prompt: "hi".to_string(),
            params,
        };

        let body = serde_json::to_value(MessagesRequest::from_request(&request)).unwrap();
        assert_eq!(body["system"], "be brief");
        assert_eq!(body["temperature"], 0.5);
        assert_eq!(body["stop_sequences"], json!(["STOP"]));
        assert_eq!(
            body["tools"],
            json!([{"type": "web_search_20250305", "name": "web_search", "max_uses": 2}])
        );
        assert!(body.get("top_k").is_none());
    }

    #[test]
    fn test_parse_response_with_search() {
        let body = json!({
            "id": "msg_1",
            "model": "claude-sonnet-4-5-20250929",
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 11, "output_tokens": 7},
            "content": [
                {"type": "server_tool_use", "id": "s1", "name": "web_search", "input": {"query": "rust 2024"}},
                {"type": "web_search_tool_result", "tool_use_id": "s1", "content": [
                    {"type": "web_search_result", "title": "Edition Guide", "url": "https://doc.rust-lang.org/edition-guide/", "encrypted_content": "x"}
                ]},
                {"type": "text", "text": "Edition 2024 is stable."},
                {"type": "thinking", "thinking": "..."}
            ]
        });

        let response: MessagesResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.usage.output_tokens, 7);
        let blocks: Vec<ResponseBlock> = response
            .content
            .into_iter()
            .map(ContentBlock::into_response_block)
            .collect();

        assert_eq!(blocks[0], ResponseBlock::SearchQuery("rust 2024".to_string()));
        assert_eq!(
            blocks[1],
            ResponseBlock::SearchResults(vec![SearchHit::new(
                "Edition Guide",
                "https://doc.rust-lang.org/edition-guide/",
                ""
            )])
        );
        assert_eq!(blocks[2], ResponseBlock::Text("Edition 2024 is stable.".to_string()));
        assert!(matches!(blocks[3], ResponseBlock::Other(_)));
    }

    #[test]
    fn test_search_error_object_yields_no_hits() {
        let block: ContentBlock = serde_json::from_value(json!({
            "type": "web_search_tool_result",
            "content": {"type": "web_search_tool_result_error", "error_code": "max_uses_exceeded"}
        }))
        .unwrap();
        assert_eq!(block.into_response_block(), ResponseBlock::SearchResults(vec![]));
    }
}
