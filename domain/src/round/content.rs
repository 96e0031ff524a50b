//! Response content blocks and search activity.
//!
//! Primary providers answer with an ordered list of content blocks that mix
//! text with tool echoes (web search invocations and their results). These
//! types model that structure independently of any wire format.
//!
//! # Examples
//!
//! ```
//! use suite_domain::round::content::{ResponseBlock, SearchActivity, SearchHit, search_activity, text_content};
//!
//! let blocks = vec![
//!     ResponseBlock::SearchQuery("rust 2024 edition".to_string()),
//!     ResponseBlock::SearchResults(vec![SearchHit::new("Rust Blog", "https://blog.rust-lang.org", "")]),
//!     ResponseBlock::Text("The 2024 edition ".to_string()),
//!     ResponseBlock::Text("shipped in Rust 1.85.".to_string()),
//! ];
//!
//! assert_eq!(text_content(&blocks), "The 2024 edition shipped in Rust 1.85.");
//! assert_eq!(search_activity(&blocks).len(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// One retrieved web search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

impl SearchHit {
    pub fn new(title: impl Into<String>, url: impl Into<String>, snippet: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            snippet: snippet.into(),
        }
    }
}

/// A single block of content within a primary response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBlock {
    /// Generated text
    Text(String),
    /// The model invoked web search with this query
    SearchQuery(String),
    /// Results returned for a web search invocation
    SearchResults(Vec<SearchHit>),
    /// Any other block type, kept only by name
    Other(String),
}

impl ResponseBlock {
    /// Returns the text if this is a `Text` block.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseBlock::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// One entry of search activity, in emission order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchActivity {
    /// A search invocation
    Query { query: String },
    /// A retrieved result
    Result {
        title: String,
        url: String,
        snippet: String,
    },
}

impl SearchActivity {
    /// `(title, url)` when this entry is a retrieved result
    pub fn as_source(&self) -> Option<(&str, &str)> {
        match self {
            SearchActivity::Result { title, url, .. } => Some((title, url)),
            SearchActivity::Query { .. } => None,
        }
    }
}

/// Concatenate all text blocks, ignoring everything else
pub fn text_content(blocks: &[ResponseBlock]) -> String {
    blocks.iter().filter_map(ResponseBlock::as_text).collect()
}

/// Flatten search invocations and results, preserving order
pub fn search_activity(blocks: &[ResponseBlock]) -> Vec<SearchActivity> {
    let mut activity = Vec::new();
    for block in blocks {
        match block {
            ResponseBlock::SearchQuery(query) => activity.push(SearchActivity::Query {
                query: query.clone(),
            }),
            ResponseBlock::SearchResults(hits) => {
                activity.extend(hits.iter().map(|hit| SearchActivity::Result {
                    title: hit.title.clone(),
                    url: hit.url.clone(),
                    snippet: hit.snippet.clone(),
                }));
            }
            ResponseBlock::Text(_) | ResponseBlock::Other(_) => {}
        }
    }
    activity
}
