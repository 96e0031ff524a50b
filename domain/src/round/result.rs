//! Per-provider outcomes of a round.
//!
//! Failures are data: a provider that could not answer yields a `Failure`
//! variant rather than an error value, so one provider's outcome never
//! affects how its siblings are collected.
//!
//! - [`ProviderResult`] - a primary provider's success or failure
//! - [`ComparisonResult`] - the comparison provider's success or failure

use crate::core::provider::PrimaryProvider;
use crate::round::content::SearchActivity;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Wall-clock latency in seconds, rounded to milliseconds
pub fn latency_seconds(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 1000.0).round() / 1000.0
}

/// Normalized successful primary response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderSuccess {
    /// Model name reported by the backend
    pub model: String,
    /// Model identifier that was requested
    pub model_id_requested: String,
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub stop_reason: Option<String>,
    pub latency_seconds: f64,
    pub response_text: String,
    #[serde(default)]
    pub search_results: Vec<SearchActivity>,
}

/// A primary provider that failed to answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderFailure {
    pub provider: PrimaryProvider,
    pub model_id_requested: String,
    pub error: String,
}

/// Outcome of one primary provider call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProviderResult {
    Success(ProviderSuccess),
    Failure(ProviderFailure),
}

impl ProviderResult {
    /// Creates a failed result for `provider`.
    pub fn failure(
        provider: PrimaryProvider,
        model_id_requested: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        ProviderResult::Failure(ProviderFailure {
            provider,
            model_id_requested: model_id_requested.into(),
            error: error.into(),
        })
    }

    /// Returns `true` if the provider answered.
    pub fn is_success(&self) -> bool {
        matches!(self, ProviderResult::Success(_))
    }

    pub fn as_success(&self) -> Option<&ProviderSuccess> {
        match self {
            ProviderResult::Success(s) => Some(s),
            ProviderResult::Failure(_) => None,
        }
    }

    /// Error description if this is a failure
    pub fn error(&self) -> Option<&str> {
        match self {
            ProviderResult::Success(_) => None,
            ProviderResult::Failure(f) => Some(&f.error),
        }
    }

    pub fn model_id_requested(&self) -> &str {
        match self {
            ProviderResult::Success(s) => &s.model_id_requested,
            ProviderResult::Failure(f) => &f.model_id_requested,
        }
    }
}

/// Successful comparison response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSuccess {
    pub model: String,
    pub response_text: String,
    /// Tokens evaluated, when the backend reports it
    pub eval_count: Option<u64>,
    /// Backend-reported total duration in nanoseconds
    pub total_duration_ns: Option<u64>,
    pub latency_seconds: f64,
}

/// Comparison call that failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonFailure {
    pub error: String,
}

/// Outcome of the comparison call.
///
/// A round that skipped the comparison stores no `ComparisonResult` at all;
/// `Failure` means the call was attempted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ComparisonResult {
    Success(ComparisonSuccess),
    Failure(ComparisonFailure),
}

impl ComparisonResult {
    pub fn failure(error: impl Into<String>) -> Self {
        ComparisonResult::Failure(ComparisonFailure {
            error: error.into(),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ComparisonResult::Success(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ComparisonResult::Success(_) => None,
            ComparisonResult::Failure(f) => Some(&f.error),
        }
    }
}
