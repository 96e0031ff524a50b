//! Single provider calls
//!
//! Each call performs one request, bounded by a timeout, and folds every
//! outcome (success, gateway error, timeout) into a result value. Nothing
//! here returns `Err`.

use crate::ports::llm_gateway::{
    ComparisonGateway, ComparisonRequest, GatewayError, PrimaryGateway, PrimaryRequest,
};
use suite_domain::round::content::{search_activity, text_content};
use suite_domain::{
    ComparisonParams, ComparisonResult, ComparisonSuccess, GenerationParams, PrimaryProvider,
    PromptTemplate, ProviderResult, ProviderSuccess, latency_seconds,
};
use std::collections::BTreeMap;
use std::time::Duration;
use tokio::time::{Instant, timeout};
use tracing::{debug, warn};

/// Send `prompt` to one primary provider.
///
/// Latency covers the whole request/response cycle. Search activity is
/// collected only when web search was requested.
pub async fn call_primary<G: PrimaryGateway + ?Sized>(
    gateway: &G,
    provider: PrimaryProvider,
    model_id: &str,
    prompt: &str,
    params: &GenerationParams,
    limit: Duration,
) -> ProviderResult {
    let request = PrimaryRequest {
        model: model_id.to_string(),
        prompt: prompt.to_string(),
        params: params.clone(),
    };

    debug!("Sending {} request (model {})", provider, model_id);
    let started = Instant::now();
    let outcome = match timeout(limit, gateway.send(&request)).await {
        Ok(result) => result,
        Err(_) => Err(GatewayError::Timeout(limit)),
    };
    let latency = latency_seconds(started.elapsed());

    match outcome {
        Ok(response) => {
            let search_results = if params.web_search {
                search_activity(&response.content)
            } else {
                Vec::new()
            };
            ProviderResult::Success(ProviderSuccess {
                model: response.model,
                model_id_requested: model_id.to_string(),
                input_tokens: response.input_tokens,
                output_tokens: response.output_tokens,
                stop_reason: response.stop_reason,
                latency_seconds: latency,
                response_text: text_content(&response.content),
                search_results,
            })
        }
        Err(e) => {
            warn!("{} failed after {:.1}s: {}", provider, latency, e);
            ProviderResult::failure(provider, model_id, e.to_string())
        }
    }
}

/// Ask the comparison backend to contrast the primary results.
pub async fn call_comparison<C: ComparisonGateway + ?Sized>(
    gateway: &C,
    params: &ComparisonParams,
    prompt: &str,
    results: &BTreeMap<PrimaryProvider, ProviderResult>,
    limit: Duration,
) -> ComparisonResult {
    let request = ComparisonRequest {
        params: params.clone(),
        prompt: PromptTemplate::comparison_prompt(prompt, results),
    };

    debug!("Sending comparison request (model {})", params.model);
    let started = Instant::now();
    let outcome = match timeout(limit, gateway.generate(&request)).await {
        Ok(result) => result,
        Err(_) => Err(GatewayError::Timeout(limit)),
    };
    let latency = latency_seconds(started.elapsed());

    match outcome {
        Ok(response) => ComparisonResult::Success(ComparisonSuccess {
            model: params.model.clone(),
            response_text: response.response_text,
            eval_count: response.eval_count,
            total_duration_ns: response.total_duration_ns,
            latency_seconds: latency,
        }),
        Err(e) => {
            warn!("Comparison failed after {:.1}s: {}", latency, e);
            ComparisonResult::failure(e.to_string())
        }
    }
}
