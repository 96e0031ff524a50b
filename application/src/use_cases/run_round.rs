//! Run Round use case
//!
//! Sends one prompt to every enabled primary provider concurrently, then
//! optionally asks the comparison provider to contrast the answers.
//!
//! A round never fails as a whole: every provider outcome, including a
//! panicking task, ends up as a result value in the [`RoundRecord`].

use crate::config::RoundConfig;
use crate::ports::llm_gateway::{ComparisonGateway, PrimaryGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::call_provider::{call_comparison, call_primary};
use chrono::Utc;
use futures::FutureExt;
use std::any::Any;
use std::collections::BTreeMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use suite_domain::{
    ComparisonResult, EnablementFlags, PrimaryProvider, Prompt, ProviderResult, RoundRecord,
};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Input for the RunRound use case
#[derive(Debug, Clone)]
pub struct RunRoundInput {
    /// The resolved prompt
    pub prompt: Prompt,
    /// Providers taking part
    pub flags: EnablementFlags,
}

impl RunRoundInput {
    pub fn new(prompt: Prompt, flags: EnablementFlags) -> Self {
        Self { prompt, flags }
    }
}

/// Use case for running one round
pub struct RunRoundUseCase<P: PrimaryGateway + 'static, C: ComparisonGateway + 'static> {
    primary: Arc<P>,
    comparison: Option<Arc<C>>,
    config: Arc<RoundConfig>,
}

impl<P: PrimaryGateway + 'static, C: ComparisonGateway + 'static> RunRoundUseCase<P, C> {
    pub fn new(primary: Arc<P>, comparison: Option<Arc<C>>, config: RoundConfig) -> Self {
        Self {
            primary,
            comparison,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunRoundInput) -> RoundRecord {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunRoundInput,
        progress: &dyn ProgressNotifier,
    ) -> RoundRecord {
        let timestamp = Utc::now();
        let providers = input.flags.enabled_primaries();
        info!(
            "Starting round with {} primary provider(s), flags {}",
            providers.len(),
            input.flags
        );

        let results = self.phase_primary(&input, &providers, progress).await;

        let comparison = match (input.flags.comparison, &self.config.comparison, &self.comparison) {
            (true, Some(params), Some(gateway)) => {
                progress.on_comparison_start(&params.model);
                let call = call_comparison(
                    gateway.as_ref(),
                    params,
                    input.prompt.content(),
                    &results,
                    self.config.timeouts.comparison,
                );
                let outcome = AssertUnwindSafe(call).catch_unwind().await;
                let result = outcome.unwrap_or_else(|payload| {
                    let message = panic_message(payload.as_ref());
                    warn!("Comparison call panicked: {}", message);
                    ComparisonResult::failure(format!("comparison task panicked: {}", message))
                });
                progress.on_comparison_complete(&params.model, &result);
                Some(result)
            }
            (true, _, _) => {
                debug!("Comparison enabled but not configured, skipping");
                None
            }
            (false, _, _) => None,
        };

        RoundRecord {
            timestamp,
            prompt: input.prompt,
            flags: input.flags,
            config: self.config.generation.snapshot(),
            results,
            comparison,
        }
    }

    /// Query all enabled primary providers in parallel
    async fn phase_primary(
        &self,
        input: &RunRoundInput,
        providers: &[PrimaryProvider],
        progress: &dyn ProgressNotifier,
    ) -> BTreeMap<PrimaryProvider, ProviderResult> {
        let mut join_set = JoinSet::new();

        for &provider in providers {
            let gateway = Arc::clone(&self.primary);
            let config = Arc::clone(&self.config);
            let prompt = input.prompt.content().to_string();

            progress.on_provider_start(provider);
            join_set.spawn(async move {
                let model_id = config.models.model_for(provider).to_string();
                let call = call_primary(
                    gateway.as_ref(),
                    provider,
                    &model_id,
                    &prompt,
                    &config.generation,
                    config.timeouts.primary,
                );
                let outcome = AssertUnwindSafe(call).catch_unwind().await;
                let result = outcome.unwrap_or_else(|payload| {
                    ProviderResult::failure(
                        provider,
                        model_id.as_str(),
                        format!("provider task panicked: {}", panic_message(payload.as_ref())),
                    )
                });
                (provider, result)
            });
        }

        let mut results = BTreeMap::new();

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((provider, result)) => {
                    if result.is_success() {
                        info!("Provider {} responded successfully", provider);
                    }
                    progress.on_provider_complete(provider, &result);
                    results.insert(provider, result);
                }
                Err(e) => {
                    warn!("Task join error: {}", e);
                }
            }
        }

        // Any provider whose task vanished still gets an entry.
        for &provider in providers {
            if !results.contains_key(&provider) {
                let result = ProviderResult::failure(
                    provider,
                    self.config.models.model_for(provider),
                    "provider task did not complete",
                );
                progress.on_provider_complete(provider, &result);
                results.insert(provider, result);
            }
        }

        results
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
