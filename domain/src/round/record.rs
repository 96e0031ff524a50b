//! Round record - the complete, immutable outcome of one round.

use crate::core::prompt::Prompt;
use crate::core::provider::PrimaryProvider;
use crate::flags::enablement::EnablementFlags;
use crate::generation::params::GenerationSnapshot;
use crate::round::result::{ComparisonResult, ProviderResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete result of a round
///
/// `results` holds an entry for every primary provider enabled in `flags`
/// and none for disabled ones. Keys iterate in canonical provider order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Capture instant
    pub timestamp: DateTime<Utc>,
    /// The resolved prompt
    pub prompt: Prompt,
    /// Flags used for the round
    #[serde(rename = "model_flags")]
    pub flags: EnablementFlags,
    /// Generation settings in effect
    pub config: GenerationSnapshot,
    pub results: BTreeMap<PrimaryProvider, ProviderResult>,
    /// Absent when the comparison provider was disabled or unconfigured
    pub comparison: Option<ComparisonResult>,
}

impl RoundRecord {
    /// Result for `provider`, if it took part
    pub fn result(&self, provider: PrimaryProvider) -> Option<&ProviderResult> {
        self.results.get(&provider)
    }

    /// Providers that answered, in canonical order
    pub fn succeeded(&self) -> impl Iterator<Item = PrimaryProvider> + '_ {
        self.results
            .iter()
            .filter(|(_, r)| r.is_success())
            .map(|(p, _)| *p)
    }

    /// Providers that failed, in canonical order
    pub fn failed(&self) -> impl Iterator<Item = PrimaryProvider> + '_ {
        self.results
            .iter()
            .filter(|(_, r)| !r.is_success())
            .map(|(p, _)| *p)
    }

    /// Check that the result map matches the enabled flags exactly
    pub fn covers_enabled_providers(&self) -> bool {
        PrimaryProvider::ALL
            .iter()
            .all(|p| self.flags.is_enabled(*p) == self.results.contains_key(p))
    }
}
