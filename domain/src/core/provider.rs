//! Provider identities
//!
//! The set of primary providers is fixed and ordered. The order is the
//! canonical order used for flag positions, comparison prompt sections and
//! report cards.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A primary provider queried in parallel during a round (Value Object)
///
/// Variants are declared in canonical order, so the derived `Ord` sorts
/// collections (e.g. `BTreeMap` keys) into display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimaryProvider {
    Opus,
    Sonnet,
    Haiku,
}

impl PrimaryProvider {
    /// All primary providers in canonical order
    pub const ALL: [PrimaryProvider; 3] = [
        PrimaryProvider::Opus,
        PrimaryProvider::Sonnet,
        PrimaryProvider::Haiku,
    ];

    /// Lowercase identifier used in config keys and flag labels
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimaryProvider::Opus => "opus",
            PrimaryProvider::Sonnet => "sonnet",
            PrimaryProvider::Haiku => "haiku",
        }
    }

    /// Capitalized name used in prose ("Opus, Sonnet")
    pub fn display_name(&self) -> &'static str {
        match self {
            PrimaryProvider::Opus => "Opus",
            PrimaryProvider::Sonnet => "Sonnet",
            PrimaryProvider::Haiku => "Haiku",
        }
    }

    /// Upper-case label used for section headers ("--- OPUS ---")
    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl std::fmt::Display for PrimaryProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PrimaryProvider {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "opus" => Ok(PrimaryProvider::Opus),
            "sonnet" => Ok(PrimaryProvider::Sonnet),
            "haiku" => Ok(PrimaryProvider::Haiku),
            other => Err(DomainError::UnknownProvider(other.to_string())),
        }
    }
}

/// Identifier of the single comparison provider
pub const COMPARISON_PROVIDER: &str = "ollama";
