//! Domain layer for model-suite
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Round
//!
//! A round sends one prompt to every enabled primary provider in parallel,
//! then optionally asks a comparison provider to contrast the answers:
//!
//! - **Primary providers**: `opus`, `sonnet`, `haiku` (canonical order)
//! - **Comparison provider**: `ollama`, fed the collected primary results
//!
//! ## Flags
//!
//! [`EnablementFlags`] select the providers of a round and round-trip through
//! a compact `+`/`-` string (`++-+`).

pub mod core;
pub mod flags;
pub mod generation;
pub mod prompt;
pub mod round;

// Re-export commonly used types
pub use crate::core::{
    error::DomainError,
    prompt::Prompt,
    provider::{COMPARISON_PROVIDER, PrimaryProvider},
};
pub use flags::{
    directive::{FlagExtraction, FlagSource, extract_flags},
    enablement::EnablementFlags,
};
pub use generation::{
    comparison::ComparisonParams,
    models::PrimaryModels,
    params::{GenerationParams, GenerationSnapshot},
};
pub use prompt::{Attachment, FileReference, PromptTemplate};
pub use round::{
    content::{ResponseBlock, SearchActivity, SearchHit},
    record::RoundRecord,
    result::{
        ComparisonFailure, ComparisonResult, ComparisonSuccess, ProviderFailure, ProviderResult,
        ProviderSuccess, latency_seconds,
    },
};
