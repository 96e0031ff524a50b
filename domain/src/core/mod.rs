//! Core domain concepts shared across all subdomains.
//!
//! - [`provider::PrimaryProvider`] — the fixed, ordered primary providers
//! - [`prompt::Prompt`] — a resolved, non-empty prompt
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod prompt;
pub mod provider;
