//! Provider selection.
//!
//! - [`enablement::EnablementFlags`] — which providers run in a round
//! - [`directive::extract_flags`] — pull an inline `++-+` token out of a prompt

pub mod directive;
pub mod enablement;
