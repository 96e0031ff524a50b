//! Application-level configuration.
//!
//! - [`RoundConfig`] - everything a round needs besides the prompt
//! - [`CallTimeouts`] - per-call time limits for each provider family

pub mod round_config;

pub use round_config::{CallTimeouts, RoundConfig};
