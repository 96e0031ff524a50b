//! Round outcomes.
//!
//! - [`content`] — response blocks and search activity extraction
//! - [`result`] — per-provider success/failure variants
//! - [`record::RoundRecord`] — the aggregated, persisted record of a round

pub mod content;
pub mod record;
pub mod result;
