//! Request settings for a round.
//!
//! - [`params::GenerationParams`] — primary request sampling/tool settings
//! - [`comparison::ComparisonParams`] — comparison backend settings
//! - [`models::PrimaryModels`] — which backend model each provider uses

pub mod comparison;
pub mod models;
pub mod params;
