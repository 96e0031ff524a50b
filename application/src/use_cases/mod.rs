//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod call_provider;
pub mod prepare_prompt;
pub mod publish_round;
pub mod run_round;
