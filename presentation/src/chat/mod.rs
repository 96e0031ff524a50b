//! Interactive chat module
//!
//! Provides a readline-based loop that runs one round per prompt.

mod repl;
mod session;

pub use repl::ChatRepl;
pub use session::{ChatSession, RoundOutcome};
