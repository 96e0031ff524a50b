//! Presentation layer for model-suite
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatRepl, ChatSession, RoundOutcome};
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use output::html::HtmlReportRenderer;
pub use progress::reporter::ConsoleProgress;
