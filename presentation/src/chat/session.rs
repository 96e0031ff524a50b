//! Session abstraction driven by the chat loop

use async_trait::async_trait;
use std::fmt::Display;
use std::path::PathBuf;
use suite_application::{PreparedPrompt, ProgressNotifier, SavedRound};
use suite_domain::RoundRecord;

/// A finished and persisted round
#[derive(Debug, Clone)]
pub struct RoundOutcome {
    pub record: RoundRecord,
    pub saved: SavedRound,
}

/// Everything the REPL needs from the wired application
///
/// The binary owns configuration and adapters; the REPL only sees this
/// surface.
#[async_trait]
pub trait ChatSession: Send {
    type Error: Display + Send;

    /// Resolve flags and attachments of a raw input line
    fn prepare(
        &self,
        raw: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<PreparedPrompt, Self::Error>;

    /// Run and publish one prepared round
    async fn run(
        &mut self,
        prepared: PreparedPrompt,
        progress: &dyn ProgressNotifier,
    ) -> Result<RoundOutcome, Self::Error>;

    /// Prepare, run and publish in one step
    async fn submit(
        &mut self,
        raw: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<RoundOutcome, Self::Error> {
        let prepared = self.prepare(raw, progress)?;
        self.run(prepared, progress).await
    }

    /// Effective settings as display pairs
    fn settings(&self) -> Vec<(String, String)>;

    /// Re-read configuration from disk
    fn reload(&mut self) -> Result<(), Self::Error>;

    /// Persist new default flags, returning the file written
    fn set_default_flags(&mut self, flags: &str) -> Result<PathBuf, Self::Error>;

    fn default_flags(&self) -> String;
}
