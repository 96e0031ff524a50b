//! Round persistence ports
//!
//! A finished round is written as two artifacts sharing one basename: the
//! machine-readable record and a rendered report.

use suite_domain::RoundRecord;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while persisting a round
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize round: {0}")]
    Serialize(String),
}

/// Paths of the artifacts written for one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedRound {
    pub record_path: PathBuf,
    pub report_path: PathBuf,
}

/// Renders a human-readable report for a round
pub trait ReportRenderer: Send + Sync {
    fn render(&self, record: &RoundRecord) -> String;
}

/// Writes round artifacts
pub trait RoundStore: Send + Sync {
    /// Write the record and the rendered report under one unique basename
    fn persist(&self, record: &RoundRecord, report: &str) -> Result<SavedRound, PersistenceError>;
}

/// Shows a saved report to the user
pub trait ReportViewer: Send + Sync {
    /// Best effort; failures are logged by the implementation, never raised
    fn open(&self, saved: &SavedRound);
}

/// Viewer that does nothing (`--no-open`, tests)
pub struct NoViewer;

impl ReportViewer for NoViewer {
    fn open(&self, _saved: &SavedRound) {}
}
