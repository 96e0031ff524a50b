//! Publish Round use case
//!
//! Renders a finished round, writes its artifacts and optionally hands the
//! report to a viewer.

use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::round_store::{
    PersistenceError, ReportRenderer, ReportViewer, RoundStore, SavedRound,
};
use suite_domain::RoundRecord;
use tracing::info;

/// Use case for persisting a round and showing its report
pub struct PublishRoundUseCase<R: ReportRenderer, S: RoundStore, V: ReportViewer> {
    renderer: R,
    store: S,
    viewer: V,
    open_report: bool,
}

impl<R: ReportRenderer, S: RoundStore, V: ReportViewer> PublishRoundUseCase<R, S, V> {
    pub fn new(renderer: R, store: S, viewer: V) -> Self {
        Self {
            renderer,
            store,
            viewer,
            open_report: true,
        }
    }

    pub fn with_open_report(mut self, open_report: bool) -> Self {
        self.open_report = open_report;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub fn execute(&self, record: &RoundRecord) -> Result<SavedRound, PersistenceError> {
        self.execute_with_progress(record, &NoProgress)
    }

    /// Execute the use case, reporting each saved artifact
    pub fn execute_with_progress(
        &self,
        record: &RoundRecord,
        progress: &dyn ProgressNotifier,
    ) -> Result<SavedRound, PersistenceError> {
        let report = self.renderer.render(record);
        let saved = self.store.persist(record, &report)?;

        info!("Round saved to {}", saved.record_path.display());
        progress.on_artifact_saved(&saved.record_path);
        progress.on_artifact_saved(&saved.report_path);

        if self.open_report {
            self.viewer.open(&saved);
        }
        Ok(saved)
    }
}
