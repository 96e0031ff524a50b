//! Progress notification port
//!
//! Defines the human-readable status channel of a round. Every callback has
//! a default that renders a message and forwards it to [`ProgressNotifier::status`],
//! so an implementation only decides where lines go.

use crate::ports::attachment::AttachmentError;
use suite_domain::{
    Attachment, COMPARISON_PROVIDER, ComparisonResult, FlagExtraction, PrimaryProvider,
    ProviderResult,
};
use std::path::Path;

/// Callback for status updates during a round
///
/// Implementations live in the presentation layer (console, tests, ...).
pub trait ProgressNotifier: Send + Sync {
    /// Emit one status line
    fn status(&self, message: &str);

    /// Called once the flags of a round are known
    fn on_flags_resolved(&self, extraction: &FlagExtraction) {
        self.status(&extraction.status_line());
    }

    /// Called when a file reference was expanded
    fn on_attachment_loaded(&self, attachment: &Attachment) {
        self.status(&format!(
            "attached {} ({} chars)",
            attachment.path,
            attachment.char_count()
        ));
    }

    /// Called when a file reference was left in place
    fn on_attachment_skipped(&self, error: &AttachmentError) {
        self.status(&error.to_string());
    }

    /// Called right before a primary request is sent
    fn on_provider_start(&self, provider: PrimaryProvider) {
        self.status(&format!("{} — sending request...", provider));
    }

    /// Called as each primary provider completes, in completion order
    fn on_provider_complete(&self, provider: PrimaryProvider, result: &ProviderResult) {
        match result {
            ProviderResult::Success(s) => self.status(&format!(
                "{} — done ({} tok, {:.1}s)",
                provider, s.output_tokens, s.latency_seconds
            )),
            ProviderResult::Failure(f) => {
                self.status(&format!("{} — ERROR: {}", provider, f.error))
            }
        }
    }

    /// Called right before the comparison request is sent
    fn on_comparison_start(&self, model: &str) {
        self.status(&format!(
            "{} ({}) — sending comparison request...",
            COMPARISON_PROVIDER, model
        ));
    }

    /// Called when the comparison call finished
    fn on_comparison_complete(&self, model: &str, result: &ComparisonResult) {
        match result {
            ComparisonResult::Success(s) => self.status(&format!(
                "{} ({}) — done ({:.1}s)",
                COMPARISON_PROVIDER, model, s.latency_seconds
            )),
            ComparisonResult::Failure(f) => {
                self.status(&format!("{} — ERROR: {}", COMPARISON_PROVIDER, f.error))
            }
        }
    }

    /// Called for each artifact written
    fn on_artifact_saved(&self, path: &Path) {
        self.status(&format!("saved {}", path.display()));
    }
}

/// No-op progress notifier for when status output is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn status(&self, _message: &str) {}
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Collects status lines for assertions
    #[derive(Default)]
    pub struct RecordingProgress {
        pub lines: Mutex<Vec<String>>,
    }

    impl RecordingProgress {
        pub fn lines(&self) -> Vec<String> {
            self.lines.lock().unwrap().clone()
        }
    }

    impl ProgressNotifier for RecordingProgress {
        fn status(&self, message: &str) {
            self.lines.lock().unwrap().push(message.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingProgress;
    use super::*;
    use suite_domain::{ComparisonSuccess, ProviderSuccess};

    #[test]
    fn test_provider_lines() {
        let progress = RecordingProgress::default();
        progress.on_provider_start(PrimaryProvider::Opus);
        progress.on_provider_complete(
            PrimaryProvider::Opus,
            &ProviderResult::Success(ProviderSuccess {
                model: "m".to_string(),
                model_id_requested: "m".to_string(),
                input_tokens: 5,
                output_tokens: 120,
                stop_reason: None,
                latency_seconds: 2.26,
                response_text: String::new(),
                search_results: vec![],
            }),
        );
        progress.on_provider_complete(
            PrimaryProvider::Haiku,
            &ProviderResult::failure(PrimaryProvider::Haiku, "m", "HTTP 500: oops"),
        );

        assert_eq!(
            progress.lines(),
            vec![
                "opus — sending request...",
                "opus — done (120 tok, 2.3s)",
                "haiku — ERROR: HTTP 500: oops",
            ]
        );
    }

    #[test]
    fn test_comparison_lines() {
        let progress = RecordingProgress::default();
        progress.on_comparison_start("llama3");
        progress.on_comparison_complete(
            "llama3",
            &ComparisonResult::Success(ComparisonSuccess {
                model: "llama3".to_string(),
                response_text: String::new(),
                eval_count: None,
                total_duration_ns: None,
                latency_seconds: 12.0,
            }),
        );
        progress.on_comparison_complete("llama3", &ComparisonResult::failure("refused"));

        assert_eq!(
            progress.lines(),
            vec![
                "ollama (llama3) — sending comparison request...",
                "ollama (llama3) — done (12.0s)",
                "ollama — ERROR: refused",
            ]
        );
    }
}
