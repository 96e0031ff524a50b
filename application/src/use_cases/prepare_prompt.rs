//! Prepare Prompt use case
//!
//! Turns raw user input into a [`PreparedPrompt`]: strips the inline flag
//! directive, expands `@file` references and validates what is left.

use crate::ports::attachment::AttachmentLoader;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use suite_domain::prompt::expand_file_references;
use suite_domain::{DomainError, EnablementFlags, FlagExtraction, Prompt, extract_flags};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while preparing a prompt
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreparePromptError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// A prompt ready to be sent, with the flags of its round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedPrompt {
    pub prompt: Prompt,
    pub flags: EnablementFlags,
    pub extraction: FlagExtraction,
}

/// Use case for resolving flags and attachments of a raw prompt
pub struct PreparePromptUseCase<L: AttachmentLoader> {
    loader: L,
}

impl<L: AttachmentLoader> PreparePromptUseCase<L> {
    pub fn new(loader: L) -> Self {
        Self { loader }
    }

    /// Execute the use case with default (no-op) progress
    pub fn execute(
        &self,
        raw: &str,
        default_flags: &str,
    ) -> Result<PreparedPrompt, PreparePromptError> {
        self.execute_with_progress(raw, default_flags, &NoProgress)
    }

    /// Execute the use case, reporting flags and attachments
    pub fn execute_with_progress(
        &self,
        raw: &str,
        default_flags: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<PreparedPrompt, PreparePromptError> {
        let extraction = extract_flags(raw, default_flags)?;
        progress.on_flags_resolved(&extraction);
        debug!("Resolved flags {} ({:?})", extraction.flags, extraction.source);

        let text = expand_file_references(&extraction.text, |reference| {
            match self.loader.load(reference) {
                Ok(attachment) => {
                    progress.on_attachment_loaded(&attachment);
                    Some(attachment)
                }
                Err(e) => {
                    warn!("Leaving {} unexpanded: {}", reference.token, e);
                    progress.on_attachment_skipped(&e);
                    None
                }
            }
        });

        let prompt = Prompt::try_new(text)?;

        Ok(PreparedPrompt {
            prompt,
            flags: extraction.flags,
            extraction,
        })
    }
}
