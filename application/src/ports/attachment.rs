//! Attachment loader port
//!
//! Reads the files named by `@path` references in a prompt.

use suite_domain::{Attachment, FileReference};
use thiserror::Error;

/// Why a file reference could not be expanded
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttachmentError {
    #[error("file not found: {0}")]
    NotFound(String),

    #[error("could not read {path}: {reason}")]
    Unreadable { path: String, reason: String },
}

/// Loads file content for a reference
pub trait AttachmentLoader: Send + Sync {
    fn load(&self, reference: &FileReference) -> Result<Attachment, AttachmentError>;
}
