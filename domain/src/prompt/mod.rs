//! Prompt domain
//!
//! Comparison prompt templates and `@file` reference handling.

pub mod attachment;
mod template;

pub use attachment::{Attachment, FileReference, expand_file_references};
pub use template::PromptTemplate;
