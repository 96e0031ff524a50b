//! File reference extraction and expansion.
//!
//! `@path/to/file` tokens in a prompt are replaced by the file's content,
//! wrapped in `--- FILE: name ---` / `--- END FILE ---` markers. Detection and
//! splicing live here; reading files is left to an adapter.

use regex::Regex;
use std::sync::OnceLock;

fn reference_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"@(\S+)").expect("file reference pattern is valid"))
}

/// An `@path` token found in prompt text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReference {
    /// The token as written, including `@`
    pub token: String,
    /// The path part, unexpanded (may start with `~`)
    pub path: String,
}

/// A file that was read for a reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Resolved path, for status output
    pub path: String,
    /// Final path component, used in the marker line
    pub file_name: String,
    pub content: String,
}

impl Attachment {
    /// Size in characters
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Inline block that replaces the reference token
    pub fn render(&self) -> String {
        format!(
            "\n--- FILE: {} ---\n{}\n--- END FILE ---\n",
            self.file_name, self.content
        )
    }
}

/// Replace each reference with the block returned by `load`.
///
/// References for which `load` returns `None` are left untouched.
pub fn expand_file_references<F>(text: &str, mut load: F) -> String
where
    F: FnMut(&FileReference) -> Option<Attachment>,
{
    reference_pattern()
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let reference = FileReference {
                token: caps[0].to_string(),
                path: caps[1].to_string(),
            };
            match load(&reference) {
                Some(attachment) => attachment.render(),
                None => reference.token,
            }
        })
        .into_owned()
}
