//! Local file system attachment loader
//!
//! Implements [`AttachmentLoader`] for `@path` references. A leading `~`
//! expands to the home directory; relative paths resolve against the
//! loader's base directory (the working directory by default).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use suite_application::{AttachmentError, AttachmentLoader};
use suite_domain::{Attachment, FileReference};
use tracing::debug;

/// Attachment loader that reads from the local file system.
#[derive(Debug, Clone, Default)]
pub struct LocalAttachmentLoader {
    base_dir: Option<PathBuf>,
}

impl LocalAttachmentLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative references against `base_dir`
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    /// Expand `~` and apply the base directory
    fn resolve(&self, raw: &str) -> PathBuf {
        let expanded = match raw.strip_prefix('~') {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => dirs::home_dir()
                .map(|home| home.join(rest.trim_start_matches('/')))
                .unwrap_or_else(|| PathBuf::from(raw)),
            _ => PathBuf::from(raw),
        };

        match &self.base_dir {
            Some(base) if expanded.is_relative() => base.join(expanded),
            _ => expanded,
        }
    }
}

impl AttachmentLoader for LocalAttachmentLoader {
    fn load(&self, reference: &FileReference) -> Result<Attachment, AttachmentError> {
        let path = self.resolve(&reference.path);
        let display = path.display().to_string();

        if !path.is_file() {
            return Err(AttachmentError::NotFound(display));
        }

        let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AttachmentError::NotFound(display.clone()),
            _ => AttachmentError::Unreadable {
                path: display.clone(),
                reason: e.to_string(),
            },
        })?;
        debug!("Read {} ({} bytes)", path.display(), content.len());

        Ok(Attachment {
            file_name: file_name(&path),
            path: display,
            content,
        })
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn reference(path: &str) -> FileReference {
        FileReference {
            token: format!("@{}", path),
            path: path.to_string(),
        }
    }

    #[test]
    fn test_load_relative_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/main.rs"), "fn main() {}").unwrap();

        let loader = LocalAttachmentLoader::with_base_dir(dir.path());
        let attachment = loader.load(&reference("src/main.rs")).unwrap();

        assert_eq!(attachment.file_name, "main.rs");
        assert_eq!(attachment.content, "fn main() {}");
        assert!(attachment.path.ends_with("main.rs"));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let loader = LocalAttachmentLoader::with_base_dir(dir.path());

        let err = loader.load(&reference("nope.txt")).unwrap_err();
        assert!(matches!(err, AttachmentError::NotFound(p) if p.ends_with("nope.txt")));
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = TempDir::new().unwrap();
        let loader = LocalAttachmentLoader::with_base_dir(dir.path());
        assert!(loader.load(&reference(".")).is_err());
    }

    #[test]
    fn test_tilde_expands_to_home() {
        let loader = LocalAttachmentLoader::new();
        if let Some(home) = dirs::home_dir() {
            assert_eq!(loader.resolve("~/notes.md"), home.join("notes.md"));
        }
        assert_eq!(loader.resolve("~user/x"), PathBuf::from("~user/x"));
    }
}
