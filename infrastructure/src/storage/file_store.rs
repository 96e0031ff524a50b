//! File-backed round store.
//!
//! Each round is written as `<slug>.json` and `<slug>.html` where the slug
//! is the local capture time (`%Y%m%d_%H%M%S_%3f`). A numeric suffix is
//! appended if a file with that basename already exists, so two rounds
//! never share artifacts.

use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use suite_application::{PersistenceError, RoundStore, SavedRound};
use suite_domain::RoundRecord;
use tracing::debug;

const MAX_SUFFIX: u32 = 1000;

/// Writes round artifacts under a single output directory
#[derive(Debug, Clone)]
pub struct FileRoundStore {
    output_dir: PathBuf,
}

impl FileRoundStore {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn slug(record: &RoundRecord) -> String {
        record
            .timestamp
            .with_timezone(&Local)
            .format("%Y%m%d_%H%M%S_%3f")
            .to_string()
    }

    /// Claim a basename by creating its JSON file exclusively
    fn claim(&self, slug: &str) -> Result<(File, PathBuf, PathBuf), PersistenceError> {
        for n in 0..MAX_SUFFIX {
            let base = if n == 0 {
                slug.to_string()
            } else {
                format!("{}_{}", slug, n)
            };
            let record_path = self.output_dir.join(format!("{}.json", base));
            let report_path = self.output_dir.join(format!("{}.html", base));
            if report_path.exists() {
                continue;
            }

            match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&record_path)
            {
                Ok(file) => return Ok((file, record_path, report_path)),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(source) => {
                    return Err(PersistenceError::Io {
                        path: record_path,
                        source,
                    });
                }
            }
        }

        Err(PersistenceError::Io {
            path: self.output_dir.join(format!("{}.json", slug)),
            source: std::io::Error::new(ErrorKind::AlreadyExists, "no free artifact name"),
        })
    }
}

impl RoundStore for FileRoundStore {
    fn persist(&self, record: &RoundRecord, report: &str) -> Result<SavedRound, PersistenceError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| PersistenceError::Io {
            path: self.output_dir.clone(),
            source,
        })?;

        let json = serde_json::to_string_pretty(record)
            .map_err(|e| PersistenceError::Serialize(e.to_string()))?;

        let (mut file, record_path, report_path) = self.claim(&Self::slug(record))?;
        file.write_all(json.as_bytes())
            .map_err(|source| PersistenceError::Io {
                path: record_path.clone(),
                source,
            })?;
        debug!("Wrote {}", record_path.display());

        fs::write(&report_path, report).map_err(|source| PersistenceError::Io {
            path: report_path.clone(),
            source,
        })?;
        debug!("Wrote {}", report_path.display());

        Ok(SavedRound {
            record_path,
            report_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeMap;
    use suite_domain::{
        EnablementFlags, GenerationParams, PrimaryProvider, Prompt, ProviderResult,
    };
    use tempfile::TempDir;

    fn record() -> RoundRecord {
        let mut results = BTreeMap::new();
        results.insert(
            PrimaryProvider::Opus,
            ProviderResult::failure(PrimaryProvider::Opus, "claude-opus-4-5", "HTTP 401: nope"),
        );
        RoundRecord {
            timestamp: Utc::now(),
            prompt: Prompt::new("hello"),
            flags: EnablementFlags::parse("+---").unwrap(),
            config: GenerationParams::default().snapshot(),
            results,
            comparison: None,
        }
    }

    #[test]
    fn test_persist_writes_both_artifacts() {
        let dir = TempDir::new().unwrap();
        let store = FileRoundStore::new(dir.path().join("outputs"));
        let record = record();

        let saved = store.persist(&record, "<html></html>").unwrap();

        assert_eq!(
            saved.record_path.file_stem(),
            saved.report_path.file_stem()
        );
        let json = fs::read_to_string(&saved.record_path).unwrap();
        let back: RoundRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
        assert_eq!(
            fs::read_to_string(&saved.report_path).unwrap(),
            "<html></html>"
        );
    }

    #[test]
    fn test_same_instant_gets_distinct_names() {
        let dir = TempDir::new().unwrap();
        let store = FileRoundStore::new(dir.path());
        let record = record();

        let first = store.persist(&record, "a").unwrap();
        let second = store.persist(&record, "b").unwrap();

        assert_ne!(first.record_path, second.record_path);
        assert_ne!(first.report_path, second.report_path);
        assert_eq!(fs::read_to_string(&first.report_path).unwrap(), "a");
    }

    #[test]
    fn test_unwritable_output_dir() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();
        let store = FileRoundStore::new(blocker.join("outputs"));

        let err = store.persist(&record(), "r").unwrap_err();
        assert!(matches!(err, PersistenceError::Io { .. }));
    }
}
