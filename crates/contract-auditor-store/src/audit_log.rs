use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use contract_auditor_core::{AnalysisResult, AuditEntry};
use tracing::{info, warn};

use crate::error::StoreError;

/// Collision suffixes tried before giving up on a name.
const MAX_NAME_SUFFIX: usize = 1000;

/// Directory of JSON audit entries, one file per recorded analysis.
#[derive(Debug, Clone)]
pub struct AuditLog {
    dir: PathBuf,
}

impl AuditLog {
    /// Open (and create if needed) the log directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist a summary of `result`; returns the written file's path.
    ///
    /// Names are `<stem>_<YYYYmmdd_HHMMSS>.json`; a second entry for the same
    /// stem within one second gets a `_<n>` suffix instead of overwriting.
    pub fn record(&self, result: &AnalysisResult) -> Result<PathBuf, StoreError> {
        let entry = AuditEntry::from_result(result);
        let json = serde_json::to_string_pretty(&entry)?;
        let base = format!(
            "{}_{}",
            entry_stem(&result.filename),
            Local::now().format("%Y%m%d_%H%M%S")
        );

        let (path, mut file) = self.create_unique(&base)?;
        file.write_all(json.as_bytes())
            .map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;
        info!(path = %path.display(), "recorded audit entry");
        Ok(path)
    }

    fn create_unique(&self, base: &str) -> Result<(PathBuf, File), StoreError> {
        for n in 0..MAX_NAME_SUFFIX {
            let name = match n {
                0 => format!("{base}.json"),
                n => format!("{base}_{n}.json"),
            };
            let path = self.dir.join(name);
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => return Ok((path, file)),
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => continue,
                Err(source) => return Err(StoreError::Io { path, source }),
            }
        }
        Err(StoreError::Io {
            path: self.dir.join(format!("{base}.json")),
            source: std::io::ErrorKind::AlreadyExists.into(),
        })
    }

    /// Most recent entries first, by file name, at most `limit`.
    pub fn recent(&self, limit: usize) -> Result<Vec<AuditEntry>, StoreError> {
        let read_dir = match std::fs::read_dir(&self.dir) {
            Ok(rd) => rd,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.dir.clone(),
                    source,
                });
            }
        };

        let mut paths: Vec<PathBuf> = read_dir
            .filter_map(Result::ok)
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort_by(|a, b| b.file_name().cmp(&a.file_name()));

        let entries = paths
            .iter()
            .filter_map(|path| match read_entry(path) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(path = %path.display(), "skipping unreadable audit entry: {e}");
                    None
                }
            })
            .take(limit)
            .collect();
        Ok(entries)
    }
}

fn read_entry(path: &Path) -> Result<AuditEntry, StoreError> {
    let raw = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&raw)?)
}

/// File stem of the analysed document, spaces replaced by underscores.
fn entry_stem(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().replace(' ', "_"))
        .unwrap_or_else(|| "contract".to_string())
}
