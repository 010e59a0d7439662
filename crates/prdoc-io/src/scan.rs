//! Directory scanning for record files.

use std::fmt;
use std::path::{Path, PathBuf};

use prdoc_core::source::{RecordSource, pr_number_from_path};
use tracing::debug;

use crate::hashing::record_fingerprint;
use crate::record_yaml::{RecordParseError, parse_record_yaml_file};

/// Default record file extension.
pub const DEFAULT_EXTENSION: &str = "prdoc";

#[derive(Debug)]
pub struct ScanError {
    pub path: PathBuf,
    pub source: std::io::Error,
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot scan {}: {}", self.path.display(), self.source)
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// A file that could not be turned into a record.
#[derive(Debug)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub error: RecordParseError,
}

/// Outcome of loading a directory: good records and per-file failures.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub records: Vec<RecordSource>,
    pub failures: Vec<LoadFailure>,
}

/// List record files in `dir` (non-recursive) with the given extension.
///
/// Ordering: files with a PR number first, by number, then the rest by name.
pub fn scan_dir(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, ScanError> {
    let entries = std::fs::read_dir(dir).map_err(|source| ScanError {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ScanError { path: dir.to_path_buf(), source })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|e| e == extension) {
            files.push(path);
        }
    }

    files.sort_by_key(|p| {
        let pr = pr_number_from_path(p);
        (pr.is_none(), pr, p.file_name().map(|n| n.to_os_string()))
    });
    debug!(dir = %dir.display(), files = files.len(), "scanned record directory");
    Ok(files)
}

/// Parse one file into a [`RecordSource`].
pub fn load_file(path: &Path) -> Result<RecordSource, RecordParseError> {
    let record = parse_record_yaml_file(path)?;
    let fingerprint = record_fingerprint(&record).map_err(RecordParseError::InvalidRecordShape)?;
    Ok(RecordSource {
        path: path.to_path_buf(),
        pr: pr_number_from_path(path),
        fingerprint,
        record,
    })
}

/// Load every record file in `dir`. One bad file never hides the others.
pub fn load_dir(dir: &Path, extension: &str) -> Result<LoadReport, ScanError> {
    let mut report = LoadReport::default();
    for path in scan_dir(dir, extension)? {
        match load_file(&path) {
            Ok(source) => report.records.push(source),
            Err(error) => {
                debug!(path = %path.display(), %error, "skipping unreadable record");
                report.failures.push(LoadFailure { path, error });
            }
        }
    }
    Ok(report)
}
