//! Parsing and serializing PRDoc records with actionable diagnostics.
//!
//! serde's default "missing field X" error is technically correct but rarely
//! tells an author what the record should look like. Parsing is therefore
//! staged: YAML syntax, required top-level fields, JSON Schema conformance,
//! and finally typed deserialization. Strictness is the same as plain serde;
//! only the messages improve.

use std::fmt;
use std::path::{Path, PathBuf};

use prdoc_core::model::ChangeRecord;
use serde::de::Error as _;
use serde_json::Value;
use tracing::debug;

use crate::schema::schema_errors;

pub const REQUIRED_TOP_LEVEL_FIELDS: &[&str] = &["title", "doc", "crates"];

/// A structured error for reading a PRDoc record.
#[derive(Debug)]
pub enum RecordParseError {
    /// The file could not be read.
    Io { path: PathBuf, source: std::io::Error },
    /// The input was not valid YAML.
    InvalidYaml(serde_yaml::Error),
    /// The YAML was valid, but required top-level fields are missing.
    MissingRequiredTopLevelFields {
        missing: Vec<&'static str>,
        required: Vec<&'static str>,
    },
    /// The YAML did not conform to the record schema.
    SchemaViolation(Vec<String>),
    /// Schema passed (or could not run) but the value did not fit the model.
    InvalidRecordShape(serde_json::Error),
}

impl RecordParseError {
    /// Stable machine-readable kind, used in diagnostics JSON.
    pub fn kind(&self) -> &'static str {
        match self {
            RecordParseError::Io { .. } => "io",
            RecordParseError::InvalidYaml(_) => "invalid_yaml",
            RecordParseError::MissingRequiredTopLevelFields { .. } => "missing_required_fields",
            RecordParseError::SchemaViolation(_) => "schema_violation",
            RecordParseError::InvalidRecordShape(_) => "invalid_record_shape",
        }
    }
}

impl fmt::Display for RecordParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordParseError::Io { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            RecordParseError::InvalidYaml(e) => {
                write!(f, "Invalid YAML: {e}")
            }
            RecordParseError::MissingRequiredTopLevelFields { missing, required } => {
                write!(
                    f,
                    "Invalid PRDoc: missing required top-level field(s): {}. Required top-level fields: {}.",
                    missing.join(", "),
                    required.join(", ")
                )
            }
            RecordParseError::SchemaViolation(messages) => {
                write!(f, "PRDoc does not match schema: {}", messages.join("; "))
            }
            RecordParseError::InvalidRecordShape(e) => {
                write!(
                    f,
                    "Invalid PRDoc shape: {e}. Required top-level fields: {}.",
                    REQUIRED_TOP_LEVEL_FIELDS.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for RecordParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecordParseError::Io { source, .. } => Some(source),
            RecordParseError::InvalidYaml(e) => Some(e),
            RecordParseError::InvalidRecordShape(e) => Some(e),
            RecordParseError::MissingRequiredTopLevelFields { .. } => None,
            RecordParseError::SchemaViolation(_) => None,
        }
    }
}

/// Parse a PRDoc record from YAML text.
pub fn parse_record_yaml_str(s: &str) -> Result<ChangeRecord, RecordParseError> {
    // A YAML mapping rejects repeated keys; a JSON map would keep the last one.
    let yaml: serde_yaml::Value = serde_yaml::from_str(s).map_err(RecordParseError::InvalidYaml)?;
    let v: Value = serde_json::to_value(&yaml).map_err(RecordParseError::InvalidRecordShape)?;
    let obj = v.as_object().ok_or_else(|| {
        RecordParseError::InvalidRecordShape(serde_json::Error::custom(
            "expected a YAML mapping at the top level",
        ))
    })?;

    let missing: Vec<&'static str> = REQUIRED_TOP_LEVEL_FIELDS
        .iter()
        .copied()
        .filter(|k| !obj.contains_key(*k))
        .collect();
    if !missing.is_empty() {
        return Err(RecordParseError::MissingRequiredTopLevelFields {
            missing,
            required: REQUIRED_TOP_LEVEL_FIELDS.to_vec(),
        });
    }

    match schema_errors(&v) {
        Ok(errors) if !errors.is_empty() => return Err(RecordParseError::SchemaViolation(errors)),
        Ok(_) => {}
        // The typed model is still strict; fall through to it.
        Err(e) => debug!(error = %e, "schema unavailable; relying on typed model"),
    }

    serde_json::from_value(v).map_err(RecordParseError::InvalidRecordShape)
}

/// Read and parse a PRDoc record file.
pub fn parse_record_yaml_file(path: &Path) -> Result<ChangeRecord, RecordParseError> {
    let s = std::fs::read_to_string(path).map_err(|source| RecordParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = s.len(), "parsing record");
    parse_record_yaml_str(&s)
}

/// Serialize a record as canonical YAML (field order: title, doc, crates).
pub fn to_yaml_string(record: &ChangeRecord) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(record)
}
