use std::collections::HashMap;

use prdoc_core::model::ChangeRecord;
use tracing::debug;

use crate::diagnostics::{DiagnosticCode, ValidationDiagnostic, ValidationError};

/// Longest accepted package name, matching the crates.io limit.
pub const MAX_CRATE_NAME_LEN: usize = 64;

/// Validator configuration options.
///
/// These options exist to make strictness trade-offs explicit and testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateOptions {
    /// Treat audiences outside the vocabulary as errors instead of warnings.
    pub strict_audience: bool,
    /// Additional audience labels accepted as known.
    pub extra_audiences: Vec<String>,
    /// Maximum title length in characters.
    pub max_title_len: usize,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            strict_audience: false,
            extra_audiences: Vec::new(),
            max_title_len: 120,
        }
    }
}

impl ValidateOptions {
    fn audience_is_known(&self, label: &str) -> bool {
        prdoc_audience::is_known(label) || self.extra_audiences.iter().any(|a| a == label)
    }
}

/// Validate a record with default options. Returns the first error message.
pub fn validate_record(record: &ChangeRecord) -> Result<(), String> {
    validate_record_with_options(record, &ValidateOptions::default())
}

/// Validate a record with configurable options. Returns the first error message.
pub fn validate_record_with_options(
    record: &ChangeRecord,
    opts: &ValidateOptions,
) -> Result<(), String> {
    validate_record_with_diagnostics(record, opts)
        .map(|_| ())
        .map_err(|e| e.legacy_message())
}

/// Validate a record and return structured diagnostics.
///
/// Rules:
/// - `crates` must be non-empty, names must be valid and unique
/// - title must be a single non-empty line within `max_title_len`
/// - audiences should come from the known vocabulary
///
/// On success the returned vector holds the warnings (possibly empty). On
/// failure every error is reported, followed by the warnings.
pub fn validate_record_with_diagnostics(
    record: &ChangeRecord,
    opts: &ValidateOptions,
) -> Result<Vec<ValidationDiagnostic>, ValidationError> {
    let mut diags = Vec::new();

    check_title(&record.title, opts, &mut diags);
    check_doc(record, opts, &mut diags);
    check_crates(record, &mut diags);

    debug!(
        title = %record.title,
        diagnostics = diags.len(),
        "validated record"
    );

    if diags.iter().any(|d| d.is_error()) {
        // Errors first, warnings after; order within each group is preserved.
        diags.sort_by_key(|d| !d.is_error());
        return Err(ValidationError { diagnostics: diags });
    }
    Ok(diags)
}

fn check_title(title: &str, opts: &ValidateOptions, diags: &mut Vec<ValidationDiagnostic>) {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        diags.push(ValidationDiagnostic::error(
            DiagnosticCode::TitleEmpty,
            "title",
            "title is empty",
        ));
        return;
    }
    if trimmed.contains(['\n', '\r']) {
        diags.push(ValidationDiagnostic::error(
            DiagnosticCode::TitleMultiline,
            "title",
            "title spans multiple lines",
        ));
    }
    let len = trimmed.chars().count();
    if len > opts.max_title_len {
        diags.push(ValidationDiagnostic::error(
            DiagnosticCode::TitleTooLong,
            "title",
            format!("title is too long ({len} > {} chars)", opts.max_title_len),
        ));
    }
}

fn check_doc(record: &ChangeRecord, opts: &ValidateOptions, diags: &mut Vec<ValidationDiagnostic>) {
    if record.doc.is_empty() {
        diags.push(ValidationDiagnostic::warning(
            DiagnosticCode::DocEmpty,
            "doc",
            "doc has no entries",
        ));
    }

    for (i, entry) in record.doc.iter().enumerate() {
        let labels = entry.audience.labels();
        if labels.is_empty() {
            diags.push(ValidationDiagnostic::error(
                DiagnosticCode::AudienceEmpty,
                format!("doc[{i}].audience"),
                format!("doc[{i}] audience list is empty"),
            ));
        }

        for label in labels {
            if opts.audience_is_known(label) {
                continue;
            }
            let message = format!(
                "doc[{i}] unknown audience '{label}' (known: {})",
                prdoc_audience::known_labels().join(", ")
            );
            let path = format!("doc[{i}].audience");
            diags.push(if opts.strict_audience {
                ValidationDiagnostic::error(DiagnosticCode::UnknownAudience, path, message)
            } else {
                ValidationDiagnostic::warning(DiagnosticCode::UnknownAudience, path, message)
            });
        }

        if entry.description.trim().is_empty() {
            diags.push(ValidationDiagnostic::warning(
                DiagnosticCode::DescriptionEmpty,
                format!("doc[{i}].description"),
                format!("doc[{i}] description is empty"),
            ));
        }
    }
}

fn check_crates(record: &ChangeRecord, diags: &mut Vec<ValidationDiagnostic>) {
    if record.crates.is_empty() {
        diags.push(ValidationDiagnostic::error(
            DiagnosticCode::CratesEmpty,
            "crates",
            "crates is empty; a change must affect at least one crate",
        ));
        return;
    }

    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (i, entry) in record.crates.iter().enumerate() {
        let name = entry.name.as_str();
        if name.trim().is_empty() {
            diags.push(ValidationDiagnostic::error(
                DiagnosticCode::CrateNameEmpty,
                format!("crates[{i}].name"),
                format!("crates[{i}] name is empty"),
            ));
            continue;
        }
        if !is_valid_crate_name(name) {
            diags.push(ValidationDiagnostic::error(
                DiagnosticCode::CrateNameInvalid,
                format!("crates[{i}].name"),
                format!("crates[{i}] invalid crate name '{name}'"),
            ));
        }
        match seen.get(name) {
            Some(first) => diags.push(ValidationDiagnostic::error(
                DiagnosticCode::DuplicateCrate,
                format!("crates[{i}].name"),
                format!("crates[{i}] duplicates crate '{name}' from crates[{first}]"),
            )),
            None => {
                seen.insert(name, i);
            }
        }
    }
}

/// Package name rule: ASCII alphanumerics, `-` or `_`, starting with a letter.
pub fn is_valid_crate_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_alphabetic()
        && name.len() <= MAX_CRATE_NAME_LEN
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
