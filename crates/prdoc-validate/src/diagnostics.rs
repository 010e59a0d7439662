use serde::{Deserialize, Serialize};

/// Stable, machine-readable diagnostic codes for record validation.
///
/// These codes are intended for programmatic handling (CI, bots, editors),
/// while `message` remains human-oriented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticCode {
    TitleEmpty,
    TitleMultiline,
    TitleTooLong,
    DocEmpty,
    AudienceEmpty,
    /// Audience label outside the known vocabulary.
    UnknownAudience,
    DescriptionEmpty,
    CratesEmpty,
    CrateNameEmpty,
    /// Not a valid package name.
    CrateNameInvalid,
    /// The same crate appears more than once in one record.
    DuplicateCrate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// A single validation diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationDiagnostic {
    pub code: DiagnosticCode,
    pub severity: Severity,
    /// JSON-ish path such as `title`, `doc[1].audience`, `crates[0].name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub message: String,
}

impl ValidationDiagnostic {
    pub fn error(code: DiagnosticCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { code, severity: Severity::Error, path: Some(path.into()), message: message.into() }
    }

    pub fn warning(code: DiagnosticCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { code, severity: Severity::Warning, path: Some(path.into()), message: message.into() }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Structured error wrapper for validation failures.
///
/// Holds every error diagnostic found (the validator does not stop at the
/// first one) followed by any warnings raised along the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationError {
    pub fn single(diag: ValidationDiagnostic) -> Self {
        Self { diagnostics: vec![diag] }
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationDiagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    /// Short string form used by callers that only want one line.
    ///
    /// This returns the first error's message (or a generic fallback).
    pub fn legacy_message(&self) -> String {
        self.errors()
            .next()
            .map(|d| d.message.clone())
            .unwrap_or_else(|| "validation failed".to_string())
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.legacy_message())
    }
}

impl std::error::Error for ValidationError {}
