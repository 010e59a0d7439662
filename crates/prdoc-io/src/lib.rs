//! `prdoc-io` is the single supported public entrypoint for PRDoc records and
//! the deterministic helpers around them (parsing, schema conformance,
//! validation, fingerprints, aggregation and changelog rendering).
//!
//! This crate intentionally contains **no** git, forge or publishing logic.
//! Those belong in higher layers. `prdoc-io` focuses on:
//! - stable types
//! - YAML parsing with actionable errors
//! - canonical JSON and fingerprints
//! - validation / aggregation helpers

// -----------------------------------------------------------------------------
// Public API contract
// -----------------------------------------------------------------------------
//
// Consumers SHOULD import from `prdoc_io::prelude::*`.
// Anything not re-exported via the prelude is considered internal and may change
// without notice.

// Re-export the record model.
#[doc(hidden)]
pub mod core {
    pub use prdoc_core::model::{AudienceField, Bump, ChangeRecord, CrateEntry, DocEntry, ParseBumpError};
    pub use prdoc_core::source::{RecordSource, pr_number_from_path};
    pub use prdoc_core::text::canonicalize_text;
}

/// Audience vocabulary.
pub mod audience {
    pub use prdoc_audience::{ALL, Audience, is_known, known_labels};
}

/// Deterministic JSON canonicalization helpers.
pub mod canonical_json;

/// Content fingerprints.
pub mod hashing;

/// YAML parsing and serialization.
pub mod record_yaml;

/// Embedded JSON Schema.
pub mod schema;

/// Directory scanning and bulk loading.
pub mod scan;

// Re-export validation.
#[doc(hidden)]
pub mod validate {
    pub use prdoc_validate::{
        DiagnosticCode,
        Severity,
        ValidateOptions,
        ValidationDiagnostic,
        ValidationError,
        is_valid_crate_name,
        validate_record,
        validate_record_with_diagnostics,
        validate_record_with_options,
    };
}

// Re-export aggregation and rendering.
#[doc(hidden)]
pub mod changelog {
    pub use prdoc_changelog::serialize::{JsonStyle, plan_to_json};
    pub use prdoc_changelog::{
        ChangelogOptions,
        CratePlan,
        ReleasePlan,
        VersionOverflow,
        duplicate_records,
        next_version,
        render_markdown,
        render_plan_tsv,
    };
}

/// Convenience prelude for consumers.
///
/// This is the **only supported** import surface for external users.
pub mod prelude {
    pub use crate::changelog::{ChangelogOptions, CratePlan, ReleasePlan, VersionOverflow};
    pub use crate::core::{AudienceField, Bump, ChangeRecord, CrateEntry, DocEntry, RecordSource};
    pub use crate::record_yaml::{RecordParseError, parse_record_yaml_file, parse_record_yaml_str, to_yaml_string};
    pub use crate::scan::{LoadFailure, LoadReport, ScanError, load_dir, load_file, scan_dir};
    pub use crate::validate::{DiagnosticCode, Severity, ValidateOptions, ValidationDiagnostic, ValidationError};
    pub use crate::{canonical_json, hashing};
}
