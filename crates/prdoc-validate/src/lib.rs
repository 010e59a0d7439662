pub mod diagnostics;
pub mod validate;

pub use diagnostics::{DiagnosticCode, Severity, ValidationDiagnostic, ValidationError};
pub use validate::{
    ValidateOptions,
    is_valid_crate_name,
    validate_record,
    validate_record_with_diagnostics,
    validate_record_with_options,
};
