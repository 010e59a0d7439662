//! Embedded JSON Schema for PRDoc records.

use jsonschema::Validator;
use once_cell::sync::Lazy;
use serde_json::Value;

/// Raw schema text, as shipped under `schemas/`.
pub const PRDOC_SCHEMA_JSON: &str = include_str!("../../../schemas/prdoc.v1.schema.json");

static PRDOC_SCHEMA: Lazy<Result<Validator, String>> = Lazy::new(|| {
    let schema_json: Value = serde_json::from_str(PRDOC_SCHEMA_JSON)
        .map_err(|e| format!("invalid prdoc schema JSON: {e}"))?;

    Validator::new(&schema_json).map_err(|e| format!("compile prdoc schema: {e}"))
});

/// Check a parsed value against the schema.
///
/// Returns every violation message, in validator order. An empty vector means
/// the value conforms.
pub fn schema_errors(instance: &Value) -> Result<Vec<String>, String> {
    let validator = PRDOC_SCHEMA.as_ref().map_err(Clone::clone)?;
    Ok(validator.iter_errors(instance).map(|e| e.to_string()).collect())
}
