//! Content fingerprints for records.

use prdoc_core::model::ChangeRecord;
use prdoc_core::text::canonicalize_text;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::canonical_json::to_canonical_json_bytes;

/// SHA-256 digest, 64 lowercase hex chars.
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// SHA-256 over the canonical JSON form of `value`, so key order in the
/// source never changes the digest.
pub fn sha256_canonical_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    to_canonical_json_bytes(value).map(|bytes| sha256_hex(&bytes))
}

/// Fingerprint a record: `sha256:<hex>` over its canonical JSON.
///
/// Title and descriptions are canonicalized first, so line endings, trailing
/// whitespace and Unicode composition do not change the fingerprint.
pub fn record_fingerprint(record: &ChangeRecord) -> Result<String, serde_json::Error> {
    let mut canon = record.clone();
    canon.title = canonicalize_text(canon.title.trim());
    for entry in &mut canon.doc {
        entry.description = canonicalize_text(&entry.description);
    }
    Ok(format!("sha256:{}", sha256_canonical_json(&canon)?))
}
