use std::path::PathBuf;

use prdoc_core::model::{AudienceField, Bump, ChangeRecord, CrateEntry, DocEntry};
use prdoc_core::source::RecordSource;

#[allow(dead_code)]
pub fn source(pr: u64, title: &str, audience: &str, crates: &[(&str, Bump)]) -> RecordSource {
    source_with_doc(
        pr,
        title,
        vec![DocEntry { audience: AudienceField::One(audience.to_string()), description: format!("{title}.\n") }],
        crates,
    )
}

#[allow(dead_code)]
pub fn source_with_doc(pr: u64, title: &str, doc: Vec<DocEntry>, crates: &[(&str, Bump)]) -> RecordSource {
    RecordSource {
        path: PathBuf::from(format!("prdoc/pr_{pr}.prdoc")),
        pr: Some(pr),
        fingerprint: format!("sha256:{pr:064x}"),
        record: ChangeRecord {
            title: title.to_string(),
            doc,
            crates: crates.iter().map(|(n, b)| CrateEntry::new(*n, *b)).collect(),
        },
    }
}
