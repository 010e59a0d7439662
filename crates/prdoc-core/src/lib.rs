#![doc = r#"
⚠️ INTERNAL CRATE – NOT A STABLE API

This crate is an internal implementation detail of the PRDoc toolkit.

Do NOT depend on this crate directly.
Use `prdoc-io` instead.
"#]

pub mod model;
pub mod source;
pub mod text;

pub use model::{AudienceField, Bump, ChangeRecord, CrateEntry, DocEntry, ParseBumpError};
pub use source::{RecordSource, pr_number_from_path};
