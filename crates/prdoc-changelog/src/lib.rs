#![doc = r#"
⚠️ INTERNAL CRATE – NOT A STABLE API

This crate is an internal implementation detail of the PRDoc toolkit.

Do NOT depend on this crate directly.
Use `prdoc-io` instead.
"#]

pub mod aggregate;
pub mod render;
pub mod serialize;
pub mod version;

pub use aggregate::{CratePlan, ReleasePlan, VersionOverflow, duplicate_records};
pub use render::{ChangelogOptions, render_markdown, render_plan_tsv};
pub use version::next_version;
