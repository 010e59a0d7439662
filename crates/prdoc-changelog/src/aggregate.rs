//! Aggregation of many records into per-crate release decisions.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use prdoc_core::model::Bump;
use prdoc_core::source::RecordSource;
use semver::Version;
use serde::Serialize;
use tracing::debug;

use crate::version::next_version;

/// Release decision for one crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CratePlan {
    pub name: String,
    /// Highest bump requested by any record.
    pub bump: Bump,
    /// Records that named this crate, in scan order.
    pub origins: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<Version>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<Version>,
}

/// A crate's current version cannot be bumped without overflowing a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionOverflow {
    pub crate_name: String,
    pub current: Version,
    pub bump: Bump,
}

impl fmt::Display for VersionOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot apply {} bump to {} {}: version component overflows",
            self.bump, self.crate_name, self.current
        )
    }
}

impl std::error::Error for VersionOverflow {}

/// Per-crate aggregate over a set of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReleasePlan {
    /// Crates in first-seen order.
    pub crates: Vec<CratePlan>,
}

impl ReleasePlan {
    pub fn from_records(sources: &[RecordSource]) -> Self {
        let mut crates: Vec<CratePlan> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for source in sources {
            let origin = source.origin();
            for entry in &source.record.crates {
                match index.get(&entry.name) {
                    Some(&i) => {
                        let plan = &mut crates[i];
                        plan.bump = plan.bump.max(entry.bump);
                        if !plan.origins.contains(&origin) {
                            plan.origins.push(origin.clone());
                        }
                    }
                    None => {
                        index.insert(entry.name.clone(), crates.len());
                        crates.push(CratePlan {
                            name: entry.name.clone(),
                            bump: entry.bump,
                            origins: vec![origin.clone()],
                            current: None,
                            next: None,
                        });
                    }
                }
            }
        }

        debug!(records = sources.len(), crates = crates.len(), "aggregated release plan");
        Self { crates }
    }

    /// Fill in `current`/`next` for crates whose version is known.
    pub fn with_current_versions(mut self, versions: &BTreeMap<String, Version>) -> Result<Self, VersionOverflow> {
        for plan in &mut self.crates {
            if let Some(current) = versions.get(&plan.name) {
                let next = next_version(current, plan.bump).ok_or_else(|| VersionOverflow {
                    crate_name: plan.name.clone(),
                    current: current.clone(),
                    bump: plan.bump,
                })?;
                plan.next = Some(next);
                plan.current = Some(current.clone());
            }
        }
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&CratePlan> {
        self.crates.iter().find(|c| c.name == name)
    }

    pub fn max_bump(&self) -> Option<Bump> {
        self.crates.iter().map(|c| c.bump).max()
    }

    pub fn is_empty(&self) -> bool {
        self.crates.is_empty()
    }
}

/// Pairs of origins whose records have identical content.
///
/// Usually a copy-pasted file that was never edited.
pub fn duplicate_records(sources: &[RecordSource]) -> Vec<(String, String)> {
    let mut first_seen: HashMap<&str, String> = HashMap::new();
    let mut out = Vec::new();

    for source in sources {
        let origin = source.origin();
        match first_seen.get(source.fingerprint.as_str()) {
            Some(first) => {
                debug!(first = %first, duplicate = %origin, "records have identical content");
                out.push((first.clone(), origin));
            }
            None => {
                first_seen.insert(source.fingerprint.as_str(), origin);
            }
        }
    }
    out
}
