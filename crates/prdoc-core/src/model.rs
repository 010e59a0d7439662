use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Semantic-versioning severity of a change to one crate.
///
/// Variant order is significant: `Patch < Minor < Major`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bump {
    Patch,
    Minor,
    Major,
}

impl Bump {
    pub const ALL: [Bump; 3] = [Bump::Patch, Bump::Minor, Bump::Major];

    pub const fn as_str(self) -> &'static str {
        match self {
            Bump::Patch => "patch",
            Bump::Minor => "minor",
            Bump::Major => "major",
        }
    }
}

impl fmt::Display for Bump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBumpError(pub String);

impl fmt::Display for ParseBumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid bump '{}': expected one of major, minor, patch", self.0)
    }
}

impl std::error::Error for ParseBumpError {}

impl FromStr for Bump {
    type Err = ParseBumpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Bump::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| ParseBumpError(s.to_string()))
    }
}

/// Audience of a doc entry, as written by the author.
///
/// Both a single label and a list of labels are accepted; the shape is kept
/// so that re-serializing a record reproduces what was read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AudienceField {
    One(String),
    Many(Vec<String>),
}

impl AudienceField {
    pub fn labels(&self) -> &[String] {
        match self {
            AudienceField::One(label) => std::slice::from_ref(label),
            AudienceField::Many(labels) => labels,
        }
    }
}

impl From<&str> for AudienceField {
    fn from(label: &str) -> Self {
        AudienceField::One(label.to_string())
    }
}

/// A description targeted at one or more audiences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocEntry {
    pub audience: AudienceField,
    pub description: String,
}

/// A published crate affected by the change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CrateEntry {
    pub name: String,
    pub bump: Bump,
    /// `Some(false)` opts the crate out of semver checks for this change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validate: Option<bool>,
}

impl CrateEntry {
    pub fn new(name: impl Into<String>, bump: Bump) -> Self {
        Self { name: name.into(), bump, validate: None }
    }
}

/// A single PRDoc record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChangeRecord {
    pub title: String,
    pub doc: Vec<DocEntry>,
    pub crates: Vec<CrateEntry>,
}

impl ChangeRecord {
    /// `(name, bump)` pairs in declaration order.
    pub fn crate_bumps(&self) -> Vec<(&str, Bump)> {
        self.crates.iter().map(|c| (c.name.as_str(), c.bump)).collect()
    }

    /// Every audience label mentioned, in first-seen order, without repeats.
    pub fn audiences(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for entry in &self.doc {
            for label in entry.audience.labels() {
                if !out.contains(&label.as_str()) {
                    out.push(label);
                }
            }
        }
        out
    }

    /// Highest bump declared by this record.
    pub fn max_bump(&self) -> Option<Bump> {
        self.crates.iter().map(|c| c.bump).max()
    }
}
