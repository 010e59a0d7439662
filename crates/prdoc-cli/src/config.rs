//! `.prdoc.toml` configuration.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use prdoc_io::prelude::ValidateOptions;
use prdoc_io::scan::DEFAULT_EXTENSION;
use semver::Version;
use serde::Deserialize;
use tracing::debug;

/// Looked up in the current directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = ".prdoc.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrdocConfig {
    pub prdoc: DirConfig,
    pub validate: ValidateConfig,
    /// Current published version per crate, used to compute next versions.
    pub versions: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DirConfig {
    /// Directory holding record files.
    pub dir: PathBuf,
    pub extension: String,
}

impl Default for DirConfig {
    fn default() -> Self {
        Self { dir: PathBuf::from("prdoc"), extension: DEFAULT_EXTENSION.to_string() }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidateConfig {
    pub strict_audience: bool,
    pub extra_audiences: Vec<String>,
    pub max_title_len: usize,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        let defaults = ValidateOptions::default();
        Self {
            strict_audience: defaults.strict_audience,
            extra_audiences: defaults.extra_audiences,
            max_title_len: defaults.max_title_len,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    InvalidVersion {
        crate_name: String,
        value: String,
        source: semver::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "cannot read config {}: {source}", path.display())
            }
            ConfigError::Parse { path, source } => {
                write!(f, "invalid config {}: {source}", path.display())
            }
            ConfigError::InvalidVersion { crate_name, value, source } => {
                write!(f, "invalid version '{value}' for crate '{crate_name}': {source}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::InvalidVersion { source, .. } => Some(source),
        }
    }
}

impl PrdocConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist and parse. Without one, `.prdoc.toml` in
    /// the current directory is used when present, defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let p = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !p.is_file() {
                    debug!("no {DEFAULT_CONFIG_FILE}; using defaults");
                    return Ok(Self::default());
                }
                p
            }
        };

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml_str(&content, &path)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate_options(&self) -> ValidateOptions {
        ValidateOptions {
            strict_audience: self.validate.strict_audience,
            extra_audiences: self.validate.extra_audiences.clone(),
            max_title_len: self.validate.max_title_len,
        }
    }

    pub fn current_versions(&self) -> Result<BTreeMap<String, Version>, ConfigError> {
        self.versions
            .iter()
            .map(|(name, value)| {
                Version::parse(value)
                    .map(|v| (name.clone(), v))
                    .map_err(|source| ConfigError::InvalidVersion {
                        crate_name: name.clone(),
                        value: value.clone(),
                        source,
                    })
            })
            .collect()
    }
}
