//! User configuration
//!
//! Loaded from `--config <PATH>` (or `VISCALC_CONFIG`) when given, otherwise
//! from `config.yaml` in the platform config directory if it exists.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::{IsoGrade, Product};

/// Maximum number of decimal places shown for an estimate
pub const MAX_PRECISION: usize = 6;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yml::Error,
    },

    #[error("precision must be at most {max}, got {value}")]
    Precision { value: usize, max: usize },
}

/// Effective user configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Product used when none is given on the command line
    pub product: Option<Product>,

    /// Grade used when none is given; reconciled against the product
    pub grade: Option<IsoGrade>,

    /// Decimal places for displayed estimates
    pub precision: usize,

    /// Default output format name (auto, json, yaml, csv, tsv)
    pub output: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            product: None,
            grade: None,
            precision: 1,
            output: None,
        }
    }
}

impl Config {
    pub const FILE_NAME: &'static str = "config.yaml";

    /// Platform config file location, e.g. `~/.config/viscalc/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "viscalc").map(|dirs| dirs.config_dir().join(Self::FILE_NAME))
    }

    /// The file `load` would read, if any
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::default_path().filter(|p| p.is_file()),
        }
    }

    /// Load the effective configuration.
    ///
    /// An explicit path must exist; the default location is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = Self::resolve_path(explicit) else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        Self::from_yaml(&content, &path)
    }

    /// Parse configuration text; `path` is only used in error messages
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        // An empty file deserializes to unit, not a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if config.precision > MAX_PRECISION {
            return Err(ConfigError::Precision {
                value: config.precision,
                max: MAX_PRECISION,
            });
        }
        Ok(config)
    }
}
