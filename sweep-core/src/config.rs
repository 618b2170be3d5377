//! # Configuration Management
//!
//! Optional `config.toml` in the platform config directory (XDG on Linux)
//! supplying defaults for the remote and the main branch.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{CONFIG_FILE_NAME, DEFAULT_REMOTE};
use crate::sweep::SweepOptions;

/// Represents the configuration directories for git-sweep
#[derive(Debug, Clone)]
pub struct ConfigDirs {
  pub config_dir: PathBuf,
}

impl ConfigDirs {
  /// Create a new ConfigDirs instance
  pub fn new() -> Result<Self> {
    let proj_dirs =
      ProjectDirs::from("eddieland", "", "git-sweep").context("Failed to determine project directories")?;

    Ok(Self {
      config_dir: proj_dirs.config_dir().to_path_buf(),
    })
  }

  /// Get the config directory
  pub fn config_dir(&self) -> &PathBuf {
    &self.config_dir
  }

  /// Get the path to the config file
  pub fn config_path(&self) -> PathBuf {
    self.config_dir.join(CONFIG_FILE_NAME)
  }

  /// Load the config file, falling back to defaults when it does not exist
  pub fn load_config(&self) -> Result<SweepConfig> {
    SweepConfig::load(self.config_path())
  }
}

/// Get the configuration directories
pub fn get_config_dirs() -> Result<ConfigDirs> {
  ConfigDirs::new()
}

/// Persistent defaults for a sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
  /// Remote queried for the main branch
  pub remote: String,
  /// Main branch to use without asking the remote
  pub head_branch: Option<String>,
}

impl Default for SweepConfig {
  fn default() -> Self {
    Self {
      remote: DEFAULT_REMOTE.to_string(),
      head_branch: None,
    }
  }
}

impl SweepConfig {
  /// Read a config file; a missing file yields the defaults.
  pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    if !path.exists() {
      debug!("No config at {}, using defaults", path.display());
      return Ok(Self::default());
    }

    let content = fs::read_to_string(path).with_context(|| format!("Failed to read config from {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Failed to parse config from {}", path.display()))
  }

  /// Options for a run, before command line overrides are applied.
  pub fn options(&self) -> SweepOptions {
    SweepOptions {
      remote: self.remote.clone(),
      head_branch: self.head_branch.clone(),
      ..SweepOptions::default()
    }
  }
}
