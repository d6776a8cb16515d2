//! Configuration file management.
//!
//! Handles reading, writing, and validating `.vaultsync.toml` configuration
//! files. The file is the environment registry's source: every environment
//! the operator can compare, copy between or inspect is listed here.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::domain::Environment;
use crate::error::{ConfigError, Result};

/// Project configuration stored in `.vaultsync.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Metadata about the configuration
    pub vaultsync: Meta,
    /// Batch copy tuning
    #[serde(default)]
    pub copy: CopySettings,
    /// Known environments, in display order
    #[serde(default)]
    pub environments: Vec<Environment>,
}

/// Metadata section of the configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    /// Configuration version
    pub version: String,
}

/// Batch copy settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopySettings {
    /// Maximum number of items copied concurrently within one batch.
    #[serde(default = "default_max_in_flight")]
    pub max_in_flight: usize,
}

fn default_max_in_flight() -> usize {
    constants::DEFAULT_MAX_IN_FLIGHT
}

impl Default for CopySettings {
    fn default() -> Self {
        Self {
            max_in_flight: default_max_in_flight(),
        }
    }
}

impl Config {
    /// Create a new empty configuration with current version
    pub fn new() -> Self {
        Self {
            vaultsync: Meta {
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            copy: CopySettings::default(),
            environments: Vec::new(),
        }
    }

    /// Configuration with the default `prod`, `staging` and `dev`
    /// environments, each backed by a file store under `.vaultsync/stores`.
    pub fn with_default_environments() -> Self {
        let mut config = Self::new();
        config.environments = constants::DEFAULT_ENVIRONMENTS
            .iter()
            .map(|(id, name, color)| {
                Environment::new(
                    *id,
                    *name,
                    format!("{}{}/{}.json", constants::FILE_SCHEME, constants::STORE_DIR, id),
                )
                .with_color(*color)
            })
            .collect();
        config
    }

    /// Path to the configuration file.
    ///
    /// `VAULTSYNC_CONFIG` wins; otherwise `.vaultsync.toml` in the current
    /// directory.
    pub fn config_path() -> PathBuf {
        std::env::var_os(constants::CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(constants::CONFIG_FILE))
    }

    /// Directory that relative store paths in `path`'s config resolve against.
    pub fn base_dir(path: &Path) -> PathBuf {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Load configuration from the default path
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if the file doesn't exist,
    /// or `ConfigError::Parse` if the TOML is malformed.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            return Err(ConfigError::NotInitialized.into());
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        debug!(environments = config.environments.len(), "config loaded");

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns error if serialization or file write fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "saving config");

        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(path, contents)?;

        Ok(())
    }

    /// Validate the configuration structure and contents
    ///
    /// Checks:
    /// - Version field is present and looks like semver
    /// - `copy.max_in_flight` is at least 1
    /// - Environment ids are non-empty and unique
    /// - Every environment has a store locator
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue`, `ConfigError::MissingField` or
    /// `ConfigError::DuplicateEnvironment` on validation failure.
    pub fn validate(&self) -> Result<()> {
        debug!("validating config");

        if self.vaultsync.version.is_empty() {
            return Err(ConfigError::MissingField { field: "version" }.into());
        }

        let version_parts: Vec<&str> = self.vaultsync.version.split('.').collect();
        if version_parts.len() < 2 {
            return Err(ConfigError::InvalidValue {
                field: "version",
                reason: format!("not a valid semver: {}", self.vaultsync.version),
            }
            .into());
        }

        if self.copy.max_in_flight == 0 {
            return Err(ConfigError::InvalidValue {
                field: "copy.max_in_flight",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }

        let mut seen = HashSet::new();
        for env in &self.environments {
            if env.id.trim().is_empty() {
                return Err(ConfigError::MissingField {
                    field: "environments.id",
                }
                .into());
            }
            if !seen.insert(env.id.as_str()) {
                return Err(ConfigError::DuplicateEnvironment(env.id.clone()).into());
            }
            if env.store_locator.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "environments.store",
                    reason: format!("environment '{}' has no store", env.id),
                }
                .into());
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
