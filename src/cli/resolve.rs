//! Configuration resolution helpers for CLI commands.

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use dialoguer::Confirm;

use crate::core::config::Config;
use crate::core::registry::EnvironmentRegistry;
use crate::error::{Error, Result};

/// Resolve the configuration file path.
///
/// Rules:
/// - `--config` wins
/// - then `VAULTSYNC_CONFIG`
/// - then `.vaultsync.toml` in the current directory
pub fn config_path(flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(Config::config_path)
}

/// Load the configuration at `path` and open a store for every environment.
pub fn registry(path: &Path) -> Result<(Config, EnvironmentRegistry)> {
    let config = Config::load_from(path)?;
    let registry = EnvironmentRegistry::from_config(&config, &Config::base_dir(path))?;
    Ok((config, registry))
}

/// Ask the operator to confirm a write.
///
/// `yes` skips the prompt. Without a terminal there is nobody to ask, so the
/// caller must pass `--yes`.
pub fn confirm(prompt: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    if !io::stdin().is_terminal() {
        return Err(Error::InvalidInput(
            "confirmation required in non-interactive mode; pass --yes".to_string(),
        ));
    }
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(Into::into)
}
