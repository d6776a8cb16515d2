//! Init command - write a starter configuration.

use std::path::Path;

use tracing::info;

use crate::cli::output;
use crate::core::config::Config;
use crate::error::{ConfigError, Result};

/// Write `.vaultsync.toml` with the default environments.
pub fn execute(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyInitialized(path.display().to_string()).into());
    }

    let config = Config::with_default_environments();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    config.save_to(path)?;
    info!(path = %path.display(), "configuration written");

    output::success(&format!("initialized {}", output::path(&path.display().to_string())));
    for env in &config.environments {
        output::list_item(&format!(
            "{}  {}",
            output::env_label(&env.id, env.color.as_deref()),
            env.store_locator
        ));
    }
    output::hint("run: vaultsync set --env dev NAME VALUE");

    Ok(())
}
