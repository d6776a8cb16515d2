//! Secret management commands (list, get, set, rm) against one environment.

use std::path::Path;

use crate::cli::{output, resolve};
use crate::error::Result;

/// List secret names.
pub async fn list(path: &Path, env: &str, json: bool) -> Result<()> {
    let (_config, registry) = resolve::registry(path)?;
    let names = registry.store(env)?.list_names().await?;

    if json {
        let output = serde_json::json!({
            "environment": env,
            "names": names,
            "count": names.len()
        });
        output::data(&serde_json::to_string_pretty(&output)?);
    } else if names.is_empty() {
        output::dimmed("no secrets stored");
    } else {
        output::header(&format!("{} secrets in {}", output::count(names.len()), env));
        for name in &names {
            output::list_item(name);
        }
    }

    Ok(())
}

/// Print the current value.
pub async fn get(path: &Path, env: &str, name: &str) -> Result<()> {
    let (_config, registry) = resolve::registry(path)?;
    let record = registry.store(env)?.get_current(name).await?;
    output::data(&record.value);
    Ok(())
}

/// Create or overwrite a secret.
pub async fn set(path: &Path, env: &str, name: &str, value: &str) -> Result<()> {
    let (_config, registry) = resolve::registry(path)?;
    let record = registry.store(env)?.upsert(name, value).await?;

    if record.name_was_sanitized {
        output::warn(&format!(
            "{} is not a valid name; stored as {}",
            name,
            output::key(&record.name)
        ));
    }
    output::success(&format!("set {} in {}", output::key(&record.name), env));
    Ok(())
}

/// Soft-delete a secret.
pub async fn rm(path: &Path, env: &str, name: &str) -> Result<()> {
    let (_config, registry) = resolve::registry(path)?;
    registry.store(env)?.delete(name).await?;
    output::success(&format!("removed {} from {}", output::key(name), env));
    Ok(())
}
