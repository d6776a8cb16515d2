//! History commands (list, show, restore).

use std::path::Path;

use crate::cli::{output, resolve};
use crate::core::history::VersionHistory;
use crate::error::Result;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// List versions of a secret, newest first.
pub async fn list(path: &Path, env: &str, name: &str, json: bool) -> Result<()> {
    let (_config, registry) = resolve::registry(path)?;
    let versions = VersionHistory::new(&registry).list_versions(env, name).await?;

    if json {
        let result = serde_json::json!({
            "environment": env,
            "name": name,
            "versions": versions,
            "count": versions.len()
        });
        output::data(&serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    output::header(&format!("{} versions of {}", output::count(versions.len()), output::key(name)));
    println!("{:<10} {:<20} {:<8}", "VERSION", "CREATED", "ENABLED");
    for (i, version) in versions.iter().enumerate() {
        let enabled = if version.enabled { "yes" } else { "no" };
        let line = format!(
            "{:<10} {:<20} {:<8}",
            version.short_id(),
            version.created_on.format(TIME_FORMAT),
            enabled
        );
        if i == 0 {
            println!("{} (current)", line);
        } else {
            println!("{}", line);
        }
    }

    Ok(())
}

/// Show one version's metadata and value.
pub async fn show(path: &Path, env: &str, name: &str, version: &str) -> Result<()> {
    let (_config, registry) = resolve::registry(path)?;
    let history = VersionHistory::new(&registry);
    let version = history.get_version(env, name, &expand(&history, env, name, version).await?).await?;

    output::header(&format!("{} @ {}", output::key(name), version.version));
    output::kv("enabled ", if version.enabled { "yes" } else { "no" });
    output::kv("created ", version.created_on.format(TIME_FORMAT));
    output::kv("updated ", version.updated_on.format(TIME_FORMAT));
    if let Some(expires) = version.expires_on {
        output::kv("expires ", expires.format(TIME_FORMAT));
    }
    if let Some(content_type) = &version.content_type {
        output::kv("type    ", content_type);
    }
    for (tag, value) in &version.tags {
        output::kv("tag     ", format!("{}={}", tag, value));
    }
    output::kv("value   ", &version.value);

    Ok(())
}

/// Restore a previous version as the new current one.
pub async fn restore(path: &Path, env: &str, name: &str, version: &str, yes: bool) -> Result<()> {
    let (_config, registry) = resolve::registry(path)?;
    let history = VersionHistory::new(&registry);
    let version = expand(&history, env, name, version).await?;

    let prompt = format!("Restore {} in {} to version {}?", name, env, version);
    if !resolve::confirm(&prompt, yes)? {
        output::dimmed("cancelled");
        return Ok(());
    }

    let outcome = history.restore(env, name, &version).await?;
    output::success(&format!(
        "restored {} to {} (new version {})",
        output::key(name),
        version,
        outcome.new_version
    ));
    Ok(())
}

/// Resolve an abbreviated version id against the listing.
///
/// An exact match wins; otherwise a unique prefix is expanded. Anything else
/// is passed through for the store to reject.
async fn expand(history: &VersionHistory<'_>, env: &str, name: &str, version: &str) -> Result<String> {
    let versions = history.list_versions(env, name).await?;
    if versions.iter().any(|v| v.version == version) {
        return Ok(version.to_string());
    }
    let mut matches = versions.iter().filter(|v| v.version.starts_with(version));
    match (matches.next(), matches.next()) {
        (Some(only), None) => Ok(only.version.clone()),
        _ => Ok(version.to_string()),
    }
}
