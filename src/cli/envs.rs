//! Envs command - list configured environments.

use std::path::Path;

use crate::cli::{output, resolve};
use crate::error::Result;

/// List the environment registry.
pub fn execute(path: &Path, json: bool) -> Result<()> {
    let (config, _registry) = resolve::registry(path)?;
    let envs = &config.environments;

    if json {
        let result = serde_json::json!({
            "environments": envs,
            "count": envs.len()
        });
        output::data(&serde_json::to_string_pretty(&result)?);
    } else if envs.is_empty() {
        output::dimmed("no environments configured");
    } else {
        let id_width = envs.iter().map(|e| e.id.len()).max().unwrap_or(2).max(2);
        let name_width = envs.iter().map(|e| e.name.len()).max().unwrap_or(4).max(4);

        println!(
            "{:<id_width$}  {:<name_width$}  STORE",
            "ID",
            "NAME",
            id_width = id_width,
            name_width = name_width
        );
        for env in envs {
            let id = format!("{:<width$}", env.id, width = id_width);
            println!(
                "{}  {:<name_width$}  {}",
                output::env_label(&id, env.color.as_deref()),
                env.name,
                env.store_locator,
                name_width = name_width
            );
            if let Some(description) = &env.description {
                output::dimmed(&format!("{:id_width$}  {}", "", description, id_width = id_width));
            }
        }
    }

    Ok(())
}
