//! Copy command - promote secrets from one environment to another.
//!
//! Builds the selection through a [`ComparisonSession`], so names that are
//! only in the target are rejected before anything is written.

use std::collections::HashMap;
use std::io::{self, IsTerminal};
use std::path::Path;

use dialoguer::Password;
use tracing::debug;

use crate::cli::{output, resolve};
use crate::core::domain::{BatchCopyResult, BatchStatus, EntryStatus};
use crate::core::session::ComparisonSession;
use crate::core::types::SecretName;
use crate::error::{Error, Result, ValidationError};

/// Flags for `vaultsync copy`.
#[derive(Debug, Default)]
pub struct Options {
    pub names: Vec<String>,
    pub all: bool,
    pub filter: Option<String>,
    pub edit: bool,
    /// Raw `NAME=VALUE` overrides.
    pub set: Vec<String>,
    pub yes: bool,
    pub json: bool,
}

/// Parse one `--set NAME=VALUE` argument.
///
/// The value may be empty; the copy then fails for that secret only.
pub fn parse_edit(raw: &str) -> Result<(SecretName, String)> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(ValidationError::MalformedEdit(raw.to_string()).into()),
    }
}

/// Run a batch copy.
pub async fn execute(path: &Path, source: &str, target: &str, options: Options) -> Result<()> {
    let overrides = options
        .set
        .iter()
        .map(|raw| parse_edit(raw))
        .collect::<Result<HashMap<_, _>>>()?;

    if options.edit && !io::stdin().is_terminal() {
        return Err(Error::InvalidInput(
            "--edit needs an interactive terminal; use --set NAME=VALUE instead".to_string(),
        ));
    }

    let (config, registry) = resolve::registry(path)?;
    let mut session = ComparisonSession::new(registry, source, target)?
        .with_max_in_flight(config.copy.max_in_flight);
    session.compare().await?;

    if options.all || options.filter.is_some() {
        let selected = session.select_all(options.filter.as_deref().unwrap_or(""))?;
        if selected == 0 {
            output::dimmed("nothing to copy");
            return Ok(());
        }
    } else if options.names.is_empty() {
        return Err(Error::InvalidInput(
            "name the secrets to copy, or pass --all".to_string(),
        ));
    } else {
        for name in &options.names {
            session.select(name.as_str());
        }
    }

    // Reject target-only names before showing a plan or asking to confirm.
    session.validate_selection()?;

    for name in overrides.keys() {
        if !session.selection().contains(name) {
            output::warn(&format!("ignoring --set for {}: not selected", name));
        }
    }

    if !options.json {
        print_plan(&session)?;
    }

    let prompt = format!(
        "Copy {} secret(s) from {} to {}?",
        session.selection().len(),
        source,
        target
    );
    if !resolve::confirm(&prompt, options.yes)? {
        output::dimmed("cancelled");
        return Ok(());
    }

    let result = if options.edit || !overrides.is_empty() {
        edited_copy(&mut session, overrides, options.edit).await?
    } else {
        session.copy_selected().await?
    };

    report(&result, options.json)?;

    if result.failure_count > 0 {
        return Err(Error::BatchIncomplete {
            failed: result.failure_count,
            total: result.total(),
        });
    }
    Ok(())
}

fn print_plan(session: &ComparisonSession) -> Result<()> {
    let source = session.source_env()?;
    let target = session.target_env()?;

    output::header(&format!(
        "{} → {}",
        output::env_label(&source.to_string(), source.color.as_deref()),
        output::env_label(&target.to_string(), target.color.as_deref())
    ));
    if let Some(diff) = session.diff() {
        for name in session.selection().iter() {
            let note = match diff.status(name) {
                Some(EntryStatus::OnlyInSource) => "new",
                Some(EntryStatus::InBoth) => "overwrite",
                _ => "not in source",
            };
            output::diff_line('+', name, note);
        }
    }
    Ok(())
}

/// Load the selection, gather edits, and commit.
async fn edited_copy(
    session: &mut ComparisonSession,
    mut edits: HashMap<SecretName, String>,
    interactive: bool,
) -> Result<BatchCopyResult> {
    let loaded = session.load_selected_for_edit().await?;

    for warning in loaded.warnings() {
        output::warn(&format!(
            "could not load {}: {}",
            warning.secret_name, warning.message
        ));
    }

    if interactive {
        for secret in loaded.loaded() {
            if edits.contains_key(&secret.name) {
                continue;
            }
            let value = Password::new()
                .with_prompt(format!(
                    "New value for {} (leave empty to keep)",
                    output::key(&secret.name)
                ))
                .allow_empty_password(true)
                .interact()?;
            if !value.is_empty() {
                edits.insert(secret.name.clone(), value);
            }
        }
    }

    debug!(edits = edits.len(), "committing edits");
    Ok(session.commit_edits(loaded, &edits).await)
}

fn report(result: &BatchCopyResult, json: bool) -> Result<()> {
    if json {
        let output = serde_json::json!({
            "status": result.status(),
            "successCount": result.success_count,
            "failureCount": result.failure_count,
            "editedCount": result.edited_count(),
            "outcomes": result.outcomes,
        });
        output::data(&serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    output::blank();
    for outcome in &result.outcomes {
        output::outcome(outcome.success, &outcome.secret_name, &outcome.message);
    }
    output::blank();

    let edited = result.edited_count();
    let edited_note = if edited > 0 {
        format!(" ({} edited)", edited)
    } else {
        String::new()
    };
    match result.status() {
        BatchStatus::Success => output::success(&format!(
            "copied {} secret(s){}",
            output::count(result.success_count),
            edited_note
        )),
        BatchStatus::PartialSuccess => output::warn(&format!(
            "copied {} of {} secret(s){}",
            result.success_count,
            result.total(),
            edited_note
        )),
        BatchStatus::Failure => output::error("no secrets were copied"),
    }
    Ok(())
}
