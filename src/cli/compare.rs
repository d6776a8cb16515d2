//! Compare command - show which secrets exist where.

use std::path::{Path, PathBuf};

use crate::cli::{output, resolve};
use crate::core::domain::{matches_filter, ComparisonReport};
use crate::core::session::ComparisonSession;
use crate::error::Result;

/// Flags for `vaultsync compare`.
#[derive(Debug, Default)]
pub struct Options {
    pub filter: Option<String>,
    pub json: bool,
    /// `Some(None)` exports to the default file name.
    pub export: Option<Option<PathBuf>>,
}

/// Compare two environments and print or export the result.
///
/// The filter narrows the printed names; summary counts always cover the
/// whole comparison. Exports are never filtered.
pub async fn execute(path: &Path, source: &str, target: &str, options: Options) -> Result<()> {
    let (config, registry) = resolve::registry(path)?;
    let mut session = ComparisonSession::new(registry, source, target)?
        .with_max_in_flight(config.copy.max_in_flight);
    session.compare().await?;

    let full = session.report()?;
    let mut report = full.clone();
    narrow(&mut report, options.filter.as_deref().unwrap_or(""));

    if let Some(export) = options.export {
        let file = export.unwrap_or_else(|| PathBuf::from(full.file_name()));
        std::fs::write(&file, full.to_json()?)?;
        if !options.json {
            output::success(&format!(
                "exported comparison to {}",
                output::path(&file.display().to_string())
            ));
        }
    }

    if options.json {
        output::data(&report.to_json()?);
        return Ok(());
    }

    print_report(&session, &report)
}

fn narrow(report: &mut ComparisonReport, filter: &str) {
    if filter.is_empty() {
        return;
    }
    report.only_in_source.retain(|n| matches_filter(n, filter));
    report.only_in_target.retain(|n| matches_filter(n, filter));
    report.in_both.retain(|n| matches_filter(n, filter));
}

fn print_report(session: &ComparisonSession, report: &ComparisonReport) -> Result<()> {
    let source = session.source_env()?;
    let target = session.target_env()?;

    output::header(&format!(
        "{} → {}",
        output::env_label(&source.to_string(), source.color.as_deref()),
        output::env_label(&target.to_string(), target.color.as_deref())
    ));

    let groups = [
        ('+', format!("only in {}", source.id), &report.only_in_source),
        ('-', format!("only in {}", target.id), &report.only_in_target),
        ('=', "in both".to_string(), &report.in_both),
    ];
    for (marker, title, names) in groups {
        if names.is_empty() {
            continue;
        }
        output::section(&format!("{} ({})", title, names.len()));
        for name in names.iter() {
            output::diff_line(marker, name, "");
        }
    }

    let summary = &report.summary;
    output::section("Summary");
    output::kv("only in source", summary.only_in_source_count);
    output::kv("only in target", summary.only_in_target_count);
    output::kv("in both       ", summary.in_both_count);
    output::kv("total source  ", summary.total_in_source);
    output::kv("total target  ", summary.total_in_target);

    if summary.only_in_source_count > 0 {
        output::hint(&format!(
            "run: vaultsync copy {} {} --all",
            source.id, target.id
        ));
    }
    Ok(())
}
