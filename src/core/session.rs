//! Comparison session.
//!
//! Owns one source/target pair, its latest [`DiffResult`] and the operator's
//! [`Selection`]. This is the single writer of the selection: every copy
//! goes through [`ComparisonSession::copy_selected`] or the edit methods,
//! which check the selection against the current diff first and afterwards
//! clear the selection and recompute the diff.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::core::compare::DiffEngine;
use crate::core::constants::DEFAULT_MAX_IN_FLIGHT;
use crate::core::copy::{BatchCopier, EditSession};
use crate::core::domain::{
    matches_filter, BatchCopyResult, ComparisonReport, DiffResult, Environment, Selection,
};
use crate::core::registry::EnvironmentRegistry;
use crate::core::types::{EnvironmentId, SecretName};
use crate::error::{Error, Result};

/// State of one interactive comparison between two environments.
#[derive(Debug, Clone)]
pub struct ComparisonSession {
    registry: EnvironmentRegistry,
    max_in_flight: usize,
    source: EnvironmentId,
    target: EnvironmentId,
    diff: Option<DiffResult>,
    compared_at: Option<DateTime<Utc>>,
    selection: Selection,
}

impl ComparisonSession {
    /// Start a session for `source` → `target`. No comparison is run yet.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the ids are equal, `UnknownEnvironment` if either
    /// is not registered.
    pub fn new(registry: EnvironmentRegistry, source: &str, target: &str) -> Result<Self> {
        registry.pair(source, target)?;
        Ok(Self {
            registry,
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
            source: source.to_string(),
            target: target.to_string(),
            diff: None,
            compared_at: None,
            selection: Selection::new(),
        })
    }

    pub fn with_max_in_flight(mut self, max_in_flight: usize) -> Self {
        self.max_in_flight = max_in_flight.max(1);
        self
    }

    pub fn registry(&self) -> &EnvironmentRegistry {
        &self.registry
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn source_env(&self) -> Result<&Environment> {
        self.registry.get(&self.source)
    }

    pub fn target_env(&self) -> Result<&Environment> {
        self.registry.get(&self.target)
    }

    /// The latest comparison, if one has run since the pair last changed.
    pub fn diff(&self) -> Option<&DiffResult> {
        self.diff.as_ref()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Point the session at a different pair. Drops the diff and selection.
    pub fn set_environments(&mut self, source: &str, target: &str) -> Result<()> {
        self.registry.pair(source, target)?;
        self.source = source.to_string();
        self.target = target.to_string();
        self.reset();
        Ok(())
    }

    /// Exchange source and target. Drops the diff and selection.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.source, &mut self.target);
        self.reset();
    }

    fn reset(&mut self) {
        self.diff = None;
        self.compared_at = None;
        self.selection.clear();
    }

    /// Recompute the diff. The selection is cleared.
    pub async fn compare(&mut self) -> Result<&DiffResult> {
        let diff = DiffEngine::new(&self.registry)
            .compare(&self.source, &self.target)
            .await?;
        self.selection.clear();
        self.compared_at = Some(Utc::now());
        Ok(self.diff.insert(diff))
    }

    fn current_diff(&self) -> Result<&DiffResult> {
        self.diff
            .as_ref()
            .ok_or_else(|| Error::InvalidInput("no comparison has been run".to_string()))
    }

    pub fn select(&mut self, name: impl Into<SecretName>) {
        self.selection.select(name);
    }

    pub fn deselect(&mut self, name: &str) {
        self.selection.deselect(name);
    }

    /// Replace the selection with every copyable name matching `filter`.
    ///
    /// Returns the number of names selected.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if no comparison has been run.
    pub fn select_all(&mut self, filter: &str) -> Result<usize> {
        let diff = self.diff.as_ref().ok_or_else(|| {
            Error::InvalidInput("no comparison has been run".to_string())
        })?;
        self.selection
            .select_all(diff, |name| matches_filter(name, filter));
        Ok(self.selection.len())
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Check the selection is non-empty and copyable under the current diff
    /// without touching any store.
    ///
    /// # Errors
    ///
    /// `InvalidInput` without a comparison or with an empty selection,
    /// `InvalidSelection` if a selected name is not in the source.
    pub fn validate_selection(&self) -> Result<()> {
        self.checked_selection().map(|_| ())
    }

    /// Selected names, checked against the current diff.
    fn checked_selection(&self) -> Result<Vec<SecretName>> {
        let diff = self.current_diff()?;
        if self.selection.is_empty() {
            return Err(Error::InvalidInput("no secrets selected".to_string()));
        }
        self.selection.validate(diff)?;
        Ok(self.selection.to_vec())
    }

    fn copier(&self) -> BatchCopier<'_> {
        BatchCopier::new(&self.registry).with_max_in_flight(self.max_in_flight)
    }

    /// Copy the selection verbatim, then refresh.
    ///
    /// # Errors
    ///
    /// `InvalidInput` without a comparison or with an empty selection,
    /// `InvalidSelection` if a selected name is not in the source. Per-item
    /// failures are in the result.
    pub async fn copy_selected(&mut self) -> Result<BatchCopyResult> {
        let names = self.checked_selection()?;
        let result = self
            .copier()
            .direct_copy(&names, &self.source, &self.target)
            .await?;
        self.refresh().await;
        Ok(result)
    }

    /// Load the selection for editing. The session is unchanged until the
    /// edits are committed with [`ComparisonSession::commit_edits`].
    pub async fn load_selected_for_edit(&self) -> Result<EditSession> {
        let names = self.checked_selection()?;
        self.copier()
            .load_for_edit(&names, &self.source, &self.target)
            .await
    }

    /// Commit an edit session, then refresh.
    pub async fn commit_edits(
        &mut self,
        session: EditSession,
        edits: &HashMap<SecretName, String>,
    ) -> BatchCopyResult {
        let result = session.commit(edits).await;
        self.refresh().await;
        result
    }

    /// Load the selection, apply `edits`, write, then refresh.
    pub async fn edit_selected(
        &mut self,
        edits: &HashMap<SecretName, String>,
    ) -> Result<BatchCopyResult> {
        let session = self.load_selected_for_edit().await?;
        Ok(self.commit_edits(session, edits).await)
    }

    /// Clear the selection and recompute the diff after a copy.
    ///
    /// A failed recompute leaves the session without a diff; the copy
    /// result is still returned to the caller.
    async fn refresh(&mut self) {
        self.selection.clear();
        let refreshed = self.compare().await.map(|_| ());
        if let Err(e) = refreshed {
            warn!(error = %e, "could not refresh comparison after copy");
            self.diff = None;
            self.compared_at = None;
        } else {
            debug!("comparison refreshed after copy");
        }
    }

    /// Export shape of the current comparison.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if no comparison has been run.
    pub fn report(&self) -> Result<ComparisonReport> {
        let diff = self.current_diff()?;
        let compared_at = self.compared_at.unwrap_or_else(Utc::now);
        Ok(ComparisonReport::new(
            diff,
            self.source_env()?,
            self.target_env()?,
            compared_at,
        ))
    }
}
