//! Batch copy orchestrator.
//!
//! Copies a set of secrets from a source environment to a target
//! environment, either verbatim ([`BatchCopier::direct_copy`]) or after the
//! operator has had a chance to change values ([`BatchCopier::load_for_edit`]
//! then [`EditSession::commit`]).
//!
//! Items are independent: each one is read, written and reported on its
//! own, and a failure on one never stops the others. Items run concurrently
//! but outcomes always come back in input order. Nothing is rolled back.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};
use zeroize::Zeroizing;

use crate::core::constants::DEFAULT_MAX_IN_FLIGHT;
use crate::core::domain::{BatchCopyResult, CopyOutcome, SecretRecord};
use crate::core::registry::EnvironmentRegistry;
use crate::core::store::SecretStore;
use crate::core::types::{EnvironmentId, SecretName};
use crate::error::{Error, Result, ValidationError};

/// Runs batch copies between registered environments.
#[derive(Debug, Clone, Copy)]
pub struct BatchCopier<'a> {
    registry: &'a EnvironmentRegistry,
    max_in_flight: usize,
}

impl<'a> BatchCopier<'a> {
    pub fn new(registry: &'a EnvironmentRegistry) -> Self {
        Self {
            registry,
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
        }
    }

    /// Bound the number of items in flight at once (at least one).
    pub fn with_max_in_flight(mut self, max_in_flight: usize) -> Self {
        self.max_in_flight = max_in_flight.max(1);
        self
    }

    /// Check whole-batch preconditions and collapse duplicate names.
    fn prepare(
        &self,
        names: &[SecretName],
        source: &str,
        target: &str,
    ) -> Result<(Vec<SecretName>, Arc<dyn SecretStore>, Arc<dyn SecretStore>)> {
        if names.is_empty() {
            return Err(Error::InvalidInput("no secrets selected".to_string()));
        }
        let (source_store, target_store) = self.registry.pair(source, target)?;

        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(names.len());
        for name in names {
            if seen.insert(name.as_str()) {
                unique.push(name.clone());
            }
        }

        Ok((unique, source_store, target_store))
    }

    /// Copy each name's current value from `source` to `target` verbatim.
    ///
    /// Target writes create or overwrite; the last write wins.
    ///
    /// # Errors
    ///
    /// Only whole-batch preconditions fail the call: an empty `names`
    /// (`InvalidInput`), `source == target` (`InvalidInput`) or an unknown
    /// environment (`UnknownEnvironment`). Per-item failures are reported in
    /// the returned outcomes.
    pub async fn direct_copy(
        &self,
        names: &[SecretName],
        source: &str,
        target: &str,
    ) -> Result<BatchCopyResult> {
        let (names, source_store, target_store) = self.prepare(names, source, target)?;
        info!(source, target, count = names.len(), "starting direct copy");

        let outcomes: Vec<CopyOutcome> = stream::iter(names)
            .map(|name| {
                let source_store = Arc::clone(&source_store);
                let target_store = Arc::clone(&target_store);
                async move {
                    match copy_one(source_store.as_ref(), target_store.as_ref(), &name).await {
                        Ok(record) => copied(name, &record),
                        Err(e) => {
                            warn!(secret = %name, error = %e, "copy failed");
                            CopyOutcome::failed(name, e)
                        }
                    }
                }
            })
            .buffered(self.max_in_flight)
            .collect()
            .await;

        let result = BatchCopyResult::from_outcomes(outcomes);
        info!(
            succeeded = result.success_count,
            failed = result.failure_count,
            "direct copy finished"
        );
        Ok(result)
    }

    /// Load the current source value of every name, ready for editing.
    ///
    /// All reads finish before this returns. Names whose read fails are
    /// dropped from editing and reported through [`EditSession::warnings`];
    /// they still appear as failed outcomes once the session is committed.
    ///
    /// # Errors
    ///
    /// The batch preconditions of [`BatchCopier::direct_copy`], plus
    /// `Error::NothingToEdit` if no name could be loaded. No writes happen
    /// in either case.
    pub async fn load_for_edit(
        &self,
        names: &[SecretName],
        source: &str,
        target: &str,
    ) -> Result<EditSession> {
        let (names, source_store, target_store) = self.prepare(names, source, target)?;
        debug!(source, count = names.len(), "loading secrets for editing");

        let slots: Vec<Slot> = stream::iter(names)
            .map(|name| {
                let source_store = Arc::clone(&source_store);
                async move {
                    match source_store.get_current(&name).await {
                        Ok(record) => Slot::Loaded(LoadedSecret {
                            name,
                            original_value: Zeroizing::new(record.value),
                            updated_on: record.updated_on,
                        }),
                        Err(e) => {
                            warn!(secret = %name, error = %e, "could not load secret for editing");
                            Slot::Skipped(LoadWarning {
                                secret_name: name,
                                message: e.to_string(),
                            })
                        }
                    }
                }
            })
            .buffered(self.max_in_flight)
            .collect()
            .await;

        if !slots.iter().any(|s| matches!(s, Slot::Loaded(_))) {
            return Err(Error::NothingToEdit);
        }

        Ok(EditSession {
            source: source.to_string(),
            target: target.to_string(),
            target_store,
            slots,
            max_in_flight: self.max_in_flight,
        })
    }

    /// Load every name from `source`, apply `edits`, and write to `target`.
    ///
    /// Equivalent to [`BatchCopier::load_for_edit`] followed by
    /// [`EditSession::commit`].
    pub async fn edit_then_copy(
        &self,
        names: &[SecretName],
        source: &str,
        target: &str,
        edits: &HashMap<SecretName, String>,
    ) -> Result<BatchCopyResult> {
        let session = self.load_for_edit(names, source, target).await?;
        Ok(session.commit(edits).await)
    }
}

async fn copy_one(
    source: &dyn SecretStore,
    target: &dyn SecretStore,
    name: &str,
) -> Result<SecretRecord> {
    let current = source.get_current(name).await?;
    target.upsert(name, &current.value).await
}

fn copied(name: SecretName, record: &SecretRecord) -> CopyOutcome {
    let mut outcome = CopyOutcome::copied(name);
    if record.name_was_sanitized {
        outcome.message = format!("copied as {} (name was sanitized)", record.name);
    }
    outcome
}

/// A secret read from the source during the load phase.
pub struct LoadedSecret {
    pub name: SecretName,
    original_value: Zeroizing<String>,
    pub updated_on: DateTime<Utc>,
}

impl LoadedSecret {
    /// The value read from the source.
    pub fn original_value(&self) -> &str {
        &self.original_value
    }
}

impl std::fmt::Debug for LoadedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedSecret")
            .field("name", &self.name)
            .field("original_value", &"<redacted>")
            .field("updated_on", &self.updated_on)
            .finish()
    }
}

/// A name that could not be loaded and was dropped from editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    pub secret_name: SecretName,
    pub message: String,
}

#[derive(Debug)]
enum Slot {
    Loaded(LoadedSecret),
    Skipped(LoadWarning),
}

/// Loaded secrets awaiting edits, between the load and commit phases.
pub struct EditSession {
    source: EnvironmentId,
    target: EnvironmentId,
    target_store: Arc<dyn SecretStore>,
    // Input order; every selected name has exactly one slot.
    slots: Vec<Slot>,
    max_in_flight: usize,
}

impl std::fmt::Debug for EditSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditSession")
            .field("source", &self.source)
            .field("target", &self.target)
            .field("slots", &self.slots)
            .finish_non_exhaustive()
    }
}

impl EditSession {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Secrets available for editing, in input order.
    pub fn loaded(&self) -> impl Iterator<Item = &LoadedSecret> {
        self.slots.iter().filter_map(|s| match s {
            Slot::Loaded(loaded) => Some(loaded),
            Slot::Skipped(_) => None,
        })
    }

    /// Names dropped because their source read failed.
    pub fn warnings(&self) -> impl Iterator<Item = &LoadWarning> {
        self.slots.iter().filter_map(|s| match s {
            Slot::Loaded(_) => None,
            Slot::Skipped(warning) => Some(warning),
        })
    }

    /// Write every loaded secret to the target.
    ///
    /// Each name takes its value from `edits` when present and its loaded
    /// value otherwise. An empty value fails that item with
    /// `ValidationError`. Names dropped during loading are reported as
    /// failed outcomes without any write. Edits for names that were not
    /// loaded are ignored.
    pub async fn commit(self, edits: &HashMap<SecretName, String>) -> BatchCopyResult {
        let EditSession {
            source,
            target,
            target_store,
            slots,
            max_in_flight,
        } = self;
        info!(source = %source, target = %target, count = slots.len(), "committing edited copy");

        let outcomes: Vec<CopyOutcome> = stream::iter(slots)
            .map(|slot| {
                let target_store = Arc::clone(&target_store);
                async move {
                    match slot {
                        Slot::Skipped(warning) => {
                            CopyOutcome::failed(warning.secret_name, warning.message)
                        }
                        Slot::Loaded(loaded) => {
                            commit_one(target_store.as_ref(), loaded, edits).await
                        }
                    }
                }
            })
            .buffered(max_in_flight)
            .collect()
            .await;

        let result = BatchCopyResult::from_outcomes(outcomes);
        info!(
            succeeded = result.success_count,
            failed = result.failure_count,
            edited = result.edited_count(),
            "edited copy finished"
        );
        result
    }
}

async fn commit_one(
    target: &dyn SecretStore,
    loaded: LoadedSecret,
    edits: &HashMap<SecretName, String>,
) -> CopyOutcome {
    let value: &str = edits
        .get(&loaded.name)
        .map(String::as_str)
        .unwrap_or(loaded.original_value());

    if value.is_empty() {
        let e: Error = ValidationError::EmptyValue(loaded.name.clone()).into();
        warn!(secret = %loaded.name, error = %e, "copy failed");
        return CopyOutcome::failed(loaded.name, e);
    }

    let was_edited = value != loaded.original_value();
    match target.upsert(&loaded.name, value).await {
        Ok(record) => {
            let mut outcome = copied(loaded.name, &record).with_edited(was_edited);
            if was_edited && !record.name_was_sanitized {
                outcome.message = "copied with edits".to_string();
            }
            outcome
        }
        Err(e) => {
            warn!(secret = %loaded.name, error = %e, "copy failed");
            CopyOutcome::failed(loaded.name, e)
        }
    }
}
