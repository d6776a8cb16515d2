//! Diff engine.
//!
//! Compares the secret namespaces of two environments. Both name lists are
//! fetched concurrently and the comparison is all-or-nothing: if either
//! listing fails there is no partial result.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::core::domain::DiffResult;
use crate::core::registry::EnvironmentRegistry;
use crate::core::store::SecretStore;
use crate::core::types::SecretName;
use crate::error::{Error, Result, StoreError};

/// Computes [`DiffResult`]s between registered environments.
#[derive(Debug, Clone, Copy)]
pub struct DiffEngine<'a> {
    registry: &'a EnvironmentRegistry,
}

impl<'a> DiffEngine<'a> {
    pub fn new(registry: &'a EnvironmentRegistry) -> Self {
        Self { registry }
    }

    /// Partition the names of `source` and `target`.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidInput` if `source == target`
    /// - `Error::UnknownEnvironment` if either id is not registered
    /// - `StoreError::Unavailable` if either listing fails
    #[instrument(skip(self))]
    pub async fn compare(&self, source: &str, target: &str) -> Result<DiffResult> {
        let (source_store, target_store) = self.registry.pair(source, target)?;

        let (source_names, target_names) = tokio::try_join!(
            list_names(source_store, source),
            list_names(target_store, target)
        )?;

        let diff = DiffResult::partition(source_names, target_names);
        let summary = diff.summary();
        debug!(
            only_in_source = summary.only_in_source_count,
            only_in_target = summary.only_in_target_count,
            in_both = summary.in_both_count,
            "comparison complete"
        );
        Ok(diff)
    }
}

async fn list_names(store: Arc<dyn SecretStore>, env: &str) -> Result<Vec<SecretName>> {
    store.list_names().await.map_err(|e| match e {
        Error::Store(StoreError::Unavailable(reason)) => {
            StoreError::Unavailable(format!("{}: {}", env, reason)).into()
        }
        other => StoreError::Unavailable(format!("{}: {}", env, other)).into(),
    })
}
