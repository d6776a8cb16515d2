//! Version history manager.
//!
//! Lists, inspects and restores versions of one secret in one environment.
//! Stateless between calls; every operation threads the environment id.

use tracing::{debug, info, warn};

use crate::core::domain::{RestoreOutcome, SecretVersion, SecretVersionSummary};
use crate::core::registry::EnvironmentRegistry;
use crate::error::Result;

/// Version operations over registered environments.
#[derive(Debug, Clone, Copy)]
pub struct VersionHistory<'a> {
    registry: &'a EnvironmentRegistry,
}

impl<'a> VersionHistory<'a> {
    pub fn new(registry: &'a EnvironmentRegistry) -> Self {
        Self { registry }
    }

    /// Versions of `name` in `env`, newest first.
    ///
    /// The store's order is returned as is. A listing whose first entry is
    /// older than a later one is logged but not re-sorted.
    ///
    /// # Errors
    ///
    /// `UnknownEnvironment`, `StoreError::NotFound` or
    /// `StoreError::Unavailable`.
    pub async fn list_versions(&self, env: &str, name: &str) -> Result<Vec<SecretVersionSummary>> {
        let store = self.registry.store(env)?;
        let versions = store.list_versions(name).await?;

        if let Some(first) = versions.first() {
            if versions.iter().any(|v| v.created_on > first.created_on) {
                warn!(env, secret = name, "store returned versions out of order");
            }
        }

        debug!(env, secret = name, count = versions.len(), "listed versions");
        Ok(versions)
    }

    /// Full content of one version, including disabled ones.
    ///
    /// # Errors
    ///
    /// `UnknownEnvironment`, `StoreError::VersionNotFound` or
    /// `StoreError::Unavailable`.
    pub async fn get_version(&self, env: &str, name: &str, version: &str) -> Result<SecretVersion> {
        let store = self.registry.store(env)?;
        store.get_version(name, version).await
    }

    /// Make `version` current again by appending a copy of its content.
    ///
    /// A new version is written even when `version` is already current.
    /// Nothing is deleted or reordered.
    ///
    /// # Errors
    ///
    /// `UnknownEnvironment`, `StoreError::VersionNotFound` or
    /// `StoreError::Unavailable`.
    pub async fn restore(&self, env: &str, name: &str, version: &str) -> Result<RestoreOutcome> {
        let store = self.registry.store(env)?;
        let outcome = store.restore(name, version).await?;
        info!(
            env,
            secret = name,
            from = version,
            to = %outcome.new_version,
            "restored version"
        );
        Ok(outcome)
    }
}
