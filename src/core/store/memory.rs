//! In-memory secret store for tests and throwaway environments.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use super::namespace::Namespace;
use super::SecretStore;
use crate::core::domain::{RestoreOutcome, SecretRecord, SecretVersion, SecretVersionSummary};
use crate::core::types::SecretName;
use crate::error::Result;

/// Process-local store. Contents are lost when the process exits.
///
/// Clones share the same underlying namespace.
#[derive(Debug, Clone, Default)]
pub struct Memory {
    data: Arc<RwLock<Namespace>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with one version per `(name, value)` pair.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a name or value is empty.
    pub fn with_secrets(secrets: &[(&str, &str)]) -> Result<Self> {
        let mut namespace = Namespace::default();
        for (name, value) in secrets {
            namespace.upsert(name, value)?;
        }
        Ok(Self {
            data: Arc::new(RwLock::new(namespace)),
        })
    }

    /// Mark a stored version disabled.
    #[cfg(test)]
    pub(crate) async fn disable(&self, name: &str, version: &str) {
        if let Some(v) = self.data.write().await.version_mut(name, version) {
            v.enabled = false;
        }
    }
}

#[async_trait]
impl SecretStore for Memory {
    async fn list_names(&self) -> Result<Vec<SecretName>> {
        Ok(self.data.read().await.list_names())
    }

    async fn get_current(&self, name: &str) -> Result<SecretRecord> {
        self.data.read().await.current(name)
    }

    async fn list_versions(&self, name: &str) -> Result<Vec<SecretVersionSummary>> {
        self.data.read().await.versions(name)
    }

    async fn get_version(&self, name: &str, version: &str) -> Result<SecretVersion> {
        self.data.read().await.version(name, version)
    }

    async fn upsert(&self, name: &str, value: &str) -> Result<SecretRecord> {
        let record = self.data.write().await.upsert(name, value)?;
        info!(secret = %record.name, version = %record.version, "secret stored");
        Ok(record)
    }

    async fn restore(&self, name: &str, version: &str) -> Result<RestoreOutcome> {
        let outcome = self.data.write().await.restore(name, version)?;
        info!(secret = name, from = version, to = %outcome.new_version, "version restored");
        Ok(outcome)
    }

    async fn delete(&self, name: &str) -> Result<()> {
        self.data.write().await.delete(name)?;
        info!(secret = name, "secret deleted");
        Ok(())
    }
}
