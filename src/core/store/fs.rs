//! File-backed secret store.
//!
//! Keeps one environment's namespace as a JSON document on disk. Every call
//! re-reads the document and writes replace it atomically via a temporary
//! file and rename. Read-modify-write cycles are serialized per `Filesystem`
//! handle and its clones only; concurrent writers in other processes, or
//! separately constructed handles on the same path, can lose versions.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::namespace::Namespace;
use super::SecretStore;
use crate::core::domain::{RestoreOutcome, SecretRecord, SecretVersion, SecretVersionSummary};
use crate::core::types::SecretName;
use crate::error::{Result, StoreError};

/// JSON document store at a fixed path.
#[derive(Debug, Clone)]
pub struct Filesystem {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    lock: Arc<Mutex<()>>,
}

impl Filesystem {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, e: std::io::Error) -> StoreError {
        StoreError::Unavailable(format!("{}: {}", self.path.display(), e))
    }

    /// Read the namespace; a missing file is an empty namespace.
    async fn load(&self) -> Result<Namespace> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => {
                let namespace = serde_json::from_str(&contents).map_err(|e| {
                    StoreError::Corrupt(format!("{}: {}", self.path.display(), e))
                })?;
                Ok(namespace)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "store file missing, starting empty");
                Ok(Namespace::default())
            }
            Err(e) => Err(self.unavailable(e).into()),
        }
    }

    async fn save(&self, namespace: &Namespace) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.unavailable(e))?;
        }

        let contents = serde_json::to_string_pretty(namespace)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, contents)
            .await
            .map_err(|e| self.unavailable(e))?;

        // Restrict permissions on the store file (Unix only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tokio::fs::set_permissions(&tmp, std::fs::Permissions::from_mode(0o600))
                .await
                .map_err(|e| self.unavailable(e))?;
        }

        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| self.unavailable(e))?;
        Ok(())
    }

    /// Apply `f` to the namespace and persist it if `f` succeeded.
    async fn update<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Namespace) -> Result<T>,
    {
        let _guard = self.lock.lock().await;
        let mut namespace = self.load().await?;
        let value = f(&mut namespace)?;
        self.save(&namespace).await?;
        Ok(value)
    }
}

#[async_trait]
impl SecretStore for Filesystem {
    async fn list_names(&self) -> Result<Vec<SecretName>> {
        Ok(self.load().await?.list_names())
    }

    async fn get_current(&self, name: &str) -> Result<SecretRecord> {
        self.load().await?.current(name)
    }

    async fn list_versions(&self, name: &str) -> Result<Vec<SecretVersionSummary>> {
        self.load().await?.versions(name)
    }

    async fn get_version(&self, name: &str, version: &str) -> Result<SecretVersion> {
        self.load().await?.version(name, version)
    }

    async fn upsert(&self, name: &str, value: &str) -> Result<SecretRecord> {
        let record = self.update(|ns| ns.upsert(name, value)).await?;
        info!(secret = %record.name, version = %record.version, "secret stored");
        Ok(record)
    }

    async fn restore(&self, name: &str, version: &str) -> Result<RestoreOutcome> {
        let outcome = self.update(|ns| ns.restore(name, version)).await?;
        info!(secret = name, from = version, to = %outcome.new_version, "version restored");
        Ok(outcome)
    }

    async fn delete(&self, name: &str) -> Result<()> {
        self.update(|ns| ns.delete(name)).await?;
        info!(secret = name, "secret deleted");
        Ok(())
    }
}
