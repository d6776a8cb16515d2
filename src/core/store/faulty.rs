//! Store double that fails selected calls, for unit tests.

use std::collections::HashSet;

use async_trait::async_trait;

use super::{Memory, SecretStore};
use crate::core::domain::{RestoreOutcome, SecretRecord, SecretVersion, SecretVersionSummary};
use crate::core::types::SecretName;
use crate::error::{Result, StoreError};

/// Wraps a [`Memory`] store and fails reads, writes or listings on demand.
#[derive(Debug, Clone, Default)]
pub(crate) struct Faulty {
    inner: Memory,
    fail_list: bool,
    fail_reads: HashSet<String>,
    fail_writes: HashSet<String>,
}

impl Faulty {
    pub(crate) fn new(inner: Memory) -> Self {
        Self {
            inner,
            ..Default::default()
        }
    }

    pub(crate) fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub(crate) fn failing_read(mut self, name: &str) -> Self {
        self.fail_reads.insert(name.to_string());
        self
    }

    pub(crate) fn failing_write(mut self, name: &str) -> Self {
        self.fail_writes.insert(name.to_string());
        self
    }

    fn check_read(&self, name: &str) -> Result<()> {
        if self.fail_reads.contains(name) {
            return Err(StoreError::Unavailable(format!("read of {} timed out", name)).into());
        }
        Ok(())
    }

    fn check_write(&self, name: &str) -> Result<()> {
        if self.fail_writes.contains(name) {
            return Err(StoreError::Unavailable(format!("write of {} timed out", name)).into());
        }
        Ok(())
    }
}

#[async_trait]
impl SecretStore for Faulty {
    async fn list_names(&self) -> Result<Vec<SecretName>> {
        if self.fail_list {
            return Err(StoreError::Unavailable("connection refused".to_string()).into());
        }
        self.inner.list_names().await
    }

    async fn get_current(&self, name: &str) -> Result<SecretRecord> {
        self.check_read(name)?;
        self.inner.get_current(name).await
    }

    async fn list_versions(&self, name: &str) -> Result<Vec<SecretVersionSummary>> {
        self.check_read(name)?;
        self.inner.list_versions(name).await
    }

    async fn get_version(&self, name: &str, version: &str) -> Result<SecretVersion> {
        self.check_read(name)?;
        self.inner.get_version(name, version).await
    }

    async fn upsert(&self, name: &str, value: &str) -> Result<SecretRecord> {
        self.check_write(name)?;
        self.inner.upsert(name, value).await
    }

    async fn restore(&self, name: &str, version: &str) -> Result<RestoreOutcome> {
        self.check_write(name)?;
        self.inner.restore(name, version).await
    }

    async fn delete(&self, name: &str) -> Result<()> {
        self.check_write(name)?;
        self.inner.delete(name).await
    }
}
