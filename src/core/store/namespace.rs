//! Versioned secret namespace shared by the bundled backends.
//!
//! Holds every secret of one environment with its full version history,
//! oldest first. The memory backend keeps one in a lock; the file backend
//! loads, mutates and writes one back per call.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::core::domain::{RestoreOutcome, SecretRecord, SecretVersion, SecretVersionSummary};
use crate::core::types::SecretName;
use crate::error::{Result, StoreError, ValidationError};

/// All versions of one secret, oldest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct Entry {
    #[serde(default)]
    deleted_on: Option<DateTime<Utc>>,
    versions: Vec<SecretVersion>,
}

impl Entry {
    fn is_deleted(&self) -> bool {
        self.deleted_on.is_some()
    }

    fn current(&self) -> Option<&SecretVersion> {
        self.versions.last()
    }

    /// Creation time for the next version, strictly after the current one.
    fn next_created_on(&self) -> DateTime<Utc> {
        let now = Utc::now();
        match self.current() {
            Some(last) if now <= last.created_on => last.created_on + Duration::microseconds(1),
            _ => now,
        }
    }

    fn append(&mut self, mut version: SecretVersion) -> &SecretVersion {
        let created_on = self.next_created_on();
        version.created_on = created_on;
        version.updated_on = created_on;
        self.deleted_on = None;
        self.versions.push(version);
        &self.versions[self.versions.len() - 1]
    }
}

/// Rewrite a requested name into the store's allowed alphabet.
///
/// Names may contain ASCII letters, digits and dashes; anything else
/// becomes a dash.
pub(crate) fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '-' })
        .collect()
}

fn new_version_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// One environment's secrets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct Namespace {
    #[serde(default)]
    secrets: BTreeMap<SecretName, Entry>,
}

impl Namespace {
    fn live(&self, name: &str) -> Result<&Entry> {
        self.secrets
            .get(name)
            .filter(|e| !e.is_deleted() && !e.versions.is_empty())
            .ok_or_else(|| StoreError::NotFound(name.to_string()).into())
    }

    fn live_mut(&mut self, name: &str) -> Result<&mut Entry> {
        self.secrets
            .get_mut(name)
            .filter(|e| !e.is_deleted() && !e.versions.is_empty())
            .ok_or_else(|| StoreError::NotFound(name.to_string()).into())
    }

    /// Names of all secrets that are not soft-deleted, sorted.
    pub(crate) fn list_names(&self) -> Vec<SecretName> {
        self.secrets
            .iter()
            .filter(|(_, e)| !e.is_deleted() && !e.versions.is_empty())
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub(crate) fn current(&self, name: &str) -> Result<SecretRecord> {
        let entry = self.live(name)?;
        let current = entry
            .current()
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        Ok(SecretRecord {
            name: name.to_string(),
            value: current.value.clone(),
            version: current.version.clone(),
            updated_on: current.updated_on,
            name_was_sanitized: false,
        })
    }

    /// Version summaries, newest first.
    pub(crate) fn versions(&self, name: &str) -> Result<Vec<SecretVersionSummary>> {
        let entry = self.live(name)?;
        Ok(entry.versions.iter().rev().map(|v| v.summary()).collect())
    }

    pub(crate) fn version(&self, name: &str, version: &str) -> Result<SecretVersion> {
        let entry = self.live(name)?;
        entry
            .versions
            .iter()
            .find(|v| v.version == version)
            .cloned()
            .ok_or_else(|| {
                StoreError::VersionNotFound {
                    name: name.to_string(),
                    version: version.to_string(),
                }
                .into()
            })
    }

    /// Create or overwrite `name` with a new current version.
    ///
    /// A soft-deleted secret is revived with its history intact.
    pub(crate) fn upsert(&mut self, name: &str, value: &str) -> Result<SecretRecord> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if value.is_empty() {
            return Err(ValidationError::EmptyValue(name.to_string()).into());
        }

        let stored_name = sanitize_name(name);
        let entry = self.secrets.entry(stored_name.clone()).or_default();
        let version = entry.append(SecretVersion::new(new_version_id(), value));

        Ok(SecretRecord {
            name: stored_name.clone(),
            value: version.value.clone(),
            version: version.version.clone(),
            updated_on: version.updated_on,
            name_was_sanitized: stored_name != name,
        })
    }

    /// Append a copy of `version`'s content as the new current version.
    pub(crate) fn restore(&mut self, name: &str, version: &str) -> Result<RestoreOutcome> {
        let source = self.version(name, version)?;
        let entry = self.live_mut(name)?;

        let mut restored = SecretVersion::new(new_version_id(), source.value);
        restored.content_type = source.content_type;
        restored.tags = source.tags;

        let created = entry.append(restored);
        Ok(RestoreOutcome {
            new_version: created.version.clone(),
        })
    }

    /// Soft-delete `name`. Its history is kept.
    pub(crate) fn delete(&mut self, name: &str) -> Result<()> {
        let entry = self.live_mut(name)?;
        entry.deleted_on = Some(Utc::now());
        Ok(())
    }

    /// Mutable access to a stored version, for seeding fixtures.
    #[cfg(test)]
    pub(crate) fn version_mut(&mut self, name: &str, version: &str) -> Option<&mut SecretVersion> {
        self.secrets
            .get_mut(name)?
            .versions
            .iter_mut()
            .find(|v| v.version == version)
    }
}
