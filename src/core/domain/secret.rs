//! Secret records and versions.
//!
//! Versions are append-only: every write produces a new version and earlier
//! versions are never mutated or removed. Values are redacted from `Debug`
//! output so records can be traced safely.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::types::{SecretName, SecretValue, VersionId};

/// The current version of a secret in one environment.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretRecord {
    pub name: SecretName,
    pub value: SecretValue,
    pub version: VersionId,
    pub updated_on: DateTime<Utc>,
    /// Set by the store when it rewrote the requested name on write.
    #[serde(default)]
    pub name_was_sanitized: bool,
}

impl std::fmt::Debug for SecretRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretRecord")
            .field("name", &self.name)
            .field("value", &"<redacted>")
            .field("version", &self.version)
            .field("updated_on", &self.updated_on)
            .field("name_was_sanitized", &self.name_was_sanitized)
            .finish()
    }
}

/// One immutable snapshot of a secret, including its value.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretVersion {
    pub version: VersionId,
    pub enabled: bool,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<DateTime<Utc>>,
    pub value: SecretValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
}

impl SecretVersion {
    /// A fresh enabled version holding `value`, created now.
    pub fn new(version: impl Into<VersionId>, value: impl Into<SecretValue>) -> Self {
        let now = Utc::now();
        Self {
            version: version.into(),
            enabled: true,
            created_on: now,
            updated_on: now,
            expires_on: None,
            value: value.into(),
            content_type: None,
            tags: BTreeMap::new(),
        }
    }

    /// Whether two versions carry the same content.
    ///
    /// Identity and timestamps are ignored; value, content type and tags
    /// are compared.
    pub fn same_content(&self, other: &SecretVersion) -> bool {
        self.value == other.value
            && self.content_type == other.content_type
            && self.tags == other.tags
    }

    /// This version without its value.
    pub fn summary(&self) -> SecretVersionSummary {
        SecretVersionSummary {
            version: self.version.clone(),
            enabled: self.enabled,
            created_on: self.created_on,
            updated_on: self.updated_on,
            expires_on: self.expires_on,
            content_type: self.content_type.clone(),
            tags: self.tags.clone(),
        }
    }
}

impl std::fmt::Debug for SecretVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretVersion")
            .field("version", &self.version)
            .field("enabled", &self.enabled)
            .field("created_on", &self.created_on)
            .field("updated_on", &self.updated_on)
            .field("expires_on", &self.expires_on)
            .field("value", &"<redacted>")
            .field("content_type", &self.content_type)
            .field("tags", &self.tags)
            .finish()
    }
}

/// Version metadata as returned by a version listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretVersionSummary {
    pub version: VersionId,
    pub enabled: bool,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
}

impl SecretVersionSummary {
    /// First eight characters of the version id, for display.
    pub fn short_id(&self) -> &str {
        let end = self
            .version
            .char_indices()
            .nth(8)
            .map(|(i, _)| i)
            .unwrap_or(self.version.len());
        &self.version[..end]
    }
}

/// Result of restoring a historical version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestoreOutcome {
    /// Id of the version created by the restore.
    pub new_version: VersionId,
}
