//! Secret store clients.
//!
//! A [`SecretStore`] is the narrow CRUD+versioning interface to one
//! environment's remote store. The core only ever talks to stores through
//! this trait; it owns no storage of its own.
//!
//! ## Adding a New Store Backend
//!
//! 1. Implement the `SecretStore` trait
//! 2. Add the implementation in a new file (e.g., `azure.rs`, `vault.rs`)
//! 3. Teach [`open`] its locator scheme
//!
//! ## Example
//!
//! ```ignore
//! struct Remote { /* ... */ }
//!
//! #[async_trait]
//! impl SecretStore for Remote {
//!     async fn list_names(&self) -> Result<Vec<SecretName>> {
//!         // List from the remote namespace
//!     }
//!     // ...
//! }
//! ```

use async_trait::async_trait;

use crate::core::domain::{RestoreOutcome, SecretRecord, SecretVersion, SecretVersionSummary};
use crate::core::types::SecretName;
use crate::error::Result;

mod backend;
#[cfg(test)]
pub(crate) mod faulty;
mod fs;
mod memory;
mod namespace;

pub use backend::open;
pub use fs::Filesystem;
pub use memory::Memory;

/// Client for one environment's secret store.
///
/// Every write (upsert or restore) appends a new version; implementations
/// must never mutate or drop earlier versions. Implementations must not log
/// secret values. Retries, if any, belong here and not in callers.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Names of every live secret.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the store cannot be reached.
    async fn list_names(&self) -> Result<Vec<SecretName>>;

    /// Current version of `name`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the secret is absent or deleted.
    async fn get_current(&self, name: &str) -> Result<SecretRecord>;

    /// Version metadata for `name`, newest first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the secret is absent.
    async fn list_versions(&self, name: &str) -> Result<Vec<SecretVersionSummary>>;

    /// Full content of one version.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::VersionNotFound` if `version` is not one of
    /// `name`'s versions.
    async fn get_version(&self, name: &str, version: &str) -> Result<SecretVersion>;

    /// Create or overwrite `name` with `value` as a new current version.
    ///
    /// The returned record carries the stored name and reports whether the
    /// store had to sanitize the requested one.
    async fn upsert(&self, name: &str, value: &str) -> Result<SecretRecord>;

    /// Append a new current version whose content equals `version`'s.
    async fn restore(&self, name: &str, version: &str) -> Result<RestoreOutcome>;

    /// Soft-delete `name`. Recovery is the store's concern.
    async fn delete(&self, name: &str) -> Result<()>;
}
