//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A secret name, unique within one environment (e.g. `db-password`).
///
/// Compared by exact, case-sensitive string equality.
pub type SecretName = String;

/// An environment identifier from the registry (e.g. `prod`).
pub type EnvironmentId = String;

/// An opaque version identifier assigned by the store.
pub type VersionId = String;

/// A plaintext secret value.
pub type SecretValue = String;
