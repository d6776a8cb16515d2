//! Error types.
//!
//! One crate-wide [`Error`] with domain sub-enums converted via `#[from]`.
//! Whole-operation failures (bad environment ids, empty selections) surface
//! as `Err`; per-item failures inside a batch copy are captured into that
//! item's outcome instead and never reach this type's callers.

use thiserror::Error;

/// Configuration file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("not initialized: run `vaultsync init` first")]
    NotInitialized,

    #[error("already initialized: {0} exists")]
    AlreadyInitialized(String),

    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("duplicate environment id: {0}")]
    DuplicateEnvironment(String),

    #[error("unsupported store locator: {0} (expected `memory:` or `file:<path>`)")]
    UnsupportedStore(String),
}

/// Errors reported by a secret store client.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store could not be reached or failed to answer.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("secret not found: {0}")]
    NotFound(String),

    #[error("version {version} of secret {name} not found")]
    VersionNotFound { name: String, version: String },

    #[error("store document is corrupt: {0}")]
    Corrupt(String),
}

/// Input validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("secret name cannot be empty")]
    EmptyName,

    #[error("value for {0} cannot be empty")]
    EmptyValue(String),

    #[error("invalid edit `{0}`: expected NAME=VALUE")]
    MalformedEdit(String),
}

/// Crate-wide error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A precondition on the whole operation failed (same source and
    /// target, empty selection).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown environment: {0}")]
    UnknownEnvironment(String),

    /// The selection names secrets the current comparison cannot copy.
    #[error("cannot copy {}: not present in source", .0.join(", "))]
    InvalidSelection(Vec<String>),

    #[error("none of the selected secrets could be loaded for editing")]
    NothingToEdit,

    /// A batch finished with at least one failed item.
    #[error("{failed} of {total} secret(s) failed to copy")]
    BatchIncomplete { failed: usize, total: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl Error {
    /// Whether this error means a secret or version was absent.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::Store(StoreError::NotFound(_)) | Error::Store(StoreError::VersionNotFound { .. })
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
