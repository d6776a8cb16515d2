//! Constants used throughout vaultsync.
//!
//! Centralizes magic strings and configuration values.

/// Configuration file name (.vaultsync.toml).
pub const CONFIG_FILE: &str = ".vaultsync.toml";

/// Environment variable overriding the configuration path.
pub const CONFIG_ENV: &str = "VAULTSYNC_CONFIG";

/// Directory holding file-backed stores created by `vaultsync init`.
pub const STORE_DIR: &str = ".vaultsync/stores";

/// Default bound on concurrently running items in one batch copy.
pub const DEFAULT_MAX_IN_FLIGHT: usize = 8;

/// Locator scheme for the process-local store.
pub const MEMORY_SCHEME: &str = "memory:";

/// Locator scheme for the JSON file store.
pub const FILE_SCHEME: &str = "file:";

/// Environments written by `vaultsync init`: (id, name, color).
pub const DEFAULT_ENVIRONMENTS: &[(&str, &str, &str)] = &[
    ("prod", "Production", "red"),
    ("staging", "Staging", "yellow"),
    ("dev", "Development", "green"),
];
