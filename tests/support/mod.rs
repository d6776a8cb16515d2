//! Test support utilities for vaultsync integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use tempfile::TempDir;

/// Test environment with an isolated project directory.
///
/// No process-global state is mutated; child processes use `.current_dir()`
/// so tests can safely run in parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment with `.vaultsync.toml` written.
    pub fn init() -> Self {
        let t = Self::new();
        let output = t.init_cmd();
        assert!(
            output.status.success(),
            "Failed to initialize: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Create an initialized environment and seed secrets into `env`.
    pub fn with_secrets(env: &str, secrets: &[(&str, &str)]) -> Self {
        let t = Self::init();
        t.seed(env, secrets);
        t
    }

    /// Set every `(name, value)` pair in `env`.
    pub fn seed(&self, env: &str, secrets: &[(&str, &str)]) {
        for (name, value) in secrets {
            let output = self.set(env, name, value);
            assert!(
                output.status.success(),
                "Failed to set secret {}: {}",
                name,
                String::from_utf8_lossy(&output.stderr)
            );
        }
    }

    /// Path of a file inside the project directory.
    pub fn path(&self, name: &str) -> std::path::PathBuf {
        self.dir.path().join(name)
    }
}
