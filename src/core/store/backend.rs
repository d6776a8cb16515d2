//! Backend selection from an environment's store locator.
//!
//! `memory:` opens a fresh process-local store; `file:<path>` opens a JSON
//! document store, resolving relative paths against `base_dir` (the
//! directory holding the configuration file).

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use super::{Filesystem, Memory, SecretStore};
use crate::core::constants::{FILE_SCHEME, MEMORY_SCHEME};
use crate::error::{ConfigError, Result};

/// Open the store a locator points at.
///
/// # Errors
///
/// Returns `ConfigError::UnsupportedStore` for unknown schemes or an empty
/// file path.
pub fn open(locator: &str, base_dir: &Path) -> Result<Arc<dyn SecretStore>> {
    let locator = locator.trim();

    if locator == MEMORY_SCHEME {
        debug!("using memory store");
        return Ok(Arc::new(Memory::new()));
    }

    if let Some(path) = locator.strip_prefix(FILE_SCHEME) {
        if path.is_empty() {
            return Err(ConfigError::UnsupportedStore(locator.to_string()).into());
        }
        let path = Path::new(path);
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            base_dir.join(path)
        };
        debug!(path = %path.display(), "using file store");
        return Ok(Arc::new(Filesystem::new(path)));
    }

    Err(ConfigError::UnsupportedStore(locator.to_string()).into())
}
