//! Environment registry.
//!
//! Maps environment ids to their description and an open store client.
//! Built once per session and not mutated by the sync engine.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::core::config::Config;
use crate::core::domain::Environment;
use crate::core::store::{self, SecretStore};
use crate::core::types::EnvironmentId;
use crate::error::{ConfigError, Error, Result};

/// Known environments and their store clients.
#[derive(Default, Clone)]
pub struct EnvironmentRegistry {
    environments: Vec<Environment>,
    stores: HashMap<EnvironmentId, Arc<dyn SecretStore>>,
}

impl std::fmt::Debug for EnvironmentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvironmentRegistry")
            .field("environments", &self.environments)
            .finish_non_exhaustive()
    }
}

impl EnvironmentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a store for every environment in `config`.
    ///
    /// Relative `file:` locators resolve against `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnsupportedStore` for an unknown locator and
    /// `ConfigError::DuplicateEnvironment` for a repeated id.
    pub fn from_config(config: &Config, base_dir: &Path) -> Result<Self> {
        let mut registry = Self::new();
        for env in &config.environments {
            let store = store::open(&env.store_locator, base_dir)?;
            registry.register(env.clone(), store)?;
        }
        debug!(environments = registry.len(), "registry loaded");
        Ok(registry)
    }

    /// Add an environment with an already-open store.
    pub fn register(&mut self, env: Environment, store: Arc<dyn SecretStore>) -> Result<()> {
        if self.stores.contains_key(&env.id) {
            return Err(ConfigError::DuplicateEnvironment(env.id).into());
        }
        self.stores.insert(env.id.clone(), store);
        self.environments.push(env);
        Ok(())
    }

    /// Builder form of [`EnvironmentRegistry::register`].
    pub fn with(mut self, env: Environment, store: Arc<dyn SecretStore>) -> Result<Self> {
        self.register(env, store)?;
        Ok(self)
    }

    /// Environments in registration order.
    pub fn environments(&self) -> &[Environment] {
        &self.environments
    }

    /// # Errors
    ///
    /// Returns `Error::UnknownEnvironment` if `id` is not registered.
    pub fn get(&self, id: &str) -> Result<&Environment> {
        self.environments
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| Error::UnknownEnvironment(id.to_string()))
    }

    /// Store client for `id`.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownEnvironment` if `id` is not registered.
    pub fn store(&self, id: &str) -> Result<Arc<dyn SecretStore>> {
        self.stores
            .get(id)
            .cloned()
            .ok_or_else(|| Error::UnknownEnvironment(id.to_string()))
    }

    /// Stores for a source/target pair, checking the pair is usable.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if both ids are equal (checked first)
    /// and `Error::UnknownEnvironment` if either is not registered.
    pub fn pair(
        &self,
        source: &str,
        target: &str,
    ) -> Result<(Arc<dyn SecretStore>, Arc<dyn SecretStore>)> {
        if source == target {
            return Err(Error::InvalidInput(format!(
                "source and target environments must differ (both are '{}')",
                source
            )));
        }
        Ok((self.store(source)?, self.store(target)?))
    }

    pub fn len(&self) -> usize {
        self.environments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.environments.is_empty()
    }
}
