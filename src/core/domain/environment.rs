//! Environment type.
//!
//! One isolated namespace of secrets, reachable through one store client.

use serde::{Deserialize, Serialize};

use crate::core::types::EnvironmentId;

/// A named environment backed by one secret store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// Unique identifier (e.g. `prod`).
    pub id: EnvironmentId,
    /// Display name (e.g. `Production`).
    pub name: String,
    /// Where the environment's store lives (`memory:` or `file:<path>`).
    #[serde(rename = "store")]
    pub store_locator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display color hint for terminal output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Environment {
    /// Create an environment with no description or color.
    pub fn new(
        id: impl Into<EnvironmentId>,
        name: impl Into<String>,
        store_locator: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            store_locator: store_locator.into(),
            description: None,
            color: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
