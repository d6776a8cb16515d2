//! Selection type.
//!
//! The set of compared names the operator has marked for copying. Pure
//! state: no I/O, no knowledge of environments.

use std::collections::BTreeSet;

use crate::core::domain::DiffResult;
use crate::core::types::SecretName;
use crate::error::{Error, Result};

/// Case-insensitive substring match used to narrow a selection.
///
/// An empty term matches every name.
pub fn matches_filter(name: &str, term: &str) -> bool {
    term.is_empty() || name.to_lowercase().contains(&term.to_lowercase())
}

/// Names marked for a batch copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    names: BTreeSet<SecretName>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `name`. Selecting an already-selected name is a no-op.
    ///
    /// The name is not checked against any comparison here; see
    /// [`Selection::validate`].
    pub fn select(&mut self, name: impl Into<SecretName>) {
        self.names.insert(name.into());
    }

    /// Unmark `name`. Deselecting an unselected name is a no-op.
    pub fn deselect(&mut self, name: &str) {
        self.names.remove(name);
    }

    /// Replace the selection with every copyable name of `diff` accepted by
    /// `predicate`.
    pub fn select_all<F>(&mut self, diff: &DiffResult, predicate: F)
    where
        F: Fn(&str) -> bool,
    {
        self.names = diff
            .selectable()
            .filter(|name| predicate(name))
            .cloned()
            .collect();
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SecretName> {
        self.names.iter()
    }

    /// Selected names in sorted order.
    pub fn to_vec(&self) -> Vec<SecretName> {
        self.names.iter().cloned().collect()
    }

    /// Check every selected name is copyable under `diff`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidSelection` listing the names that are only in
    /// the target or absent from the comparison altogether.
    pub fn validate(&self, diff: &DiffResult) -> Result<()> {
        let invalid: Vec<SecretName> = self
            .names
            .iter()
            .filter(|name| !diff.is_selectable(name))
            .cloned()
            .collect();

        if invalid.is_empty() {
            Ok(())
        } else {
            Err(Error::InvalidSelection(invalid))
        }
    }
}

impl FromIterator<SecretName> for Selection {
    fn from_iter<I: IntoIterator<Item = SecretName>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}
