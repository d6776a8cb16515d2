//! Diff type.
//!
//! Represents the three-way partition of two environments' secret names.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::core::types::SecretName;

/// Which side(s) of a comparison a name was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EntryStatus {
    /// Present in the source only; copying creates it in the target.
    OnlyInSource,
    /// Present in both; copying overwrites the target.
    InBoth,
    /// Present in the target only; nothing to copy.
    OnlyInTarget,
}

impl EntryStatus {
    /// Whether a name with this status can be copied from the source.
    pub fn is_selectable(&self) -> bool {
        !matches!(self, EntryStatus::OnlyInTarget)
    }
}

/// Per-group counts of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffSummary {
    pub only_in_source_count: usize,
    pub only_in_target_count: usize,
    pub in_both_count: usize,
    pub total_in_source: usize,
    pub total_in_target: usize,
}

/// The partition of two name sets.
///
/// The three sets are pairwise disjoint and their union is the union of
/// both inputs. Sets are ordered so every rendering is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffResult {
    only_in_source: BTreeSet<SecretName>,
    only_in_target: BTreeSet<SecretName>,
    in_both: BTreeSet<SecretName>,
}

impl DiffResult {
    /// Partition `source` and `target` names by membership.
    ///
    /// Names are compared by exact, case-sensitive equality. Duplicates in
    /// either input are collapsed.
    pub fn partition<S, T>(source: S, target: T) -> Self
    where
        S: IntoIterator<Item = SecretName>,
        T: IntoIterator<Item = SecretName>,
    {
        let source: BTreeSet<_> = source.into_iter().collect();
        let mut only_in_target: BTreeSet<_> = target.into_iter().collect();

        let mut only_in_source = BTreeSet::new();
        let mut in_both = BTreeSet::new();

        for name in source {
            if only_in_target.remove(&name) {
                in_both.insert(name);
            } else {
                only_in_source.insert(name);
            }
        }

        Self {
            only_in_source,
            only_in_target,
            in_both,
        }
    }

    pub fn only_in_source(&self) -> &BTreeSet<SecretName> {
        &self.only_in_source
    }

    pub fn only_in_target(&self) -> &BTreeSet<SecretName> {
        &self.only_in_target
    }

    pub fn in_both(&self) -> &BTreeSet<SecretName> {
        &self.in_both
    }

    /// Number of names in the source environment.
    pub fn total_in_source(&self) -> usize {
        self.only_in_source.len() + self.in_both.len()
    }

    /// Number of names in the target environment.
    pub fn total_in_target(&self) -> usize {
        self.only_in_target.len() + self.in_both.len()
    }

    pub fn summary(&self) -> DiffSummary {
        DiffSummary {
            only_in_source_count: self.only_in_source.len(),
            only_in_target_count: self.only_in_target.len(),
            in_both_count: self.in_both.len(),
            total_in_source: self.total_in_source(),
            total_in_target: self.total_in_target(),
        }
    }

    /// Status of `name`, or `None` if neither side has it.
    pub fn status(&self, name: &str) -> Option<EntryStatus> {
        if self.only_in_source.contains(name) {
            Some(EntryStatus::OnlyInSource)
        } else if self.in_both.contains(name) {
            Some(EntryStatus::InBoth)
        } else if self.only_in_target.contains(name) {
            Some(EntryStatus::OnlyInTarget)
        } else {
            None
        }
    }

    /// Whether `name` can be copied from source to target.
    pub fn is_selectable(&self, name: &str) -> bool {
        self.status(name).is_some_and(|s| s.is_selectable())
    }

    /// Names that can be copied: `only_in_source ∪ in_both`, sorted.
    pub fn selectable(&self) -> impl Iterator<Item = &SecretName> {
        self.only_in_source.union(&self.in_both)
    }

    /// Every name with its status: source-only, then both, then target-only.
    pub fn entries(&self) -> impl Iterator<Item = (&SecretName, EntryStatus)> {
        self.only_in_source
            .iter()
            .map(|n| (n, EntryStatus::OnlyInSource))
            .chain(self.in_both.iter().map(|n| (n, EntryStatus::InBoth)))
            .chain(
                self.only_in_target
                    .iter()
                    .map(|n| (n, EntryStatus::OnlyInTarget)),
            )
    }

    /// Whether both environments hold exactly the same names.
    pub fn is_aligned(&self) -> bool {
        self.only_in_source.is_empty() && self.only_in_target.is_empty()
    }

    /// Total number of distinct names across both environments.
    pub fn len(&self) -> usize {
        self.only_in_source.len() + self.only_in_target.len() + self.in_both.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
