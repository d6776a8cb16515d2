//! Comparison report export shape.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::domain::{DiffResult, DiffSummary, Environment};
use crate::core::types::{EnvironmentId, SecretName};

/// Identity of one side of a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentRef {
    pub id: EnvironmentId,
    pub name: String,
}

impl From<&Environment> for EnvironmentRef {
    fn from(env: &Environment) -> Self {
        Self {
            id: env.id.clone(),
            name: env.name.clone(),
        }
    }
}

/// A point-in-time comparison, as written by `compare --export`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub compared_at: DateTime<Utc>,
    pub source: EnvironmentRef,
    pub target: EnvironmentRef,
    pub summary: DiffSummary,
    pub only_in_source: Vec<SecretName>,
    pub only_in_target: Vec<SecretName>,
    pub in_both: Vec<SecretName>,
}

impl ComparisonReport {
    pub fn new(
        diff: &DiffResult,
        source: &Environment,
        target: &Environment,
        compared_at: DateTime<Utc>,
    ) -> Self {
        Self {
            compared_at,
            source: source.into(),
            target: target.into(),
            summary: diff.summary(),
            only_in_source: diff.only_in_source().iter().cloned().collect(),
            only_in_target: diff.only_in_target().iter().cloned().collect(),
            in_both: diff.in_both().iter().cloned().collect(),
        }
    }

    /// Default export file name: `comparison-<source>-vs-<target>-<millis>.json`.
    pub fn file_name(&self) -> String {
        format!(
            "comparison-{}-vs-{}-{}.json",
            self.source.id,
            self.target.id,
            self.compared_at.timestamp_millis()
        )
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
