//! Batch copy results.

use serde::Serialize;

use crate::core::types::SecretName;

/// Result of copying one secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyOutcome {
    pub secret_name: SecretName,
    pub success: bool,
    /// Human-readable result; the error text on failure.
    pub message: String,
    /// Whether the written value differs from the loaded one. Only set by
    /// edited copies that reached the write.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub was_edited: Option<bool>,
}

impl CopyOutcome {
    pub fn copied(name: impl Into<SecretName>) -> Self {
        Self {
            secret_name: name.into(),
            success: true,
            message: "copied".to_string(),
            was_edited: None,
        }
    }

    pub fn failed(name: impl Into<SecretName>, reason: impl std::fmt::Display) -> Self {
        Self {
            secret_name: name.into(),
            success: false,
            message: reason.to_string(),
            was_edited: None,
        }
    }

    pub fn with_edited(mut self, was_edited: bool) -> Self {
        self.was_edited = Some(was_edited);
        self
    }

    pub fn was_edited(&self) -> bool {
        self.was_edited.unwrap_or(false)
    }
}

/// How a batch ended, from the caller's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BatchStatus {
    /// Every item succeeded.
    Success,
    /// Some items succeeded and some failed.
    PartialSuccess,
    /// No item succeeded.
    Failure,
}

/// Aggregated result of a batch copy.
///
/// Outcomes are in the order of the input names, one per distinct name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchCopyResult {
    pub success_count: usize,
    pub failure_count: usize,
    pub outcomes: Vec<CopyOutcome>,
}

impl BatchCopyResult {
    pub fn from_outcomes(outcomes: Vec<CopyOutcome>) -> Self {
        let success_count = outcomes.iter().filter(|o| o.success).count();
        Self {
            success_count,
            failure_count: outcomes.len() - success_count,
            outcomes,
        }
    }

    pub fn status(&self) -> BatchStatus {
        if self.failure_count == 0 {
            BatchStatus::Success
        } else if self.success_count == 0 {
            BatchStatus::Failure
        } else {
            BatchStatus::PartialSuccess
        }
    }

    /// Number of successful items whose value was changed before writing.
    pub fn edited_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.success && o.was_edited())
            .count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &CopyOutcome> {
        self.outcomes.iter().filter(|o| !o.success)
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }
}
