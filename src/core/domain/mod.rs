//! Domain types.

mod batch;
mod diff;
mod environment;
mod report;
mod secret;
mod selection;

pub use batch::{BatchCopyResult, BatchStatus, CopyOutcome};
pub use diff::{DiffResult, DiffSummary, EntryStatus};
pub use environment::Environment;
pub use report::{ComparisonReport, EnvironmentRef};
pub use secret::{RestoreOutcome, SecretRecord, SecretVersion, SecretVersionSummary};
pub use selection::{matches_filter, Selection};
