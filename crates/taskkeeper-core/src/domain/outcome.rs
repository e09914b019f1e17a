//! Outcome model: result of marking a task completed.
//!
//! "already completed" is an ordinary result, not an error: the caller only
//! decides which message to print.

use serde::{Deserialize, Serialize};

/// Result of `TaskStore::mark_completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarkOutcome {
    /// Pending -> Completed happened and was persisted.
    Completed,

    /// The task was already Completed; nothing was written.
    AlreadyCompleted,
}

impl MarkOutcome {
    /// Did this call change persisted state?
    pub fn changed(self) -> bool {
        matches!(self, MarkOutcome::Completed)
    }
}
