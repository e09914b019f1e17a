//! State - タスクの状態
//!
//! 状態遷移:
//! - Pending -> Completed
//! - Completed -> Completed は no-op（AlreadyCompleted を返す）

use serde::{Deserialize, Serialize};
use std::fmt;

/// TaskStatus はタスクの状態を表現
///
/// JSON 上は `"Pending"` / `"Completed"` の文字列。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

impl TaskStatus {
    /// これ以上遷移しない状態か
    pub fn is_terminal(self) -> bool {
        matches!(self, TaskStatus::Completed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
