use serde::{Deserialize, Serialize};

use super::errors::{CoreError, Field};
use super::ids::TaskId;
use super::outcome::MarkOutcome;
use super::state::TaskStatus;

/// ユーザーのタスク 1 件
///
/// 保存形式: `{"id": 1, "desc": "Buy milk", "status": "Pending"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,

    #[serde(rename = "desc")]
    pub description: String,

    #[serde(default)]
    pub status: TaskStatus,
}

impl Task {
    /// Pending のタスクを作る。空の description は `BlankField(Description)`
    pub fn new(id: TaskId, description: impl Into<String>) -> Result<Self, CoreError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(CoreError::BlankField(Field::Description));
        }
        Ok(Self {
            id,
            description,
            status: TaskStatus::Pending,
        })
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_terminal()
    }

    /// Pending -> Completed。既に Completed なら何も変えない
    pub fn complete(&mut self) -> MarkOutcome {
        if self.is_completed() {
            return MarkOutcome::AlreadyCompleted;
        }
        self.status = TaskStatus::Completed;
        MarkOutcome::Completed
    }
}

/// 次に振る id = 現在のリストの最大 id + 1（空なら 1）
///
/// カウンタは持たない。最大 id のタスクを消すとその id は再利用される。
/// 最大 id が u64::MAX なら `IdExhausted`。
pub fn next_task_id(tasks: &[Task]) -> Result<TaskId, CoreError> {
    match tasks.iter().map(|t| t.id).max() {
        None => Ok(TaskId::FIRST),
        Some(max) => max.next().ok_or(CoreError::IdExhausted(max)),
    }
}
