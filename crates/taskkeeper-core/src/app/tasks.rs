//! TaskStore - 1 ユーザー分のタスクリスト
//!
//! すべての操作は呼び出しのたびに文書を読み直し、
//! 変更があった場合だけリスト全体を書き戻す。

use crate::domain::{CoreError, CoreResult, MarkOutcome, Task, TaskId, Username, next_task_id};
use crate::ports::TaskListRepository;

/// owner に束縛された TaskStore
///
/// 他ユーザーのリストに触れる手段は持たない。
pub struct TaskStore<R> {
    repo: R,
    owner: Username,
}

impl<R: TaskListRepository> TaskStore<R> {
    pub fn new(repo: R, owner: Username) -> Self {
        Self { repo, owner }
    }

    pub fn owner(&self) -> &Username {
        &self.owner
    }

    /// 追加順のタスク一覧（文書がなければ空）
    pub fn list(&self) -> CoreResult<Vec<Task>> {
        let tasks = self.repo.load_tasks(&self.owner)?;
        tracing::debug!(owner = %self.owner, count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    pub fn get(&self, id: TaskId) -> CoreResult<Option<Task>> {
        Ok(self.list()?.into_iter().find(|t| t.id == id))
    }

    /// 末尾に Pending のタスクを追加する
    ///
    /// id は現在の最大 id + 1。空の description は書き込み前に `BlankField`、
    /// 最大 id が u64::MAX なら書き込み前に `IdExhausted`。
    pub fn add(&self, description: &str) -> CoreResult<Task> {
        let mut tasks = self.list()?;
        let task = Task::new(next_task_id(&tasks)?, description)?;
        tasks.push(task.clone());
        self.repo.save_tasks(&self.owner, &tasks)?;

        tracing::info!(owner = %self.owner, id = %task.id, "added task");
        Ok(task)
    }

    /// Pending -> Completed
    ///
    /// 既に Completed なら `AlreadyCompleted` を返し、書き込まない。
    pub fn mark_completed(&self, id: TaskId) -> CoreResult<MarkOutcome> {
        let mut tasks = self.list()?;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(CoreError::NotFound(id))?;

        let outcome = task.complete();
        if outcome.changed() {
            self.repo.save_tasks(&self.owner, &tasks)?;
            tracing::info!(owner = %self.owner, %id, "marked task completed");
        }
        Ok(outcome)
    }

    /// 削除して残りを書き戻す。存在しなければ何も書かずに `NotFound`
    pub fn delete(&self, id: TaskId) -> CoreResult<()> {
        let mut tasks = self.list()?;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == before {
            return Err(CoreError::NotFound(id));
        }
        self.repo.save_tasks(&self.owner, &tasks)?;

        tracing::info!(owner = %self.owner, %id, "deleted task");
        Ok(())
    }
}
