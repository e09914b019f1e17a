//! TaskListRepository port - ユーザーごとのタスク文書の読み書き

use crate::domain::{CoreResult, Task, Username};

/// TaskListRepository はユーザーごとのタスクリストの正本
///
/// # 契約
/// - `load_tasks`: 文書がなければ空のリスト。順序は保存時の順序のまま
/// - `save_tasks`: リスト全体を同期的に書き戻す。失敗した場合は以前の内容が残る
pub trait TaskListRepository {
    fn load_tasks(&self, username: &Username) -> CoreResult<Vec<Task>>;

    fn save_tasks(&self, username: &Username, tasks: &[Task]) -> CoreResult<()>;
}

impl<R: TaskListRepository + ?Sized> TaskListRepository for &R {
    fn load_tasks(&self, username: &Username) -> CoreResult<Vec<Task>> {
        (**self).load_tasks(username)
    }

    fn save_tasks(&self, username: &Username, tasks: &[Task]) -> CoreResult<()> {
        (**self).save_tasks(username, tasks)
    }
}
