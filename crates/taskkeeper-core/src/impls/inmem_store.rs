//! InMemoryStore - テスト用の正本
//!
//! # 学習ポイント
//! - 単一スレッド前提なので Mutex ではなく RefCell / Cell で内部可変性を持つ
//! - 書き込み回数を数え、「書かなかったこと」をテストで確認できるようにする
//! - `fail_writes` で保存失敗（ディスクフルなど）を再現する

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io;

use crate::domain::{AccountSet, CoreError, CoreResult, Task, Username};
use crate::ports::{AccountRepository, TaskListRepository};

/// InMemoryStore は AccountRepository と TaskListRepository の両方を実装する
#[derive(Debug, Default)]
pub struct InMemoryStore {
    accounts: RefCell<AccountSet>,
    tasks: RefCell<HashMap<Username, Vec<Task>>>,
    account_writes: Cell<usize>,
    task_writes: Cell<usize>,
    fail_writes: Cell<bool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// save_accounts が成功した回数
    pub fn account_writes(&self) -> usize {
        self.account_writes.get()
    }

    /// save_tasks が成功した回数（全ユーザー合計）
    pub fn task_writes(&self) -> usize {
        self.task_writes.get()
    }

    /// true の間、すべての save が I/O エラーで失敗する
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    fn check_writable(&self) -> CoreResult<()> {
        if self.fail_writes.get() {
            return Err(CoreError::Io(io::Error::other("simulated write failure")));
        }
        Ok(())
    }
}

impl AccountRepository for InMemoryStore {
    fn load_accounts(&self) -> CoreResult<AccountSet> {
        Ok(self.accounts.borrow().clone())
    }

    fn save_accounts(&self, accounts: &AccountSet) -> CoreResult<()> {
        self.check_writable()?;
        *self.accounts.borrow_mut() = accounts.clone();
        self.account_writes.set(self.account_writes.get() + 1);
        Ok(())
    }
}

impl TaskListRepository for InMemoryStore {
    fn load_tasks(&self, username: &Username) -> CoreResult<Vec<Task>> {
        Ok(self
            .tasks
            .borrow()
            .get(username)
            .cloned()
            .unwrap_or_default())
    }

    fn save_tasks(&self, username: &Username, tasks: &[Task]) -> CoreResult<()> {
        self.check_writable()?;
        self.tasks
            .borrow_mut()
            .insert(username.clone(), tasks.to_vec());
        self.task_writes.set(self.task_writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskId;

    #[test]
    fn absent_list_is_empty() {
        let store = InMemoryStore::new();
        let bob = Username::parse("bob").unwrap();
        assert!(store.load_tasks(&bob).unwrap().is_empty());
        assert!(store.load_accounts().unwrap().is_empty());
    }

    #[test]
    fn failed_write_keeps_previous_state() {
        let store = InMemoryStore::new();
        let bob = Username::parse("bob").unwrap();
        let first = vec![Task::new(TaskId::FIRST, "one").unwrap()];
        store.save_tasks(&bob, &first).unwrap();

        store.set_fail_writes(true);
        let err = store.save_tasks(&bob, &[]).unwrap_err();
        assert!(err.is_fatal());

        assert_eq!(store.load_tasks(&bob).unwrap(), first);
        assert_eq!(store.task_writes(), 1);
    }
}
