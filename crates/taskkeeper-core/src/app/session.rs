//! Session - ログイン中のユーザーに束縛されたハンドル
//!
//! `App::login` からしか作れないので、Session を持っていること自体が
//! 認証済みであることの証明になる。

use crate::domain::Username;
use crate::ports::TaskListRepository;

use super::tasks::TaskStore;

pub struct Session<R> {
    tasks: TaskStore<R>,
}

impl<R: TaskListRepository> Session<R> {
    pub(crate) fn start(repo: R, username: Username) -> Self {
        tracing::info!(%username, "session started");
        Self {
            tasks: TaskStore::new(repo, username),
        }
    }

    pub fn username(&self) -> &Username {
        self.tasks.owner()
    }

    /// このユーザーのタスクだけを扱う TaskStore
    pub fn tasks(&self) -> &TaskStore<R> {
        &self.tasks
    }

    /// セッションを終了してユーザー名を返す
    pub fn logout(self) -> Username {
        let username = self.tasks.owner().clone();
        tracing::info!(%username, "session ended");
        username
    }
}
