//! AppBuilder - アプリケーションの構築とワイヤリング
//!
//! # 学習ポイント
//! - Builder パターンの実装
//! - 起動時検証（Fail-fast 設計）
//! - グローバルな「現在のストア」を持たず、構築したストアを所有権で渡す

use std::path::PathBuf;

use crate::config::StoreConfig;
use crate::domain::{CoreError, CoreResult, Username};
use crate::impls::bcrypt_hasher::{MAX_COST, MIN_COST};
use crate::impls::{BcryptHasher, JsonFileStore};
use crate::ports::{AccountRepository, PasswordHasher, TaskListRepository};

use super::credentials::CredentialStore;
use super::session::Session;

/// AppBuilder は JSON ファイルストアの App を構築
///
/// # 使用例
/// ```ignore
/// let app = AppBuilder::new()
///     .data_dir("./data")
///     .bcrypt_cost(12)
///     .build()?;
/// ```
///
/// # Fail-fast 設計
/// - build() 時に bcrypt cost の範囲をチェック
/// - data_dir が作れなければ BuildError を返す
pub struct AppBuilder {
    config: StoreConfig,
}

/// BuildError はアプリケーション構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("bcrypt cost {0} is out of range (4..=31)")]
    InvalidCost(u32),

    #[error("cannot open data directory: {0}")]
    Store(#[from] CoreError),
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            config: StoreConfig::default(),
        }
    }

    pub fn from_config(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.data_dir = dir.into();
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.config.bcrypt_cost = cost;
        self
    }

    pub fn build(self) -> Result<App, BuildError> {
        let cost = self.config.bcrypt_cost;
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(BuildError::InvalidCost(cost));
        }
        let store = JsonFileStore::open(&self.config.data_dir)?;
        tracing::info!(data_dir = %store.root().display(), cost, "store ready");
        Ok(App::with_parts(store, BcryptHasher::new(cost))?)
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// App は登録・ログインの入口
///
/// タスク操作は `login` が返す Session 経由でしか行えない。
pub struct App<R = JsonFileStore, H = BcryptHasher> {
    credentials: CredentialStore<R, H>,
    store: R,
}

impl<R, H> App<R, H>
where
    R: AccountRepository + TaskListRepository + Clone,
    H: PasswordHasher,
{
    /// 任意のストア・ハッシャーで組み立てる（テストや別実装用）
    pub fn with_parts(store: R, hasher: H) -> CoreResult<Self> {
        Ok(Self {
            credentials: CredentialStore::new(store.clone(), hasher)?,
            store,
        })
    }

    pub fn credentials(&self) -> &CredentialStore<R, H> {
        &self.credentials
    }

    pub fn register(&self, username: &str, password: &str) -> CoreResult<()> {
        self.credentials.register(username, password)
    }

    /// 認証に成功したら Session を返す
    ///
    /// - `Ok(Some(_))`: 成功
    /// - `Ok(None)`: パスワード違い
    /// - `Err(UnknownUser)`: 未登録
    pub fn login(&self, username: &str, password: &str) -> CoreResult<Option<Session<R>>> {
        if !self.credentials.verify(username, password)? {
            return Ok(None);
        }
        let username = Username::parse(username)?;
        Ok(Some(Session::start(self.store.clone(), username)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskId;
    use crate::impls::InMemoryStore;
    use tempfile::TempDir;

    #[test]
    fn test_build_success() {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().join("nested").join("data");

        let app = AppBuilder::new()
            .data_dir(&data_dir)
            .bcrypt_cost(MIN_COST)
            .build();

        assert!(app.is_ok());
        assert!(data_dir.is_dir());
    }

    #[test]
    fn test_build_invalid_cost() {
        let dir = TempDir::new().unwrap();
        for cost in [0, MIN_COST - 1, MAX_COST + 1] {
            let app = AppBuilder::new().data_dir(dir.path()).bcrypt_cost(cost).build();
            assert!(matches!(app, Err(BuildError::InvalidCost(c)) if c == cost));
        }
    }

    #[test]
    fn login_scopes_tasks_to_user() {
        let store = InMemoryStore::new();
        let app = App::with_parts(&store, BcryptHasher::new(MIN_COST)).unwrap();
        app.register("alice", "pw-a").unwrap();
        app.register("bob", "pw-b").unwrap();

        let alice = app.login("alice", "pw-a").unwrap().unwrap();
        alice.tasks().add("Buy milk").unwrap();
        assert_eq!(alice.logout().as_str(), "alice");

        let bob = app.login("bob", "pw-b").unwrap().unwrap();
        assert!(bob.tasks().list().unwrap().is_empty());
        assert!(matches!(
            bob.tasks().mark_completed(TaskId::FIRST),
            Err(CoreError::NotFound(_))
        ));
    }

    #[test]
    fn login_outcomes() {
        let store = InMemoryStore::new();
        let app = App::with_parts(&store, BcryptHasher::new(MIN_COST)).unwrap();
        app.register("alice", "pw").unwrap();

        assert!(app.login("alice", "nope").unwrap().is_none());
        assert!(matches!(
            app.login("carol", "pw"),
            Err(CoreError::UnknownUser(_))
        ));
        let session = app.login("alice", "pw").unwrap().unwrap();
        assert_eq!(session.username().as_str(), "alice");
    }

    #[test]
    fn state_survives_a_restart() {
        let dir = TempDir::new().unwrap();
        {
            let app = AppBuilder::new()
                .data_dir(dir.path())
                .bcrypt_cost(MIN_COST)
                .build()
                .unwrap();
            app.register("alice", "pw").unwrap();
            let session = app.login("alice", "pw").unwrap().unwrap();
            session.tasks().add("Buy milk").unwrap();
        }

        let app = AppBuilder::from_config(StoreConfig {
            data_dir: dir.path().to_path_buf(),
            bcrypt_cost: MIN_COST,
        })
        .build()
        .unwrap();
        let session = app.login("alice", "pw").unwrap().unwrap();
        let tasks = session.tasks().list().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].description, "Buy milk");
    }
}
