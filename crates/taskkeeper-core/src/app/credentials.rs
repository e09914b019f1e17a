//! CredentialStore - 登録と認証
//!
//! # 不変条件
//! - username はストア全体で一意
//! - 保存するのは bcrypt ハッシュのみ（平文は保存しない）
//! - register は accounts 文書を書き終えてから成功を返す

use crate::domain::{Account, CoreError, CoreResult, Field, Username};
use crate::ports::{AccountRepository, PasswordHasher};

/// 未登録ユーザーの検証でも同じコストを払うための比較対象
const DECOY_PASSWORD: &str = "taskkeeper-decoy";

pub struct CredentialStore<R, H> {
    repo: R,
    hasher: H,
    decoy_hash: String,
}

impl<R: AccountRepository, H: PasswordHasher> CredentialStore<R, H> {
    /// 未登録ユーザー用のダミーハッシュをここで 1 回だけ計算する
    pub fn new(repo: R, hasher: H) -> CoreResult<Self> {
        let decoy_hash = hasher.hash(DECOY_PASSWORD)?;
        Ok(Self {
            repo,
            hasher,
            decoy_hash,
        })
    }

    /// 新しいアカウントを登録する
    ///
    /// # Errors
    /// - `BlankField(Username | Password)`: どちらかが空
    /// - `DuplicateUser`: 既に登録済み（保存済みのハッシュは変わらない）
    /// - `Io` / `Codec` / `Hash`: 保存やハッシュ計算の失敗（文書は元のまま）
    pub fn register(&self, username: &str, password: &str) -> CoreResult<()> {
        let username = Username::parse(username)?;
        if password.is_empty() {
            return Err(CoreError::BlankField(Field::Password));
        }

        let mut accounts = self.repo.load_accounts()?;
        if accounts.contains(&username) {
            tracing::warn!(%username, "registration rejected: name taken");
            return Err(CoreError::DuplicateUser(username.to_string()));
        }

        let password_hash = self.hasher.hash(password)?;
        accounts.insert(Account {
            username: username.clone(),
            password_hash,
        });
        self.repo.save_accounts(&accounts)?;

        tracing::info!(%username, "registered account");
        Ok(())
    }

    /// パスワードを検証する
    ///
    /// 未登録なら `UnknownUser`。その場合もダミーのハッシュで検証を 1 回行い、
    /// 処理時間から未登録かどうかが分からないようにする。
    pub fn verify(&self, username: &str, password: &str) -> CoreResult<bool> {
        let accounts = self.repo.load_accounts()?;
        let stored = Username::parse(username)
            .ok()
            .and_then(|name| accounts.password_hash(&name).map(str::to_owned));

        match stored {
            Some(hash) => {
                let ok = self.hasher.verify(password, &hash)?;
                if !ok {
                    tracing::warn!(username, "login rejected: wrong password");
                }
                Ok(ok)
            }
            None => {
                let _ = self.hasher.verify(password, &self.decoy_hash)?;
                tracing::warn!(username, "login rejected: unknown user");
                Err(CoreError::UnknownUser(username.to_string()))
            }
        }
    }

    /// username が登録済みか
    pub fn contains(&self, username: &str) -> CoreResult<bool> {
        let Ok(username) = Username::parse(username) else {
            return Ok(false);
        };
        Ok(self.repo.load_accounts()?.contains(&username))
    }
}
