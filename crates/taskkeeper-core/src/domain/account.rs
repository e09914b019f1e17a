//! Account - username と password hash の組
//!
//! アカウントは登録時に作られ、以後変更・削除されない。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ids::Username;

/// 登録済みアカウント
///
/// `password_hash` は bcrypt の出力文字列（salt 込み）。平文は持たない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub username: Username,
    pub password_hash: String,
}

/// username -> password hash の対応表（users.json の中身そのもの）
///
/// JSON object としてシリアライズされる: `{"alice": "$2b$12$..."}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountSet {
    accounts: BTreeMap<Username, String>,
}

impl AccountSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, username: &Username) -> bool {
        self.accounts.contains_key(username)
    }

    pub fn password_hash(&self, username: &Username) -> Option<&str> {
        self.accounts.get(username).map(String::as_str)
    }

    /// 既に存在する場合は何もせず false
    pub fn insert(&mut self, account: Account) -> bool {
        if self.accounts.contains_key(&account.username) {
            return false;
        }
        self.accounts.insert(account.username, account.password_hash);
        true
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
