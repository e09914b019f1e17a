//! Errors - エラー型と分類
//!
//! 想定内の失敗（空入力・重複・未登録・id なし）と、
//! ストレージ由来の致命的な失敗（I/O・JSON・hash）を同じ enum で返し、
//! `is_fatal()` で呼び出し側が分けられるようにする。

use std::fmt;
use thiserror::Error;

use super::ids::TaskId;

/// 必須入力の種類（BlankField の対象）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Password,
    Description,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Username => "username",
            Field::Password => "password",
            Field::Description => "description",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{0} cannot be blank")]
    BlankField(Field),

    #[error("username '{0}' is already taken")]
    DuplicateUser(String),

    #[error("no such user '{0}'")]
    UnknownUser(String),

    #[error("task {0} not found")]
    NotFound(TaskId),

    #[error("invalid task id '{0}'")]
    InvalidIdFormat(String),

    #[error("no task id left after {0}")]
    IdExhausted(TaskId),

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt document: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

impl CoreError {
    /// ストレージ障害など、呼び出し側で回復できない失敗か
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            CoreError::Io(_) | CoreError::Codec(_) | CoreError::Hash(_)
        )
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
