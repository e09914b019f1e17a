//! Domain identifiers (strongly-typed IDs).
//!
//! - `Username`: アカウントの主キー。空白のみの名前は作れない
//! - `TaskId`: ユーザーのタスクリスト内で一意な正の整数
//!
//! 文字列や u64 をそのまま渡すと username と description、
//! task id と件数などを取り違えやすいので newtype で包む。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::{CoreError, Field};

/// アカウントの主キー
///
/// 前後の空白の除去は入力側（CLI）の責務。ここでは空かどうかだけを見る。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// 空（または空白のみ）なら `BlankField(Username)`
    pub fn parse(raw: impl Into<String>) -> Result<Self, CoreError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(CoreError::BlankField(Field::Username));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Identifier of a Task within one user's list.
///
/// JSON 上は素の整数（`"id": 3`）として保存される。
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// 空リストの次に振られる id
    pub const FIRST: TaskId = TaskId(1);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// max + 1。u64::MAX の次はない
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl From<u64> for TaskId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// 入力文字列のパース
///
/// 整数として読めない入力は `InvalidIdFormat` になり、
/// 存在しない id（`NotFound`）とは区別される。
impl FromStr for TaskId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::InvalidIdFormat(s.to_string()));
        }
        // 負数や u64 に収まらない数も整数としては正しい。
        // どのタスクとも一致しない 0 に落とし、NotFound として扱わせる
        if trimmed.starts_with('-') {
            return Ok(Self(0));
        }
        Ok(Self(digits.parse().unwrap_or(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("3", 3)]
    #[case::padded("  12 ", 12)]
    #[case::zero("0", 0)]
    #[case::negative("-4", 0)]
    #[case::plus_sign("+5", 5)]
    #[case::beyond_u64("99999999999999999999", 0)]
    #[case::huge_negative("-99999999999999999999", 0)]
    fn task_id_parses_integers(#[case] input: &str, #[case] expected: u64) {
        let id: TaskId = input.parse().unwrap();
        assert_eq!(id.get(), expected);
    }

    #[rstest]
    #[case::word("abc")]
    #[case::float("1.5")]
    #[case::empty("")]
    #[case::sign_only("-")]
    #[case::inner_space("1 2")]
    fn task_id_rejects_non_integers(#[case] input: &str) {
        let err = input.parse::<TaskId>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidIdFormat(raw) if raw == input));
    }

    #[test]
    fn next_stops_at_u64_max() {
        assert_eq!(TaskId::new(41).next(), Some(TaskId::new(42)));
        assert_eq!(TaskId::new(u64::MAX).next(), None);
    }

    #[test]
    fn task_id_serializes_as_plain_integer() {
        let s = serde_json::to_string(&TaskId::new(7)).unwrap();
        assert_eq!(s, "7");
    }

    #[rstest]
    #[case::empty("")]
    #[case::spaces("   ")]
    fn blank_username_is_rejected(#[case] input: &str) {
        let err = Username::parse(input).unwrap_err();
        assert!(matches!(err, CoreError::BlankField(Field::Username)));
    }

    #[test]
    fn username_keeps_its_text() {
        let name = Username::parse("alice").unwrap();
        assert_eq!(name.as_str(), "alice");
        assert_eq!(name.to_string(), "alice");
    }
}
