//! BcryptHasher - bcrypt による PasswordHasher
//!
//! bcrypt の出力は `$2b$<cost>$<salt><hash>` 形式で salt を含むので、
//! 検証に必要な情報はハッシュ文字列だけで完結する。

use crate::domain::CoreResult;
use crate::ports::PasswordHasher;

/// bcrypt の cost の下限・上限
pub const MIN_COST: u32 = 4;
pub const MAX_COST: u32 = 31;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// cost の範囲チェックは AppBuilder 側で行う
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptHasher {
    /// 呼び出しごとに bcrypt が新しい salt を生成する
    fn hash(&self, password: &str) -> CoreResult<String> {
        Ok(bcrypt::hash(password, self.cost)?)
    }

    fn verify(&self, password: &str, hash: &str) -> CoreResult<bool> {
        Ok(bcrypt::verify(password, hash)?)
    }
}
