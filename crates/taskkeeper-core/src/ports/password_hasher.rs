//! PasswordHasher port - パスワードハッシュの抽象化

use crate::domain::CoreResult;

/// PasswordHasher は salt 付きの遅い一方向ハッシュを提供
///
/// # 要件
/// - `hash` は呼び出しごとに新しい salt を生成する
/// - `verify` の比較はタイミングで一致度が漏れないこと
pub trait PasswordHasher {
    fn hash(&self, password: &str) -> CoreResult<String>;

    fn verify(&self, password: &str, hash: &str) -> CoreResult<bool>;
}

impl<H: PasswordHasher + ?Sized> PasswordHasher for &H {
    fn hash(&self, password: &str) -> CoreResult<String> {
        (**self).hash(password)
    }

    fn verify(&self, password: &str, hash: &str) -> CoreResult<bool> {
        (**self).verify(password, hash)
    }
}
