//! AccountRepository port - users 文書の読み書き

use crate::domain::{AccountSet, CoreResult};

/// AccountRepository はアカウント集合の正本（source of truth）
///
/// # 契約
/// - `load_accounts`: 文書がなければ空の集合を返す
/// - `save_accounts`: 集合全体を置き換える。失敗した場合は以前の内容が残る
pub trait AccountRepository {
    fn load_accounts(&self) -> CoreResult<AccountSet>;

    fn save_accounts(&self, accounts: &AccountSet) -> CoreResult<()>;
}

impl<R: AccountRepository + ?Sized> AccountRepository for &R {
    fn load_accounts(&self) -> CoreResult<AccountSet> {
        (**self).load_accounts()
    }

    fn save_accounts(&self, accounts: &AccountSet) -> CoreResult<()> {
        (**self).save_accounts(accounts)
    }
}
