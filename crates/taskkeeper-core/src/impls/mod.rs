//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **JsonFileStore**: data_dir 配下の JSON 文書（本番用）
//! - **InMemoryStore**: 書き込み回数を数えるテスト用の正本
//! - **BcryptHasher**: bcrypt による PasswordHasher

pub mod bcrypt_hasher;
pub mod inmem_store;
pub mod json_file;

// 主要な型を再エクスポート
pub use self::bcrypt_hasher::BcryptHasher;
pub use self::inmem_store::InMemoryStore;
pub use self::json_file::JsonFileStore;
