//! StoreConfig - ストアの設定
//!
//! CLI 側でファイル・環境変数・フラグから組み立てて AppBuilder に渡す。

use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreConfig {
    /// users.json と tasks_*.json を置くディレクトリ
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// bcrypt の cost（4..=31）
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_bcrypt_cost() -> u32 {
    bcrypt::DEFAULT_COST
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}
