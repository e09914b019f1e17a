//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! app 層（CredentialStore / TaskStore）はこれらの trait にだけ依存し、
//! JSON ファイルやインメモリなどの実装の詳細を知りません。
//!
//! # 設計原則
//! - 保存は常に「文書全体の置き換え」（部分更新はしない）
//! - 文書が存在しないことは空と同じ（エラーではない）
//! - 読み出しはキャッシュしない（呼び出し時点の内容が正）

pub mod account_repository;
pub mod password_hasher;
pub mod task_list_repository;

// 主要な trait を再エクスポート
pub use self::account_repository::AccountRepository;
pub use self::password_hasher::PasswordHasher;
pub use self::task_list_repository::TaskListRepository;
