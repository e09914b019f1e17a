//! App - アプリケーション層
//!
//! このモジュールは、ports を組み合わせてアプリケーションロジックを実装します。
//!
//! # 主要コンポーネント
//! - **CredentialStore**: 登録と認証（username の一意性、bcrypt）
//! - **TaskStore**: 1 ユーザー分のタスクリストの採番・更新・削除
//! - **Session**: ログイン済みユーザーに束縛された TaskStore
//! - **AppBuilder**: 設定からのストア構築とワイヤリング

pub mod builder;
pub mod credentials;
pub mod session;
pub mod tasks;

// 主要な型を再エクスポート
pub use self::builder::{App, AppBuilder, BuildError};
pub use self::credentials::CredentialStore;
pub use self::session::Session;
pub use self::tasks::TaskStore;
