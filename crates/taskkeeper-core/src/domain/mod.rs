//! Domain model (ids, accounts, tasks, outcomes, errors).
//!
//! 永続化やプロンプトには依存しない純粋なモデルのみを置く。
//! - ids: Username / TaskId
//! - account: Account（username + password hash）
//! - task: Task と次 id の採番
//! - state: TaskStatus（Pending → Completed）
//! - outcome: MarkOutcome（完了マークの結果）
//! - errors: CoreError と Field

pub mod account;
pub mod errors;
pub mod ids;
pub mod outcome;
pub mod state;
pub mod task;

pub use self::account::{Account, AccountSet};
pub use self::errors::{CoreError, CoreResult, Field};
pub use self::ids::{TaskId, Username};
pub use self::outcome::MarkOutcome;
pub use self::state::TaskStatus;
pub use self::task::{Task, next_task_id};
