//! taskkeeper-core
//!
//! Core building blocks for the taskkeeper CLI.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, account, task, state, outcome, errors）
//! - **ports**: 抽象化レイヤー（AccountRepository, TaskListRepository, PasswordHasher）
//! - **impls**: 実装（JsonFileStore, InMemoryStore, BcryptHasher）
//! - **app**: アプリケーションロジック（CredentialStore, TaskStore, Session, AppBuilder）
//! - **config**: StoreConfig

pub mod app;
pub mod config;
pub mod domain;
pub mod impls;
pub mod ports;

pub use app::{App, AppBuilder, BuildError, CredentialStore, Session, TaskStore};
pub use config::StoreConfig;
pub use domain::{CoreError, CoreResult, Field, MarkOutcome, Task, TaskId, TaskStatus, Username};
