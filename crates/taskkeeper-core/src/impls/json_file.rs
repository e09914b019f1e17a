//! JsonFileStore - data_dir 配下の JSON 文書
//!
//! # レイアウト
//! - `<data_dir>/users.json`: `{"alice": "$2b$12$..."}`
//! - `<data_dir>/tasks_<username>.json`: `[{"id": 1, "desc": "...", "status": "Pending"}]`
//!
//! # 書き込み
//! 同じディレクトリに一時ファイルを作って書き、fsync してから rename で置き換え、
//! 最後にディレクトリを fsync して rename 自体を永続化する。
//! 途中で落ちても元の文書はそのまま残る。

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;

use crate::domain::{AccountSet, CoreResult, Task, Username};
use crate::ports::{AccountRepository, TaskListRepository};

const USERS_FILE: &str = "users.json";
const TASKS_PREFIX: &str = "tasks_";
const TASKS_SUFFIX: &str = ".json";

/// 出力形式（users は 1 行、tasks はインデント 2）
#[derive(Debug, Clone, Copy)]
enum Layout {
    Compact,
    Pretty,
}

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// data_dir がなければ作成する
    pub fn open(root: impl Into<PathBuf>) -> CoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        tracing::debug!(root = %root.display(), "opened json store");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn users_path(&self) -> PathBuf {
        self.root.join(USERS_FILE)
    }

    /// username はパーセントエンコードしてファイル名に埋め込む
    ///
    /// 英数字だけの名前は `tasks_alice.json` のようにそのまま。
    /// `/` などを含む名前でも data_dir の外には出ない。
    pub fn tasks_path(&self, username: &Username) -> PathBuf {
        let encoded = urlencoding::encode(username.as_str());
        self.root
            .join(format!("{TASKS_PREFIX}{encoded}{TASKS_SUFFIX}"))
    }

    fn read_document<T: DeserializeOwned + Default>(path: &Path) -> CoreResult<T> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(T::default()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn write_document<T: Serialize + ?Sized>(
        &self,
        path: &Path,
        value: &T,
        layout: Layout,
    ) -> CoreResult<()> {
        let tmp = NamedTempFile::new_in(&self.root)?;
        {
            let mut writer = BufWriter::new(tmp.as_file());
            match layout {
                Layout::Compact => serde_json::to_writer(&mut writer, value)?,
                Layout::Pretty => serde_json::to_writer_pretty(&mut writer, value)?,
            }
            writer.flush()?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| e.error)?;
        self.sync_root()
    }

    #[cfg(unix)]
    fn sync_root(&self) -> CoreResult<()> {
        fs::File::open(&self.root)?.sync_all()?;
        Ok(())
    }

    // ディレクトリを File として開けないプラットフォームでは rename までで終わり
    #[cfg(not(unix))]
    fn sync_root(&self) -> CoreResult<()> {
        Ok(())
    }
}

impl AccountRepository for JsonFileStore {
    fn load_accounts(&self) -> CoreResult<AccountSet> {
        Self::read_document(&self.users_path())
    }

    fn save_accounts(&self, accounts: &AccountSet) -> CoreResult<()> {
        self.write_document(&self.users_path(), accounts, Layout::Compact)
    }
}

impl TaskListRepository for JsonFileStore {
    fn load_tasks(&self, username: &Username) -> CoreResult<Vec<Task>> {
        Self::read_document(&self.tasks_path(username))
    }

    fn save_tasks(&self, username: &Username, tasks: &[Task]) -> CoreResult<()> {
        self.write_document(&self.tasks_path(username), tasks, Layout::Pretty)
    }
}
