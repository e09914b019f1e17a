//! Settings - 起動時の設定の組み立て
//!
//! 優先順位（後勝ち）:
//! 1. StoreConfig のデフォルト
//! 2. 設定ファイル（`--config`、なくてもよい）
//! 3. `TASKKEEPER_*` 環境変数
//! 4. コマンドラインフラグ

use std::path::PathBuf;

use clap::Parser;
use taskkeeper_core::StoreConfig;

#[derive(Debug, Parser)]
#[command(name = "taskkeeper", version, about = "Password-protected command-line task manager")]
pub struct Cli {
    /// Configuration file (TOML/JSON/YAML); ignored when missing
    #[arg(long, default_value = "taskkeeper.toml")]
    pub config: PathBuf,

    /// Directory holding users.json and tasks_<user>.json
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// bcrypt cost factor for new passwords
    #[arg(long)]
    pub bcrypt_cost: Option<u32>,
}

pub fn load(cli: &Cli) -> Result<StoreConfig, config::ConfigError> {
    let mut builder = config::Config::builder()
        .add_source(config::File::from(cli.config.as_path()).required(false))
        .add_source(config::Environment::with_prefix("TASKKEEPER").try_parsing(true));

    if let Some(dir) = &cli.data_dir {
        builder = builder.set_override("data_dir", dir.to_string_lossy().into_owned())?;
    }
    if let Some(cost) = cli.bcrypt_cost {
        builder = builder.set_override("bcrypt_cost", i64::from(cost))?;
    }

    builder.build()?.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("taskkeeper").chain(args.iter().copied()))
    }

    #[test]
    fn missing_config_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        let cfg = load(&cli(&["--config", missing.to_str().unwrap()])).unwrap();

        assert_eq!(cfg.bcrypt_cost, StoreConfig::default().bcrypt_cost);
    }

    #[test]
    fn file_values_are_overridden_by_flags() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("taskkeeper.toml");
        fs::write(&path, "data_dir = \"/srv/tasks\"\nbcrypt_cost = 10\n").unwrap();

        let from_file = load(&cli(&["--config", path.to_str().unwrap()])).unwrap();
        assert_eq!(from_file.data_dir, PathBuf::from("/srv/tasks"));
        assert_eq!(from_file.bcrypt_cost, 10);

        let overridden = load(&cli(&[
            "--config",
            path.to_str().unwrap(),
            "--data-dir",
            "/tmp/elsewhere",
            "--bcrypt-cost",
            "5",
        ]))
        .unwrap();
        assert_eq!(overridden.data_dir, PathBuf::from("/tmp/elsewhere"));
        assert_eq!(overridden.bcrypt_cost, 5);
    }
}
