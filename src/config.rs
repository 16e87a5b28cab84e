//! goimp 設定
//!
//! ローカルプレフィックスの解決を担う。優先順位は `--local` フラグ、
//! 環境変数 `GOIMP_LOCAL`、設定ファイル `.goimp.json`（カレント →
//! ホームの順に探索）。どこにも無ければ空（Local 分類は無効）。

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GoimpError, Result};

/// 設定ファイル名
const CONFIG_FILE: &str = ".goimp.json";
/// ローカルプレフィックスの環境変数名
const LOCAL_ENV: &str = "GOIMP_LOCAL";

/// `.goimp.json` のルート構造
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// ローカルパッケージのプレフィックス
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local: Option<String>,
}

impl Config {
    /// カレントディレクトリ → ホームディレクトリの順で設定ファイルを探す
    ///
    /// どちらにも無ければデフォルト設定を返す。
    pub fn load() -> Result<Self> {
        let cwd = PathBuf::from(CONFIG_FILE);
        if cwd.exists() {
            return Self::load_from(&cwd);
        }
        if let Some(home) = home_config_path() {
            if home.exists() {
                return Self::load_from(&home);
            }
        }
        Ok(Self::default())
    }

    /// 指定パスから設定を読み込む（存在しなければデフォルト）
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| GoimpError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| GoimpError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// ホームディレクトリ側の設定ファイルパス
fn home_config_path() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok().filter(|home| !home.is_empty())?;
    Some(PathBuf::from(home).join(CONFIG_FILE))
}

/// 環境変数からローカルプレフィックスを取得（空文字列は未設定扱い）
fn local_from_env() -> Option<String> {
    std::env::var(LOCAL_ENV).ok().filter(|value| !value.is_empty())
}

/// ローカルプレフィックスを解決する
///
/// フラグ指定は空文字列でも最優先（Local 分類を明示的に無効化できる）。
pub fn resolve_local_prefix(flag: Option<&str>) -> Result<String> {
    if let Some(prefix) = flag {
        return Ok(prefix.to_string());
    }
    if let Some(prefix) = local_from_env() {
        return Ok(prefix);
    }
    Ok(Config::load()?.local.unwrap_or_default())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
