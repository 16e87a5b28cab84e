//! ファイル処理オーケストレーション
//!
//! 入力の読み込み、importブロックの正規化、出力先（stdout / 書き戻し /
//! diff）の振り分けまでを担う。

use std::io::Read;
use std::path::Path;

use crate::cli::Cli;
use crate::config;
use crate::diff;
use crate::error::{GoimpError, Result};
use crate::imports::Classifier;
use crate::output::{self, RunSummary};
use crate::source;
use crate::walk;

/// 標準入力処理時の表示名
const STDIN_NAME: &str = "<standard input>";

/// 1入力の処理結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// importブロックを整形した（-w なら書き戻し済み）
    Reformatted,
    /// すでに正規形だった
    Unchanged,
    /// importブロックが無かった
    Skipped,
}

/// 実行オプション
#[derive(Debug, Clone)]
pub struct Options {
    pub local_prefix: String,
    pub write: bool,
    pub diff: bool,
}

/// CLIエントリポイント
///
/// パス指定が無ければ標準入力をフィルタとして処理する。ディレクトリは
/// 再帰的に走査し、明示されたファイルは拡張子を問わず処理する。
pub fn run(cli: Cli) -> Result<()> {
    let local_prefix = config::resolve_local_prefix(cli.local.as_deref())?;
    let options = Options {
        local_prefix,
        write: cli.write,
        diff: cli.diff,
    };

    if cli.paths.is_empty() {
        return process_stdin(&options);
    }

    let mut summary = RunSummary::default();
    for path in &cli.paths {
        if path.is_dir() {
            for file in walk::collect_go_files(path)? {
                summary.record(process_file(&file, &options)?);
            }
        } else {
            summary.record(process_file(path, &options)?);
        }
    }

    if options.write {
        eprintln!("{}", summary.line());
    }

    Ok(())
}

/// 1ファイルを処理する
///
/// フラグ無しのときは整形結果（変更が無くても全文）を stdout へ出す。
pub fn process_file(path: &Path, options: &Options) -> Result<Outcome> {
    let src = std::fs::read_to_string(path).map_err(|source| GoimpError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let display = path.display().to_string();
    let classifier = Classifier::new(&options.local_prefix);

    let Some(result) = source::rewrite(&src, &classifier) else {
        output::skip_notice(&display);
        return Ok(Outcome::Skipped);
    };

    let changed = result != src;

    if changed && options.write {
        std::fs::write(path, &result).map_err(|source| GoimpError::WriteFile {
            path: path.to_path_buf(),
            source,
        })?;
    }
    if changed && options.diff {
        print_diff(&src, &result, &display)?;
    }
    if !options.write && !options.diff {
        print!("{result}");
    }

    Ok(if changed {
        Outcome::Reformatted
    } else {
        Outcome::Unchanged
    })
}

/// 標準入力をフィルタとして処理する
///
/// ブロックの無い入力もそのまま通す。パイプの途中でデータを失わない。
fn process_stdin(options: &Options) -> Result<()> {
    if options.write {
        return Err(GoimpError::WriteOnStdin);
    }

    let mut src = String::new();
    std::io::stdin().read_to_string(&mut src)?;

    let classifier = Classifier::new(&options.local_prefix);
    let Some(result) = source::rewrite(&src, &classifier) else {
        output::skip_notice(STDIN_NAME);
        if !options.diff {
            print!("{src}");
        }
        return Ok(());
    };

    if options.diff {
        if result != src {
            print_diff(&src, &result, STDIN_NAME)?;
        }
    } else {
        print!("{result}");
    }

    Ok(())
}

/// diff モードの出力
fn print_diff(before: &str, after: &str, display_path: &str) -> Result<()> {
    let patch = diff::unified(before, after, display_path)?;
    let display_path = display_path.replace('\\', "/");
    println!("diff -u {display_path}.orig {display_path}");
    print!("{patch}");
    Ok(())
}

#[cfg(test)]
#[path = "process_test.rs"]
mod tests;
