//! unified diff 生成
//!
//! gofmt 系ツールと同様、比較は外部の `diff -u` コマンドに委譲する。
//! 整形前後のテキストを一時ファイルに書き出して比較し、ヘッダ行の
//! 一時ファイル名を表示用パスに置き換える。

use std::io::Write;
use std::process::Command;

use tempfile::NamedTempFile;

use crate::error::{GoimpError, Result};

/// 整形前後の unified diff を返す
///
/// 差分が無ければ空文字列。`diff` は差分ありのとき非0で終了するが、
/// 出力が得られていれば失敗とは扱わない。
pub fn unified(before: &str, after: &str, display_path: &str) -> Result<String> {
    let old = write_temp(before)?;
    let new = write_temp(after)?;

    let output = Command::new("diff")
        .arg("-u")
        .arg(old.path())
        .arg(new.path())
        .output()?;

    if output.stdout.is_empty() {
        if output.status.success() {
            return Ok(String::new());
        }
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GoimpError::DiffCommand(stderr.trim().to_string()));
    }

    replace_temp_names(&String::from_utf8_lossy(&output.stdout), display_path)
}

/// ヘッダ2行の一時ファイル名を表示用パスに差し替える
///
/// タイムスタンプ（行末尾、最後のタブ以降）はそのまま残す。旧側には
/// `.orig` を付ける。
fn replace_temp_names(diff: &str, display_path: &str) -> Result<String> {
    let mut parts = diff.splitn(3, '\n');
    let (Some(old_header), Some(new_header), Some(rest)) =
        (parts.next(), parts.next(), parts.next())
    else {
        return Err(GoimpError::UnexpectedDiff(display_path.to_string()));
    };

    let old_stamp = old_header.rfind('\t').map(|at| &old_header[at..]).unwrap_or("");
    let new_stamp = new_header.rfind('\t').map(|at| &new_header[at..]).unwrap_or("");

    let path = display_path.replace('\\', "/");
    Ok(format!(
        "--- {path}.orig{old_stamp}\n+++ {path}{new_stamp}\n{rest}"
    ))
}

fn write_temp(content: &str) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new().prefix("goimp").tempfile()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

#[cfg(test)]
#[path = "diff_test.rs"]
mod tests;
