//! Goファイル走査

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// ディレクトリ配下の整形対象 .go ファイルを収集する
///
/// 走査エラー（権限不足や存在しないパスなど）は中断して伝播する。
/// 隠しディレクトリには降りる。除外はファイル名だけで判定するため、
/// `.git` 配下の .go ファイルも対象になり得る。
pub fn collect_go_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_dir() && is_go_file(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// 整形対象の Go ファイルかどうか（隠しファイルは除外）
fn is_go_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    !name.starts_with('.') && name.ends_with(".go")
}

#[cfg(test)]
#[path = "walk_test.rs"]
mod tests;
