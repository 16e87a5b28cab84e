//! Goソース中のimportブロック検出と書き換え

use crate::imports::{format_block, Classifier, ImportBlock};

/// importブロック開始マーカー
const IMPORT_START: &str = "\nimport (\n";
/// importブロック終了マーカー
const IMPORT_END: &str = "\n)\n";

/// importブロック本体のバイト範囲（マーカーを含まない）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSpan {
    /// 開始マーカー直後の位置
    pub start: usize,
    /// 閉じ括弧の直前にある改行の位置
    pub end: usize,
}

/// importブロックを検出する
///
/// 開始マーカーが無い、または対応する閉じマーカーが続かない場合は None。
/// 単純な部分文字列検索のため、文字列リテラルやコメント内に同じ形の
/// マーカーがあると誤検出する。
pub fn locate_block(src: &str) -> Option<ImportSpan> {
    let marker = src.find(IMPORT_START)?;
    let start = marker + IMPORT_START.len();
    let end = start + src[start..].find(IMPORT_END)?;
    Some(ImportSpan { start, end })
}

/// importブロックを正規形に置き換えたソース全体を返す
///
/// ブロックが見つからないソースは None（処理対象外）。ブロック以外の
/// 部分はバイト単位でそのまま保持する。
pub fn rewrite(src: &str, classifier: &Classifier<'_>) -> Option<String> {
    let span = locate_block(src)?;

    let block = ImportBlock::parse(src[span.start..span.end].split('\n'), classifier);
    let formatted = format_block(&block);

    let mut out = String::with_capacity(src.len());
    out.push_str(&src[..span.start]);
    out.push_str(&formatted);
    out.push_str(&src[span.end + 1..]);
    Some(out)
}

#[cfg(test)]
#[path = "source_test.rs"]
mod tests;
