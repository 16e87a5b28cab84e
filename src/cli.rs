//! goimp CLI定義
//!
//! gofmt系ツールと同じフラグ体系（`-l` / `-w` / `-d` + パス引数）を提供する。

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "goimp")]
#[command(about = "Format Go import blocks deterministically", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Put imports beginning with this string after 3rd-party packages
    #[arg(short, long, value_name = "PREFIX")]
    pub local: Option<String>,

    /// Write result to (source) file instead of stdout
    #[arg(short, long)]
    pub write: bool,

    /// Display diffs instead of rewriting files
    #[arg(short, long)]
    pub diff: bool,

    /// Files or directories to format (reads stdin when omitted)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}
