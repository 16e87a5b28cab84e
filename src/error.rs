use std::path::PathBuf;
use thiserror::Error;

/// goimp統一エラー型
#[derive(Debug, Error)]
pub enum GoimpError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config parse error ({path}): {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Diff command failed: {0}")]
    DiffCommand(String),

    #[error("Got unexpected diff output for {0}")]
    UnexpectedDiff(String),

    #[error("Cannot use -w with standard input")]
    WriteOnStdin,
}

pub type Result<T> = std::result::Result<T, GoimpError>;
