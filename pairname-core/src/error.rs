use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PairnameError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input file {path} is unavailable: {source}")]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line} has {found} columns, expected at least 5 (check the delimiter)")]
    MalformedRow { line: u64, found: usize },

    #[error("file count ({files}) does not match input row count ({rows} x 2)")]
    CountMismatch { files: usize, rows: usize },

    #[error("destination already exists: {0}")]
    DestinationExists(PathBuf),

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{incomplete} record(s) missing files, {orphans} orphan file(s)")]
    CheckFailed { incomplete: usize, orphans: usize },
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, PairnameError>;
