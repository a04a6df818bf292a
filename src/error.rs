use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Application-wide error type for the modelpeek CLI.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(
        "model '{}' is not installed. Copy the package into {} or pass --models-dir.",
        .name,
        .home.display()
    )]
    ModelNotFound { name: String, home: PathBuf },

    #[error("failed to parse {path}: {source}")]
    MetaParse { path: String, source: serde_json::Error },

    #[error("unable to determine the data directory for this platform")]
    NoDataDir,
}
