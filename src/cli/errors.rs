use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Input and output must be different files: {path:?}")]
    SamePath { path: PathBuf },

    #[error("Invalid options file {path:?}: {source}")]
    InvalidOptions {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Report error: {0}")]
    Report(#[from] romancalc::Error),
}
