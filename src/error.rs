//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O errors and provides semantic variants for the
//! open/create and line-length failure modes of the report pipeline.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unable to open input file {path:?}: {source}")]
    OpenInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unable to create output file {path:?}: {source}")]
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Line {line} exceeds the maximum supported length of {max} bytes")]
    LineTooLong { line: usize, max: usize },

    #[error("Sidecar error: {0}")]
    Sidecar(#[from] serde_json::Error),
}
