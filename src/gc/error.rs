use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the sequence source, loader and window scanner.
///
/// The `Display` text is what the command line prints after `[ERROR]`.
#[derive(Debug, Error)]
pub enum GcError {
    #[error("No sequence file: {}", .0.display())]
    NoSequenceFile(PathBuf),

    #[error("No sequence record in {}", .0.display())]
    EmptySequenceFile(PathBuf),

    #[error("Wrong window size")]
    WrongWindowSize,

    #[error("Wrong step")]
    WrongStep,

    #[error("Wrong function: {0}")]
    WrongFunction(String),

    #[error("Fetching {id} failed: {reason}")]
    Fetch { id: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type GcResult<T> = std::result::Result<T, GcError>;
