use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JexpandError {
    // Input errors
    #[error("INPUT_READ_FAILED: failed to read '{}': {source}", .path.display())]
    InputReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Output errors
    #[error("OUTPUT_WRITE_FAILED: failed to write '{}': {source}", .path.display())]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

impl JexpandError {
    /// The underlying I/O error, whichever variant carries it
    pub fn io_error(&self) -> &std::io::Error {
        match self {
            JexpandError::InputReadFailed { source, .. }
            | JexpandError::OutputWriteFailed { source, .. } => source,
            JexpandError::IoError(err) => err,
        }
    }
}

pub type Result<T> = std::result::Result<T, JexpandError>;
