use std::path::PathBuf;
use thiserror::Error;

/// Error types for template-scan.
///
/// Loading can fail two ways: the file cannot be read (I/O) or its bytes are
/// not valid UTF-8 (decoding). Both are fatal; a regex or substring miss is
/// never an error.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{path}: invalid UTF-8: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("{path}: file too large: {size} bytes (max: {limit} bytes)")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },
}

/// Convenience type alias for `Result<T, ScanError>`.
pub type Result<T> = std::result::Result<T, ScanError>;
