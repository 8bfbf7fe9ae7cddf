//! I/O error types
//!
//! Provides a unified error type for all pixel-dump and image I/O.
//! Each format module maps its underlying library errors into `IoError`
//! variants so that callers only need to handle one error type.

use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed pixel-dump header or sample data
    #[error("format error: {0}")]
    Format(String),

    /// The format tag is not recognized or the format is not enabled
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A format-specific decoder returned an error
    #[error("decode error: {0}")]
    DecodeError(String),

    /// A format-specific encoder returned an error
    #[error("encode error: {0}")]
    EncodeError(String),

    /// An error from the core library (e.g. invalid dimensions)
    #[error("core error: {0}")]
    Core(#[from] pagecmp_core::Error),
}

impl IoError {
    /// Whether this error describes malformed input rather than a failed
    /// read or write.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            IoError::Format(_) | IoError::UnsupportedFormat(_) | IoError::DecodeError(_)
        )
    }
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
