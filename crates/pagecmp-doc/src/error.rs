//! Error types for pagecmp-doc
//!
//! Every failure of a document comparison surfaces as a [`CompareError`].
//! [`CompareError::kind`] folds the variants onto the small taxonomy callers
//! act on, so "the comparison failed" stays distinct from "the documents
//! differ".

use pagecmp_io::IoError;
use thiserror::Error;

/// Error type for document comparison.
#[derive(Error, Debug)]
pub enum CompareError {
    /// Matrix-level failure (dimension mismatch, invalid dimensions)
    #[error("core error: {0}")]
    Core(#[from] pagecmp_core::Error),

    /// Pixel-dump parsing or image encoding failure
    #[error("image error: {0}")]
    Image(#[from] IoError),

    /// The external renderer failed or produced unusable output
    #[error("renderer failed: {0}")]
    Process(String),

    /// The document-assembly collaborator failed
    #[error("document assembly failed: {0}")]
    Assembly(String),

    /// File or stream failure outside image codecs
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid comparison options
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Broad category of a [`CompareError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed pixel-dump header or body
    Format,
    /// Two pages cannot be compared pixel by pixel
    DimensionMismatch,
    /// File or stream read/write failure
    Io,
    /// External renderer failure
    Process,
    /// Document assembly failure
    Assembly,
    /// Invalid options
    Config,
}

impl CompareError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CompareError::Core(e) => core_kind(e),
            CompareError::Image(IoError::Core(e)) => core_kind(e),
            CompareError::Image(IoError::Io(_)) | CompareError::Image(IoError::EncodeError(_)) => {
                ErrorKind::Io
            }
            CompareError::Image(_) => ErrorKind::Format,
            CompareError::Process(_) => ErrorKind::Process,
            CompareError::Assembly(_) => ErrorKind::Assembly,
            CompareError::Io(_) => ErrorKind::Io,
            CompareError::InvalidConfig(_) => ErrorKind::Config,
        }
    }
}

fn core_kind(e: &pagecmp_core::Error) -> ErrorKind {
    match e {
        pagecmp_core::Error::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
        pagecmp_core::Error::Io(_) => ErrorKind::Io,
        _ => ErrorKind::Format,
    }
}

/// Result alias for document comparison.
pub type CompareResult<T> = Result<T, CompareError>;
