//! Error types for pagecmp-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// pagecmp-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid matrix dimensions
    #[error("invalid matrix dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Two matrices (or a matrix and a mask) cannot be compared pixel by pixel
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Sample buffer length does not match the declared dimensions
    #[error("buffer length {len} does not match {width}x{height} RGB")]
    BufferLength { len: usize, width: u32, height: u32 },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// I/O error while streaming matrix rows
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for pagecmp-core operations
pub type Result<T> = std::result::Result<T, Error>;
