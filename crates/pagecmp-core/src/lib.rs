//! pagecmp Core - Pixel data structures for visual page comparison
//!
//! This crate provides the data structures and pixel algorithms behind
//! pagecmp:
//!
//! - [`PixelMatrix`] - 8-bit RGB image stored as equal-length rows
//! - [`DiffMask`] - Per-pixel difference flags between two matrices
//! - [`StampPattern`] - Filled disc used to highlight differences
//! - [`Digest`] - SHA-256 content digest for fast equality checks
//!
//! The typical flow for one page is digest, diff, annotate both sides,
//! then join them side by side:
//!
//! ```
//! use pagecmp_core::{Color, PixelMatrix};
//!
//! let a = PixelMatrix::new_filled(4, 4, Color::WHITE).unwrap();
//! let mut b = a.clone();
//! b.set_pixel(1, 2, Color::BLACK).unwrap();
//!
//! assert_ne!(a.digest().unwrap(), b.digest().unwrap());
//! let mask = a.diff_mask(&b).unwrap();
//! let joined = a
//!     .annotate(&mask, 1)
//!     .unwrap()
//!     .join_horizontal(&b.annotate(&mask, 1).unwrap(), 2)
//!     .unwrap();
//! assert_eq!(joined.width(), 10);
//! ```

pub mod error;
pub mod mask;
pub mod matrix;
pub mod stamp;

pub use error::{Error, Result};
pub use mask::DiffMask;
pub use matrix::{
    CHANNELS, Color, DEFAULT_GUTTER_WIDTH, Digest, HIGHLIGHT_COLOR, HIGHLIGHT_FRACTION,
    MAX_GUTTER_WIDTH, PixelMatrix, highlight_pixel,
};
pub use stamp::StampPattern;

/// Image file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// Unknown format
    #[default]
    Unknown,
    /// PNM pixel dump (P3 or P6)
    Pnm,
    /// PNG format
    Png,
    /// PDF document
    Pdf,
}

impl ImageFormat {
    /// Get the file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Unknown => "dat",
            Self::Pnm => "ppm",
            Self::Png => "png",
            Self::Pdf => "pdf",
        }
    }
}
