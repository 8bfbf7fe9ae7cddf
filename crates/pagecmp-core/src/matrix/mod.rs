//! PixelMatrix - The RGB sample container
//!
//! A `PixelMatrix` holds an 8-bit-per-channel RGB image as a sequence of
//! rows, top to bottom. Every row is exactly `width * 3` bytes with the
//! channels interleaved in R, G, B order.
//!
//! # Layout
//!
//! - Rows are stored back to back in a single buffer
//! - Width and height are carried explicitly, so callers never derive the
//!   pixel width from a row's byte length
//! - Matrices are plain owned values; stages that need to keep the original
//!   next to a modified copy clone it
//!
//! Operations are split across submodules, each adding an `impl` block:
//!
//! - [`compare`] - diff masks between two matrices
//! - [`hash`] - content digests for the fast equality path
//! - [`annotate`] - highlight discs at differing pixels
//! - [`compose`] - side-by-side joins and RGBA rasterization

pub mod annotate;
pub mod compare;
pub mod compose;
pub mod hash;

pub use annotate::{HIGHLIGHT_COLOR, HIGHLIGHT_FRACTION, highlight_pixel};
pub use compose::{DEFAULT_GUTTER_WIDTH, MAX_GUTTER_WIDTH};
pub use hash::Digest;

use crate::error::{Error, Result};

/// Number of samples per pixel.
pub const CHANNELS: usize = 3;

/// An RGB color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const YELLOW: Color = Color::new(255, 255, 0);

    /// Create a color from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The color as an `[r, g, b]` sample triple.
    #[inline]
    pub fn to_samples(self) -> [u8; CHANNELS] {
        [self.r, self.g, self.b]
    }

    fn from_samples(samples: &[u8]) -> Self {
        Self::new(samples[0], samples[1], samples[2])
    }
}

/// RGB image stored as equal-length rows of interleaved samples.
///
/// # Examples
///
/// ```
/// use pagecmp_core::{Color, PixelMatrix};
///
/// let mut m = PixelMatrix::new(4, 2).unwrap();
/// m.set_pixel(3, 1, Color::WHITE).unwrap();
/// assert_eq!(m.row(1)[9..12], [255, 255, 255]);
/// assert_eq!(m.row_len(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelMatrix {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelMatrix {
    /// Create a black matrix with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_filled(width, height, Color::BLACK)
    }

    /// Create a matrix with every pixel set to `color`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new_filled(width: u32, height: u32, color: Color) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let samples = color.to_samples();
        let pixels = width as usize * height as usize;
        let mut data = Vec::with_capacity(pixels * CHANNELS);
        for _ in 0..pixels {
            data.extend_from_slice(&samples);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wrap a raw row-major RGB buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::BufferLength`] if `data` is not exactly
    /// `width * height * 3` bytes.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if data.len() != width as usize * height as usize * CHANNELS {
            return Err(Error::BufferLength {
                len: data.len(),
                width,
                height,
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a matrix from individual rows.
    ///
    /// Every row must have the same byte length, a non-zero multiple of 3.
    pub fn from_rows<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let mut data = Vec::new();
        let mut row_len = None;
        let mut height = 0u32;
        for row in rows {
            let row = row.as_ref();
            match row_len {
                None => row_len = Some(row.len()),
                Some(len) if len != row.len() => {
                    return Err(Error::DimensionMismatch {
                        expected: ((len / CHANNELS) as u32, height),
                        actual: ((row.len() / CHANNELS) as u32, height),
                    });
                }
                Some(_) => {}
            }
            data.extend_from_slice(row);
            height += 1;
        }
        let row_len = row_len.unwrap_or(0);
        if row_len % CHANNELS != 0 {
            return Err(Error::InvalidParameter(format!(
                "row length {row_len} is not a multiple of {CHANNELS}"
            )));
        }
        Self::from_raw((row_len / CHANNELS) as u32, height, data)
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels (number of rows).
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` in pixels.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Byte length of one row (`width * 3`).
    #[inline]
    pub fn row_len(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// All samples, row after row.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the matrix and return its sample buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Samples of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let len = self.row_len();
        let start = y as usize * len;
        &self.data[start..start + len]
    }

    /// Mutable samples of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let len = self.row_len();
        let start = y as usize * len;
        &mut self.data[start..start + len]
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.row_len())
    }

    /// Get the pixel at `(x, y)`, or `None` outside the matrix.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.index(x, y);
        Some(Color::from_samples(&self.data[idx..idx + CHANNELS]))
    }

    /// Set the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinate is outside the
    /// matrix.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        if x >= self.width {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.width as usize,
            });
        }
        if y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.height as usize,
            });
        }
        let idx = self.index(x, y);
        self.data[idx..idx + CHANNELS].copy_from_slice(&color.to_samples());
        Ok(())
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.row_len() + x as usize * CHANNELS
    }
}
