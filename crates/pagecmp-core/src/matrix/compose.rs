//! Side-by-side composition
//!
//! Joins two matrices of equal height with a black gutter between them and
//! converts matrices to an opaque RGBA raster for image encoders.

use super::{CHANNELS, Color, PixelMatrix};
use crate::error::{Error, Result};

/// Default gutter width in pixels between joined matrices.
pub const DEFAULT_GUTTER_WIDTH: u32 = 10;

/// Widest gutter accepted by comparison options.
pub const MAX_GUTTER_WIDTH: u32 = 4096;

/// Color of the gutter band.
pub const GUTTER_COLOR: Color = Color::BLACK;

impl PixelMatrix {
    /// Place `right` next to `self`, separated by a `gutter`-pixel black band.
    ///
    /// The result is `self.width() + gutter + right.width()` pixels wide.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the heights differ and
    /// [`Error::InvalidDimension`] if the joined width overflows `u32`.
    pub fn join_horizontal(&self, right: &PixelMatrix, gutter: u32) -> Result<PixelMatrix> {
        if self.height != right.height {
            return Err(Error::DimensionMismatch {
                expected: (right.width, self.height),
                actual: right.dimensions(),
            });
        }

        let width = self
            .width
            .checked_add(gutter)
            .and_then(|w| w.checked_add(right.width))
            .ok_or(Error::InvalidDimension {
                width: u32::MAX,
                height: self.height,
            })?;
        let mut out = PixelMatrix::new_filled(width, self.height, GUTTER_COLOR)?;
        let left_len = self.row_len();
        let right_start = left_len + gutter as usize * CHANNELS;
        for y in 0..self.height {
            let row = out.row_mut(y);
            row[..left_len].copy_from_slice(self.row(y));
            row[right_start..].copy_from_slice(right.row(y));
        }
        Ok(out)
    }

    /// Rasterize to row-major RGBA with alpha fixed at 255.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.width as usize * self.height as usize * 4);
        for px in self.data.chunks_exact(CHANNELS) {
            out.extend_from_slice(px);
            out.push(255);
        }
        out
    }
}
