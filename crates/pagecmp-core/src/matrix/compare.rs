//! Matrix comparison
//!
//! Exact, per-pixel comparison of two RGB matrices. A pixel differs when any
//! of its three channel bytes differs; no tolerance is applied.

use super::{CHANNELS, PixelMatrix};
use crate::error::{Error, Result};
use crate::mask::DiffMask;

impl PixelMatrix {
    /// Check that `other` can be compared pixel by pixel with `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if heights or row lengths differ.
    pub fn check_comparable(&self, other: &PixelMatrix) -> Result<()> {
        if self.dimensions() != other.dimensions() {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }
        Ok(())
    }

    /// Compute the mask of pixels that differ between `self` and `other`.
    ///
    /// The mask is symmetric: `a.diff_mask(&b) == b.diff_mask(&a)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] when the matrices do not have the
    /// same width and height. A mismatch is never reported as "different".
    pub fn diff_mask(&self, other: &PixelMatrix) -> Result<DiffMask> {
        self.check_comparable(other)?;

        let mut mask = DiffMask::new(self.width, self.height);
        for (y, (row1, row2)) in self.rows().zip(other.rows()).enumerate() {
            let pixels = row1
                .chunks_exact(CHANNELS)
                .zip(row2.chunks_exact(CHANNELS));
            for (x, (p1, p2)) in pixels.enumerate() {
                if p1 != p2 {
                    mask.set(x as u32, y as u32)?;
                }
            }
        }

        log::trace!(
            "diff mask {}x{}: {} differing pixels",
            mask.width(),
            mask.height(),
            mask.count()
        );
        Ok(mask)
    }

    /// Count pixels that differ between two matrices.
    pub fn count_pixel_diffs(&self, other: &PixelMatrix) -> Result<usize> {
        Ok(self.diff_mask(other)?.count())
    }
}
