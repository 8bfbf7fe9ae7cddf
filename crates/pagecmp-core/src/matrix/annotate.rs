//! Difference highlighting
//!
//! Burns a translucent yellow disc into a copy of a matrix at every pixel
//! set in a [`DiffMask`]. Each stamp reads the source matrix and writes the
//! copy, so a pixel covered by several overlapping discs gets the same color
//! as a pixel covered by one.

use super::{Color, PixelMatrix};
use crate::error::{Error, Result};
use crate::mask::DiffMask;
use crate::stamp::StampPattern;

/// Blend fraction of the highlight color.
pub const HIGHLIGHT_FRACTION: f64 = 0.5;

/// Target color of the highlight blend.
pub const HIGHLIGHT_COLOR: Color = Color::YELLOW;

/// Blend one pixel toward the highlight color.
///
/// Red and green move halfway toward 255, blue halves. Results are clamped
/// to `[0, 255]` and truncated.
///
/// ```
/// use pagecmp_core::{Color, highlight_pixel};
///
/// assert_eq!(highlight_pixel(Color::BLACK), Color::new(127, 127, 0));
/// assert_eq!(highlight_pixel(Color::WHITE), Color::new(255, 255, 127));
/// ```
pub fn highlight_pixel(c: Color) -> Color {
    let blend = |old: u8, target: u8| -> u8 {
        let v = old as f64 * (1.0 - HIGHLIGHT_FRACTION) + target as f64 * HIGHLIGHT_FRACTION;
        v.clamp(0.0, 255.0) as u8
    };
    Color::new(
        blend(c.r, HIGHLIGHT_COLOR.r),
        blend(c.g, HIGHLIGHT_COLOR.g),
        blend(c.b, HIGHLIGHT_COLOR.b),
    )
}

impl PixelMatrix {
    /// Return a copy of this matrix with a highlight disc of `radius`
    /// centered on every pixel set in `mask`.
    ///
    /// The source matrix is left untouched. Disc cells falling outside the
    /// matrix are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the mask does not have the
    /// matrix's pixel dimensions.
    pub fn annotate(&self, mask: &DiffMask, radius: u32) -> Result<PixelMatrix> {
        self.annotate_with_stamp(mask, &StampPattern::disc(radius))
    }

    /// Same as [`annotate`](Self::annotate) with a prebuilt stamp, so one
    /// stamp can be shared by both sides of a page.
    pub fn annotate_with_stamp(&self, mask: &DiffMask, stamp: &StampPattern) -> Result<PixelMatrix> {
        if mask.dimensions() != self.dimensions() {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: mask.dimensions(),
            });
        }

        let offsets: Vec<(i32, i32)> = stamp.offsets().collect();
        let w = self.width as i64;
        let h = self.height as i64;

        let mut out = self.clone();
        for (cx, cy) in mask.iter_set() {
            for &(dx, dy) in &offsets {
                let x = cx as i64 + dx as i64;
                let y = cy as i64 + dy as i64;
                if x < 0 || x >= w || y < 0 || y >= h {
                    continue;
                }
                let idx = self.index(x as u32, y as u32);
                let src = Color::from_samples(&self.data[idx..idx + super::CHANNELS]);
                out.data[idx..idx + super::CHANNELS]
                    .copy_from_slice(&highlight_pixel(src).to_samples());
            }
        }
        Ok(out)
    }
}
