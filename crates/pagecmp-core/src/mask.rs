//! DiffMask - per-pixel difference flags
//!
//! A boolean grid with one entry per pixel (not per channel) marking where
//! two compared matrices differ. Created by
//! [`PixelMatrix::diff_mask`](crate::PixelMatrix::diff_mask) and read by the
//! annotator for both sides of a page.

use crate::error::{Error, Result};

/// Boolean grid of differing pixel positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl DiffMask {
    /// Create an all-false mask.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; width as usize * height as usize],
        }
    }

    /// Build a mask from a list of set positions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if a position lies outside the mask.
    pub fn from_points(width: u32, height: u32, points: &[(u32, u32)]) -> Result<Self> {
        let mut mask = Self::new(width, height);
        for &(x, y) in points {
            mask.set(x, y)?;
        }
        Ok(mask)
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` in pixels.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Whether the pixel at `(x, y)` differs. Out-of-range positions are `false`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.bits[self.index(x, y)]
    }

    /// Flags of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[bool] {
        let start = y as usize * self.width as usize;
        &self.bits[start..start + self.width as usize]
    }

    /// Number of differing pixels.
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Whether no pixel differs.
    pub fn is_clear(&self) -> bool {
        !self.bits.iter().any(|&b| b)
    }

    /// Positions `(x, y)` of all differing pixels in row-major order.
    pub fn iter_set(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let width = self.width as usize;
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, b)| **b)
            .map(move |(i, _)| ((i % width) as u32, (i / width) as u32))
    }

    pub(crate) fn set(&mut self, x: u32, y: u32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: self.index(x.min(self.width), y.min(self.height)),
                len: self.bits.len(),
            });
        }
        let idx = self.index(x, y);
        self.bits[idx] = true;
        Ok(())
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
