//! Disc stamps used to mark differing pixels
//!
//! A stamp is a `(2r + 1) x (2r + 1)` square of intensities, 255 inside a
//! filled disc of radius `r` and 0 outside. A cell at offset `(dx, dy)` from
//! the center belongs to the disc iff `dx² + dy² <= r²`.

/// Full intensity value for cells inside the disc.
pub const STAMP_ON: u8 = 255;

/// Square intensity pattern of a filled disc.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampPattern {
    radius: u32,
    cells: Vec<u8>,
}

impl StampPattern {
    /// Rasterize a filled disc of the given radius.
    pub fn disc(radius: u32) -> Self {
        let r = radius as i64;
        let size = (2 * radius + 1) as usize;
        let r_sq = r * r;

        let mut cells = vec![0u8; size * size];
        for y in 0..size {
            for x in 0..size {
                let dx = x as i64 - r;
                let dy = y as i64 - r;
                if dx * dx + dy * dy <= r_sq {
                    cells[y * size + x] = STAMP_ON;
                }
            }
        }

        Self { radius, cells }
    }

    /// Radius the stamp was built for.
    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Side length of the square (`2r + 1`).
    #[inline]
    pub fn size(&self) -> u32 {
        2 * self.radius + 1
    }

    /// Intensity at `(x, y)` within the square, 0 outside it.
    pub fn value(&self, x: u32, y: u32) -> u8 {
        let size = self.size();
        if x >= size || y >= size {
            return 0;
        }
        self.cells[(y * size + x) as usize]
    }

    /// Whether the cell at `(dx, dy)` relative to the center is inside the disc.
    pub fn covers(&self, dx: i32, dy: i32) -> bool {
        let r = self.radius as i32;
        if dx < -r || dx > r || dy < -r || dy > r {
            return false;
        }
        self.value((dx + r) as u32, (dy + r) as u32) != 0
    }

    /// Offsets `(dx, dy)` from the center of every cell inside the disc,
    /// row by row.
    pub fn offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let size = self.size() as usize;
        let r = self.radius as i32;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, v)| **v != 0)
            .map(move |(i, _)| ((i % size) as i32 - r, (i / size) as i32 - r))
    }

    /// Number of cells inside the disc.
    pub fn area(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }
}
