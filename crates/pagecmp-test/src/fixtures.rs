//! Synthetic pixel dumps for tests

use pagecmp_core::{Color, PixelMatrix};

/// Build a `P3` text dump from raw samples.
///
/// Samples are written three per pixel, one image row per line.
pub fn ppm_ascii(width: u32, height: u32, max_value: u32, samples: &[u32]) -> Vec<u8> {
    let mut out = format!("P3\n{} {}\n{}\n", width, height, max_value);
    let row_len = (width * 3) as usize;
    for row in samples.chunks(row_len.max(1)) {
        let line = row
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&line);
        out.push('\n');
    }
    out.into_bytes()
}

/// Build a `P6` binary dump from raw samples.
pub fn ppm_binary(width: u32, height: u32, max_value: u32, samples: &[u8]) -> Vec<u8> {
    let mut out = format!("P6\n{} {}\n{}\n", width, height, max_value).into_bytes();
    out.extend_from_slice(samples);
    out
}

/// A `P3` dump of a single-color image with max value 255.
pub fn solid_ascii(width: u32, height: u32, color: Color) -> Vec<u8> {
    let samples: Vec<u32> = (0..width * height)
        .flat_map(|_| [color.r as u32, color.g as u32, color.b as u32])
        .collect();
    ppm_ascii(width, height, 255, &samples)
}

/// A `P6` dump of an existing matrix.
pub fn binary_of(matrix: &PixelMatrix) -> Vec<u8> {
    ppm_binary(matrix.width(), matrix.height(), 255, matrix.data())
}

/// A `P3` dump of an existing matrix.
pub fn ascii_of(matrix: &PixelMatrix) -> Vec<u8> {
    let samples: Vec<u32> = matrix.data().iter().map(|&s| s as u32).collect();
    ppm_ascii(matrix.width(), matrix.height(), 255, &samples)
}

/// A matrix with a deterministic, position-dependent color pattern.
///
/// # Panics
///
/// Panics if either dimension is 0.
pub fn pattern(width: u32, height: u32) -> PixelMatrix {
    let data = (0..height)
        .flat_map(|y| {
            (0..width).flat_map(move |x| {
                [
                    (x * 7 + y * 3) as u8,
                    (x * 13 + y * 11) as u8,
                    (x ^ y) as u8,
                ]
            })
        })
        .collect();
    PixelMatrix::from_raw(width, height, data).expect("pattern needs non-zero dimensions")
}
