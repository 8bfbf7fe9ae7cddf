//! PNG image format support

use crate::{IoError, IoResult};
use pagecmp_core::{CHANNELS, PixelMatrix};
use png::{BitDepth, ColorType, Decoder, Encoder};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image into a matrix.
///
/// 8-bit grayscale, gray+alpha, RGB and RGBA images are accepted; alpha is
/// dropped.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<PixelMatrix> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    let samples = match (color_type, bit_depth) {
        (ColorType::Grayscale, BitDepth::Eight) => 1,
        (ColorType::GrayscaleAlpha, BitDepth::Eight) => 2,
        (ColorType::Rgb, BitDepth::Eight) => 3,
        (ColorType::Rgba, BitDepth::Eight) => 4,
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG format: {:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let mut data = Vec::with_capacity(width as usize * height as usize * CHANNELS);
    for y in 0..height as usize {
        let row = &buf[y * bytes_per_row..y * bytes_per_row + width as usize * samples];
        for px in row.chunks_exact(samples) {
            match samples {
                1 | 2 => data.extend_from_slice(&[px[0], px[0], px[0]]),
                _ => data.extend_from_slice(&px[..CHANNELS]),
            }
        }
    }

    Ok(PixelMatrix::from_raw(width, height, data)?)
}

/// Write a matrix as an 8-bit RGBA PNG with opaque alpha.
pub fn write_png<W: Write>(matrix: &PixelMatrix, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, matrix.width(), matrix.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    writer
        .write_image_data(&matrix.to_rgba())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}

/// Write a matrix as PNG into memory.
pub fn write_png_mem(matrix: &PixelMatrix) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_png(matrix, &mut buffer)?;
    Ok(buffer)
}
