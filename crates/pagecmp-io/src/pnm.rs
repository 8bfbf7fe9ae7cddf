//! PNM pixel-dump support
//!
//! Reads and writes the two PPM variants produced by page rasterizers:
//!
//! - `P3`: samples as whitespace-separated decimal text
//! - `P6`: samples as raw bytes, row-major, channels interleaved
//!
//! The header is three newline-terminated lines: the tag, `width height`,
//! and the maximum sample value. Samples are rescaled from `[0, max]` to
//! `[0, 255]` with `sample * 255 / max`, truncating. Binary samples are
//! always single bytes.

use crate::{IoError, IoResult};
use pagecmp_core::{CHANNELS, PixelMatrix};
use std::io::{BufRead, Read, Write};

/// Sample encoding of a PPM pixel dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PnmVariant {
    /// `P3`: decimal text samples
    Ascii,
    /// `P6`: raw byte samples
    Binary,
}

impl PnmVariant {
    /// Parse a header tag.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::UnsupportedFormat`] naming the tag if it is not
    /// `P3` or `P6`.
    pub fn from_tag(tag: &str) -> IoResult<Self> {
        match tag {
            "P3" => Ok(PnmVariant::Ascii),
            "P6" => Ok(PnmVariant::Binary),
            other => Err(IoError::UnsupportedFormat(format!(
                "unsupported PPM format: {other}"
            ))),
        }
    }

    /// The header tag for this variant.
    pub fn tag(self) -> &'static str {
        match self {
            PnmVariant::Ascii => "P3",
            PnmVariant::Binary => "P6",
        }
    }
}

/// Parsed PPM header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PnmHeader {
    pub variant: PnmVariant,
    pub width: u32,
    pub height: u32,
    pub max_value: u32,
}

impl PnmHeader {
    /// Total number of samples in the body.
    fn sample_count(&self) -> IoResult<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or_else(|| {
                IoError::Format(format!("image too large: {}x{}", self.width, self.height))
            })
    }
}

/// Read a PPM pixel dump (P3 or P6) into a [`PixelMatrix`].
///
/// # Errors
///
/// Returns [`IoError::Format`] for malformed headers, a zero dimension, a
/// zero maximum value, out-of-range samples or truncated sample data, and
/// [`IoError::UnsupportedFormat`] for an unknown tag.
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<PixelMatrix> {
    let header = read_header(&mut reader)?;
    log::debug!(
        "parsing pixel data: {}x{}, max {}, {:?}",
        header.width,
        header.height,
        header.max_value,
        header.variant
    );

    let count = header.sample_count()?;
    let samples = match header.variant {
        PnmVariant::Binary => read_binary_samples(&mut reader, count)?,
        PnmVariant::Ascii => read_ascii_samples(&mut reader, count)?,
    };

    let data = samples
        .into_iter()
        .map(|s| scale_sample(s, header.max_value))
        .collect::<IoResult<Vec<u8>>>()?;

    Ok(PixelMatrix::from_raw(header.width, header.height, data)?)
}

/// Read a PPM pixel dump from memory.
pub fn read_pnm_mem(data: &[u8]) -> IoResult<PixelMatrix> {
    read_pnm(data)
}

/// Read and validate the three header lines.
pub fn read_header<R: BufRead>(reader: &mut R) -> IoResult<PnmHeader> {
    let tag = read_header_line(reader, "format tag")?;
    let variant = PnmVariant::from_tag(&tag)?;

    let size = read_header_line(reader, "size")?;
    let parts: Vec<&str> = size.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(IoError::Format(format!("invalid size format: {size}")));
    }
    let width = parse_positive(parts[0], "width")?;
    let height = parse_positive(parts[1], "height")?;

    let max = read_header_line(reader, "max value")?;
    let max_value = parse_positive(&max, "max value")?;

    Ok(PnmHeader {
        variant,
        width,
        height,
        max_value,
    })
}

fn read_header_line<R: BufRead>(reader: &mut R, what: &str) -> IoResult<String> {
    let mut line = Vec::new();
    reader.read_until(b'\n', &mut line)?;
    if line.last() != Some(&b'\n') {
        return Err(IoError::Format(format!("truncated header: missing {what} line")));
    }
    let line = std::str::from_utf8(&line)
        .map_err(|_| IoError::Format(format!("non-text {what} line")))?;
    Ok(line.trim().to_string())
}

fn parse_positive(token: &str, what: &str) -> IoResult<u32> {
    let value: u32 = token
        .parse()
        .map_err(|_| IoError::Format(format!("invalid {what}: {token:?}")))?;
    if value == 0 {
        return Err(IoError::Format(format!("{what} must be positive")));
    }
    Ok(value)
}

fn read_binary_samples<R: Read>(reader: &mut R, count: usize) -> IoResult<Vec<u32>> {
    // grow with the bytes actually present, not the declared size
    let mut buf = Vec::new();
    reader.by_ref().take(count as u64).read_to_end(&mut buf)?;
    if buf.len() != count {
        return Err(IoError::Format(format!(
            "truncated sample data: expected {count} bytes, got {}",
            buf.len()
        )));
    }
    Ok(buf.into_iter().map(u32::from).collect())
}

fn read_ascii_samples<R: Read>(reader: &mut R, count: usize) -> IoResult<Vec<u32>> {
    let mut body = Vec::new();
    reader.read_to_end(&mut body)?;

    let mut tokens = SampleTokens::new(&body);
    // every sample needs at least one digit and one separator
    let mut samples = Vec::with_capacity(count.min(body.len() / 2 + 1));
    for i in 0..count {
        let token = tokens.next().ok_or_else(|| {
            IoError::Format(format!(
                "truncated sample data: got {i} of {count} samples"
            ))
        })?;
        let value = std::str::from_utf8(token)
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .ok_or_else(|| {
                IoError::Format(format!(
                    "invalid sample {:?}",
                    String::from_utf8_lossy(token)
                ))
            })?;
        samples.push(value);
    }
    Ok(samples)
}

/// Splits a text body on runs of space, tab, CR and LF.
///
/// A token cut off by the end of input is still yielded; a missing token
/// shows up as `None`.
struct SampleTokens<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SampleTokens<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn is_separator(b: u8) -> bool {
        matches!(b, b' ' | b'\t' | b'\n' | b'\r')
    }
}

impl<'a> Iterator for SampleTokens<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        while self.pos < self.data.len() && Self::is_separator(self.data[self.pos]) {
            self.pos += 1;
        }
        if self.pos == self.data.len() {
            return None;
        }
        let start = self.pos;
        while self.pos < self.data.len() && !Self::is_separator(self.data[self.pos]) {
            self.pos += 1;
        }
        Some(&self.data[start..self.pos])
    }
}

/// Rescale a sample from `[0, max_value]` to `[0, 255]`.
///
/// # Errors
///
/// Returns [`IoError::Format`] if `max_value` is 0 or `sample` exceeds it.
pub fn scale_sample(sample: u32, max_value: u32) -> IoResult<u8> {
    if max_value == 0 {
        return Err(IoError::Format("max value must be positive".to_string()));
    }
    if sample > max_value {
        return Err(IoError::Format(format!(
            "sample {sample} exceeds max value {max_value}"
        )));
    }
    Ok((sample as u64 * 255 / max_value as u64) as u8)
}

/// Write a matrix as a PPM pixel dump with max value 255.
///
/// The ASCII variant puts each row on its own line.
pub fn write_pnm<W: Write>(matrix: &PixelMatrix, mut writer: W, variant: PnmVariant) -> IoResult<()> {
    write!(
        writer,
        "{}\n{} {}\n255\n",
        variant.tag(),
        matrix.width(),
        matrix.height()
    )?;
    match variant {
        PnmVariant::Binary => writer.write_all(matrix.data())?,
        PnmVariant::Ascii => {
            for row in matrix.rows() {
                let line = row
                    .iter()
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                writeln!(writer, "{line}")?;
            }
        }
    }
    Ok(())
}

/// Write a matrix as a PPM pixel dump into memory.
pub fn write_pnm_mem(matrix: &PixelMatrix, variant: PnmVariant) -> IoResult<Vec<u8>> {
    let mut buf = Vec::new();
    write_pnm(matrix, &mut buf, variant)?;
    Ok(buf)
}
