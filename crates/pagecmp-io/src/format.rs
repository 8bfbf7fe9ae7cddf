//! Image format detection
//!
//! Detects image formats by examining magic numbers in the file header.

use crate::{IoError, IoResult};
use pagecmp_core::ImageFormat;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Magic numbers for image format detection
mod magic {
    /// PNG: 89 50 4E 47 0D 0A 1A 0A
    pub const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// PDF: "%PDF-"
    pub const PDF: &[u8] = b"%PDF-";

    /// PNM formats
    pub const PPM_ASCII: &[u8] = b"P3";
    pub const PPM_BINARY: &[u8] = b"P6";
}

/// Detect image format from a file path
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let mut file = File::open(path).map_err(IoError::Io)?;
    let mut header = [0u8; 8];
    let bytes_read = file.read(&mut header).map_err(IoError::Io)?;
    detect_format_from_bytes(&header[..bytes_read])
}

/// Detect image format from bytes
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 2 {
        return Err(IoError::Format(
            "not enough data to detect format".to_string(),
        ));
    }

    if data.starts_with(magic::PNG) {
        return Ok(ImageFormat::Png);
    }
    if data.starts_with(magic::PDF) {
        return Ok(ImageFormat::Pdf);
    }
    if data.starts_with(magic::PPM_ASCII) || data.starts_with(magic::PPM_BINARY) {
        return Ok(ImageFormat::Pnm);
    }

    Ok(ImageFormat::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_format_from_bytes() {
        assert_eq!(
            detect_format_from_bytes(b"P6\n1 1\n255\n").unwrap(),
            ImageFormat::Pnm
        );
        assert_eq!(detect_format_from_bytes(b"P3\n").unwrap(), ImageFormat::Pnm);
        assert_eq!(
            detect_format_from_bytes(b"\x89PNG\r\n\x1a\n").unwrap(),
            ImageFormat::Png
        );
        assert_eq!(
            detect_format_from_bytes(b"%PDF-1.7").unwrap(),
            ImageFormat::Pdf
        );
        assert_eq!(
            detect_format_from_bytes(b"GIF89a").unwrap(),
            ImageFormat::Unknown
        );
        assert!(detect_format_from_bytes(b"P").is_err());
    }
}
