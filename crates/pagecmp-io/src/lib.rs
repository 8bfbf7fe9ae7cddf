//! pagecmp-io - Pixel-dump and image I/O
//!
//! - [`pnm`] - PPM pixel dumps (`P3` text, `P6` binary), read and write
//! - [`png`] - PNG encoding of annotated comparison images
//! - [`pdf`] - Multi-page PDF assembly of comparison images
//!
//! Format support beyond PNM is selected with cargo features
//! (`png-format`, `pdf-format`), both on by default.

mod error;
pub mod format;
#[cfg(feature = "pdf-format")]
pub mod pdf;
#[cfg(feature = "png-format")]
pub mod png;
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{detect_format, detect_format_from_bytes};
pub use pagecmp_core::ImageFormat;
pub use pnm::{PnmVariant, read_pnm, read_pnm_mem};

use pagecmp_core::PixelMatrix;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Read an image file into a matrix, detecting its format.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for formats that cannot be read
/// into a matrix (PDF, unknown) or whose feature is disabled.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<PixelMatrix> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let reader = BufReader::new(File::open(path)?);
    match format {
        ImageFormat::Pnm => read_pnm(reader),
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        other => Err(IoError::UnsupportedFormat(format!(
            "cannot read {:?} from {}",
            other,
            path.display()
        ))),
    }
}

/// Write a matrix to a file in the given format.
pub fn write_image<P: AsRef<Path>>(
    matrix: &PixelMatrix,
    path: P,
    format: ImageFormat,
) -> IoResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    match format {
        ImageFormat::Pnm => pnm::write_pnm(matrix, &mut writer, PnmVariant::Binary)?,
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(matrix, &mut writer)?,
        #[cfg(feature = "pdf-format")]
        ImageFormat::Pdf => pdf::write_pdf_multi(&[matrix], &mut writer, &pdf::PdfOptions::default())?,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "cannot write {:?}",
                other
            )));
        }
    }
    writer.flush()?;
    Ok(())
}
