//! PDF output (write-only)
//!
//! Lays out a sequence of images one per page, each surrounded by a fixed
//! margin, using the `pdf-writer` crate. Image samples are embedded as
//! Flate-compressed DeviceRGB XObjects.
//!
//! # Example
//!
//! ```no_run
//! use pagecmp_core::PixelMatrix;
//! use pagecmp_io::pdf::{PdfOptions, write_pdf_mem};
//!
//! let m = PixelMatrix::new(100, 100).unwrap();
//! let pdf_data = write_pdf_mem(&[&m], &PdfOptions::default()).unwrap();
//! ```

use crate::{IoError, IoResult};
use miniz_oxide::deflate::compress_to_vec_zlib;
use pagecmp_core::PixelMatrix;
use pdf_writer::{Content, Filter, Finish, Name, Pdf, Rect, Ref, TextStr};
use std::io::Write;
use std::path::Path;

/// PDF output options
#[derive(Debug, Clone)]
pub struct PdfOptions {
    /// Margin around each image, in points
    pub margin: f32,
    /// Resolution in PPI used to convert pixels to points
    pub resolution: u32,
    /// Document title
    pub title: Option<String>,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            resolution: DEFAULT_RESOLUTION,
            title: None,
        }
    }
}

impl PdfOptions {
    /// Create options with a specific title
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Set the resolution
    pub fn resolution(mut self, res: u32) -> Self {
        self.resolution = res;
        self
    }

    /// Set the page margin in points
    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }
}

/// Default resolution when none is specified
const DEFAULT_RESOLUTION: u32 = 300;

/// Default page margin: one inch
pub const DEFAULT_MARGIN: f32 = 72.0;

/// Points per inch in PDF coordinates
const POINTS_PER_INCH: f32 = 72.0;

/// Write images to PDF bytes, one image per page.
pub fn write_pdf_mem(images: &[&PixelMatrix], options: &PdfOptions) -> IoResult<Vec<u8>> {
    generate_pdf(images, options)
}

/// Write images to a multi-page PDF, one image per page.
pub fn write_pdf_multi<W: Write>(
    images: &[&PixelMatrix],
    mut writer: W,
    options: &PdfOptions,
) -> IoResult<()> {
    let pdf_data = generate_pdf(images, options)?;
    writer.write_all(&pdf_data).map_err(IoError::Io)?;
    Ok(())
}

/// Write image files to a multi-page PDF
///
/// Reads each file, detects its format, and adds it as a page in the PDF
/// in the order given.
pub fn write_pdf_from_files<W: Write>(
    paths: &[impl AsRef<Path>],
    mut writer: W,
    options: &PdfOptions,
) -> IoResult<()> {
    if paths.is_empty() {
        return Err(IoError::Format("no files provided".to_string()));
    }

    let images: Vec<PixelMatrix> = paths
        .iter()
        .map(crate::read_image)
        .collect::<IoResult<Vec<_>>>()?;

    let image_refs: Vec<&PixelMatrix> = images.iter().collect();
    let pdf_data = generate_pdf(&image_refs, options)?;
    writer.write_all(&pdf_data).map_err(IoError::Io)?;
    Ok(())
}

/// Generate PDF data from images
fn generate_pdf(images: &[&PixelMatrix], options: &PdfOptions) -> IoResult<Vec<u8>> {
    if images.is_empty() {
        return Err(IoError::Format("no images provided".to_string()));
    }
    if options.resolution == 0 {
        return Err(IoError::EncodeError("resolution must be positive".to_string()));
    }

    let mut pdf = Pdf::new();

    // Structure: Catalog(1), Pages(2), [Page(3+i*3), Contents(4+i*3), XObject(5+i*3)]...
    let catalog_id = Ref::new(1);
    let pages_id = Ref::new(2);

    let page_refs: Vec<Ref> = (0..images.len())
        .map(|i| Ref::new((3 + i * 3) as i32))
        .collect();

    pdf.catalog(catalog_id).pages(pages_id);

    if let Some(ref title) = options.title {
        let info_id = Ref::new((3 + images.len() * 3) as i32);
        pdf.document_info(info_id).title(TextStr(title));
    }

    pdf.pages(pages_id)
        .kids(page_refs.iter().copied())
        .count(images.len() as i32);

    for (i, matrix) in images.iter().enumerate() {
        let page_id = Ref::new((3 + i * 3) as i32);
        let contents_id = Ref::new((4 + i * 3) as i32);
        let image_id = Ref::new((5 + i * 3) as i32);

        write_page(&mut pdf, matrix, page_id, pages_id, contents_id, image_id, options);
    }

    Ok(pdf.finish())
}

/// Write a single page to the PDF
fn write_page(
    pdf: &mut Pdf,
    matrix: &PixelMatrix,
    page_id: Ref,
    pages_id: Ref,
    contents_id: Ref,
    image_id: Ref,
    options: &PdfOptions,
) {
    let width = matrix.width();
    let height = matrix.height();

    let width_pt = width as f32 * POINTS_PER_INCH / options.resolution as f32;
    let height_pt = height as f32 * POINTS_PER_INCH / options.resolution as f32;
    let margin = options.margin.max(0.0);

    let compressed_data = compress_to_vec_zlib(matrix.data(), 6);

    let mut image = pdf.image_xobject(image_id, &compressed_data);
    image.filter(Filter::FlateDecode);
    image.width(width as i32);
    image.height(height as i32);
    image.color_space().device_rgb();
    image.bits_per_component(8);
    image.finish();

    // PDF origin is bottom-left; the image unit square is scaled to the
    // image size and shifted in by the margin.
    let mut content = Content::new();
    content.save_state();
    content.transform([width_pt, 0.0, 0.0, height_pt, margin, margin]);
    content.x_object(Name(b"Im0"));
    content.restore_state();
    let content_data = content.finish();

    pdf.stream(contents_id, &content_data);

    let mut page = pdf.page(page_id);
    page.parent(pages_id);
    page.media_box(Rect::new(
        0.0,
        0.0,
        width_pt + 2.0 * margin,
        height_pt + 2.0 * margin,
    ));
    page.contents(contents_id);
    page.resources().x_objects().pair(Name(b"Im0"), image_id);
    page.finish();
}
