//! Document assembly collaborator
//!
//! Turns the ordered list of per-page diff images into one output document.

use crate::compare::PageDiffFile;
use crate::error::{CompareError, CompareResult};
use pagecmp_io::pdf::{PdfOptions, write_pdf_from_files};
use std::io::Write;

/// Lays out diff images one per page into a document.
pub trait DocumentAssembler {
    /// Write a document containing every file in `pages`, in order.
    fn assemble(&self, pages: &[PageDiffFile], writer: &mut dyn Write) -> CompareResult<()>;
}

/// Assembles diff images into a PDF with a fixed margin around each image.
#[derive(Debug, Clone, Default)]
pub struct PdfAssembler {
    options: PdfOptions,
}

impl PdfAssembler {
    /// Create an assembler with the given PDF options.
    pub fn new(options: PdfOptions) -> Self {
        Self { options }
    }

    /// PDF options in use.
    pub fn options(&self) -> &PdfOptions {
        &self.options
    }
}

impl DocumentAssembler for PdfAssembler {
    fn assemble(&self, pages: &[PageDiffFile], writer: &mut dyn Write) -> CompareResult<()> {
        let paths: Vec<&std::path::Path> = pages.iter().map(|p| p.path.as_path()).collect();
        write_pdf_from_files(&paths, writer, &self.options)
            .map_err(|e| CompareError::Assembly(e.to_string()))
    }
}
