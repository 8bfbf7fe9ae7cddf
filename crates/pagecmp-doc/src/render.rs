//! Page rendering collaborator
//!
//! Rasterizing a paginated document is delegated to a [`Renderer`]. Given a
//! document, a 1-based page number and a resolution, it returns a PPM pixel
//! dump of exactly that page.

use crate::error::CompareResult;
use std::path::Path;

/// Produces page counts and per-page pixel dumps for documents.
pub trait Renderer {
    /// Number of pages in `document`.
    fn page_count(&self, document: &Path) -> CompareResult<u32>;

    /// Render page `page` (1-based) of `document` at `resolution` dpi and
    /// return the PPM bytes.
    fn render_page(&self, document: &Path, page: u32, resolution: u32) -> CompareResult<Vec<u8>>;
}

impl<R: Renderer + ?Sized> Renderer for &R {
    fn page_count(&self, document: &Path) -> CompareResult<u32> {
        (**self).page_count(document)
    }

    fn render_page(&self, document: &Path, page: u32, resolution: u32) -> CompareResult<Vec<u8>> {
        (**self).render_page(document, page, resolution)
    }
}
