//! pagecmp-doc - Page-by-page document comparison
//!
//! Drives the pixel-level engine over whole documents:
//!
//! - [`Comparator`] - renders, digests, diffs and annotates page by page
//! - [`Renderer`] - collaborator turning a document page into a PPM dump
//!   ([`PopplerRenderer`] shells out to `pdfinfo` and `pdftoppm`)
//! - [`DocumentAssembler`] - collaborator laying diff images out into one
//!   document ([`PdfAssembler`])
//! - [`Tracer`] - receiver of progress messages
//!
//! # Example
//!
//! ```no_run
//! use pagecmp_doc::{CompareOptions, Comparator, OutputMode, PopplerRenderer};
//! use std::path::Path;
//!
//! let options = CompareOptions::default().mode(OutputMode::PerPageImages);
//! let comparator = Comparator::new(PopplerRenderer::default(), options);
//! let result = comparator
//!     .compare(Path::new("before.pdf"), Path::new("after.pdf"))
//!     .unwrap();
//! for diff in &result.diff_files {
//!     println!("page {} -> {}", diff.page, diff.path.display());
//! }
//! ```

pub mod assemble;
pub mod compare;
pub mod config;
mod error;
pub mod poppler;
pub mod render;
pub mod trace;

pub use assemble::{DocumentAssembler, PdfAssembler};
pub use compare::{
    Comparator, ComparisonResult, PageDiffFile, Verdict, default_document_path,
};
pub use config::{CompareOptions, DEFAULT_RATIO, DEFAULT_RESOLUTION, OutputMode};
pub use error::{CompareError, CompareResult, ErrorKind};
pub use poppler::PopplerRenderer;
pub use render::Renderer;
pub use trace::{LogTracer, SilentTracer, Tracer};
