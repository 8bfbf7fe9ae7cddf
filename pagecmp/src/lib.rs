//! pagecmp - Visual comparison of rendered document pages
//!
//! Decides whether two documents render to identical pixels and, when they
//! do not, produces annotated side-by-side images showing where.
//!
//! # Overview
//!
//! - Pixel matrices, content digests, difference masks, highlight stamping
//!   and side-by-side composition (re-exported at the crate root)
//! - Pixel-dump, PNG and PDF I/O ([`io`])
//! - Page-by-page document comparison ([`doc`])
//!
//! # Example
//!
//! ```
//! use pagecmp::{Color, PixelMatrix};
//!
//! let dump = b"P3\n2 1\n255\n0 0 0 255 255 255\n";
//! let page = pagecmp::io::read_pnm_mem(dump).unwrap();
//! assert_eq!(page.get_pixel(1, 0), Some(Color::WHITE));
//!
//! let other = PixelMatrix::new_filled(2, 1, Color::WHITE).unwrap();
//! assert!(!page.same_content(&other).unwrap());
//! assert_eq!(page.diff_mask(&other).unwrap().count(), 1);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pagecmp_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pagecmp_doc as doc;
pub use pagecmp_io as io;
