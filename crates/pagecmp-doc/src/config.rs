//! Comparison options

use crate::error::{CompareError, CompareResult};
use pagecmp_core::{DEFAULT_GUTTER_WIDTH, MAX_GUTTER_WIDTH};
use std::path::PathBuf;

/// Default rendering resolution in dots per inch.
pub const DEFAULT_RESOLUTION: u32 = 300;

/// Default divisor turning the resolution into a highlight radius.
pub const DEFAULT_RATIO: u32 = 30;

/// What a comparison produces besides its verdict.
///
/// The mode decides whether scanning stops at the first differing page:
///
/// - `ReportOnly` stops at the first mismatch and does no annotation
/// - `PerPageImages` visits every page and writes one image per differing page
/// - `AggregatedDocument` does the same, and the images are then assembled
///   into one document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    ReportOnly,
    PerPageImages,
    AggregatedDocument,
}

impl OutputMode {
    /// Map the two independent "images" and "document" switches onto a mode.
    pub fn from_flags(images: bool, document: bool) -> Self {
        match (images, document) {
            (_, true) => OutputMode::AggregatedDocument,
            (true, false) => OutputMode::PerPageImages,
            (false, false) => OutputMode::ReportOnly,
        }
    }

    /// Whether differing pages are annotated and written out.
    pub fn writes_images(self) -> bool {
        !matches!(self, OutputMode::ReportOnly)
    }

    /// Whether per-page images are assembled into one document.
    pub fn assembles_document(self) -> bool {
        matches!(self, OutputMode::AggregatedDocument)
    }
}

/// Options for a document comparison.
#[derive(Debug, Clone)]
pub struct CompareOptions {
    /// Rendering resolution in dots per inch
    pub resolution: u32,
    /// Highlight radius is `resolution / ratio`
    pub ratio: u32,
    /// Output mode
    pub mode: OutputMode,
    /// Width in pixels of the black band between the two sides of a diff image
    pub gutter: u32,
    /// Directory for diff images; `None` writes them next to the first input
    pub output_dir: Option<PathBuf>,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            ratio: DEFAULT_RATIO,
            mode: OutputMode::ReportOnly,
            gutter: DEFAULT_GUTTER_WIDTH,
            output_dir: None,
        }
    }
}

impl CompareOptions {
    /// Set the rendering resolution
    pub fn resolution(mut self, dpi: u32) -> Self {
        self.resolution = dpi;
        self
    }

    /// Set the resolution-to-radius ratio
    pub fn ratio(mut self, ratio: u32) -> Self {
        self.ratio = ratio;
        self
    }

    /// Set the output mode
    pub fn mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the gutter width
    pub fn gutter(mut self, gutter: u32) -> Self {
        self.gutter = gutter;
        self
    }

    /// Set the directory receiving diff images
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Check the options for values that cannot work.
    pub fn validate(&self) -> CompareResult<()> {
        if self.resolution == 0 {
            return Err(CompareError::InvalidConfig(
                "resolution must be positive".to_string(),
            ));
        }
        if self.ratio == 0 {
            return Err(CompareError::InvalidConfig(
                "ratio must be positive".to_string(),
            ));
        }
        if self.gutter > MAX_GUTTER_WIDTH {
            return Err(CompareError::InvalidConfig(format!(
                "gutter {} exceeds {} pixels",
                self.gutter, MAX_GUTTER_WIDTH
            )));
        }
        Ok(())
    }

    /// Highlight disc radius in pixels.
    pub fn highlight_radius(&self) -> CompareResult<u32> {
        self.validate()?;
        Ok(self.resolution / self.ratio)
    }
}
