//! Page-by-page document comparison
//!
//! [`Comparator`] renders both documents one page at a time, in ascending
//! page order, and compares the pages:
//!
//! 1. Pages with equal content digests are skipped.
//! 2. In [report-only](crate::OutputMode::ReportOnly) mode the first
//!    differing page ends the scan.
//! 3. Otherwise both sides are annotated at every differing pixel, joined
//!    side by side and written as `<first-input>-<page>-diff.png`, and the
//!    scan continues so every differing page gets an image.
//!
//! Documents with different page counts are reported as different straight
//! away in report-only mode; with image output the pages present in both
//! documents are still compared. Any error aborts the comparison; images
//! already written are left in place.

use crate::assemble::DocumentAssembler;
use crate::config::CompareOptions;
use crate::error::{CompareError, CompareResult};
use crate::render::Renderer;
use crate::trace::{LogTracer, Tracer};
use pagecmp_core::{ImageFormat, PixelMatrix, StampPattern};
use std::io::Write;
use std::path::{Path, PathBuf};

/// A differing page and the location of its comparison image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDiffFile {
    /// 1-based page number
    pub page: u32,
    /// Path of the side-by-side annotated image
    pub path: PathBuf,
}

/// Final state of a comparison that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every compared page is pixel-identical and page counts match
    AllEqual,
    /// At least one page differs, or page counts differ
    MismatchFound,
}

/// Outcome of a document comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonResult {
    pub verdict: Verdict,
    /// Diff images in ascending page order
    pub diff_files: Vec<PageDiffFile>,
}

impl ComparisonResult {
    fn new(verdict: Verdict, diff_files: Vec<PageDiffFile>) -> Self {
        Self {
            verdict,
            diff_files,
        }
    }

    /// Whether the documents are visually identical.
    pub fn equal(&self) -> bool {
        self.verdict == Verdict::AllEqual
    }

    /// Hand the diff images to `assembler`. Nothing is written when no page
    /// produced an image.
    pub fn assemble<A: DocumentAssembler + ?Sized>(
        &self,
        assembler: &A,
        writer: &mut dyn Write,
    ) -> CompareResult<()> {
        if self.diff_files.is_empty() {
            return Ok(());
        }
        assembler.assemble(&self.diff_files, writer)
    }
}

/// Default location of the aggregated document: `<first-input>-diff.pdf`.
pub fn default_document_path(first: &Path) -> PathBuf {
    PathBuf::from(format!(
        "{}-diff.{}",
        first.display(),
        ImageFormat::Pdf.extension()
    ))
}

/// Drives the comparison of two documents.
pub struct Comparator<'a, R: Renderer> {
    renderer: R,
    options: CompareOptions,
    tracer: Box<dyn Tracer + 'a>,
}

impl<'a, R: Renderer> Comparator<'a, R> {
    /// Create a comparator that traces through the `log` facade.
    pub fn new(renderer: R, options: CompareOptions) -> Self {
        Self {
            renderer,
            options,
            tracer: Box::new(LogTracer),
        }
    }

    /// Replace the tracer.
    pub fn with_tracer(mut self, tracer: impl Tracer + 'a) -> Self {
        self.tracer = Box::new(tracer);
        self
    }

    /// Options in use.
    pub fn options(&self) -> &CompareOptions {
        &self.options
    }

    /// Compare `first` against `second`.
    ///
    /// # Errors
    ///
    /// Fails on the first rendering, parsing, dimension or I/O error.
    pub fn compare(&self, first: &Path, second: &Path) -> CompareResult<ComparisonResult> {
        let radius = self.options.highlight_radius()?;
        let mode = self.options.mode;

        if same_file(first, second) {
            self.trace(format_args!(
                "{} and {} are the same file",
                first.display(),
                second.display()
            ));
            return Ok(ComparisonResult::new(Verdict::AllEqual, Vec::new()));
        }

        let count1 = self.renderer.page_count(first)?;
        let count2 = self.renderer.page_count(second)?;
        let mut verdict = Verdict::AllEqual;
        if count1 != count2 {
            self.trace(format_args!(
                "page counts differ: {} has {}, {} has {}",
                first.display(),
                count1,
                second.display(),
                count2
            ));
            if !mode.writes_images() {
                return Ok(ComparisonResult::new(Verdict::MismatchFound, Vec::new()));
            }
            verdict = Verdict::MismatchFound;
        }

        let stamp = StampPattern::disc(radius);
        let mut diff_files = Vec::new();
        for page in 1..=count1.min(count2) {
            let m1 = self.render(first, page)?;
            let m2 = self.render(second, page)?;

            if m1.same_content(&m2)? {
                self.trace(format_args!("page {} identical", page));
                continue;
            }
            verdict = Verdict::MismatchFound;

            if !mode.writes_images() {
                self.trace(format_args!("page {} differs, stopping", page));
                return Ok(ComparisonResult::new(verdict, diff_files));
            }

            let path = self.write_page_diff(first, page, &m1, &m2, &stamp)?;
            diff_files.push(PageDiffFile { page, path });
        }

        Ok(ComparisonResult::new(verdict, diff_files))
    }

    /// Compare and, when the mode
    /// [assembles a document](crate::OutputMode::assembles_document), hand the
    /// diff images to `assembler`.
    pub fn compare_and_assemble<A: DocumentAssembler + ?Sized>(
        &self,
        first: &Path,
        second: &Path,
        assembler: &A,
        writer: &mut dyn Write,
    ) -> CompareResult<ComparisonResult> {
        let result = self.compare(first, second)?;
        if self.options.mode.assembles_document() {
            self.trace(format_args!(
                "assembling {} diff pages",
                result.diff_files.len()
            ));
            result.assemble(assembler, writer)?;
        }
        Ok(result)
    }

    fn render(&self, document: &Path, page: u32) -> CompareResult<PixelMatrix> {
        let dump = self
            .renderer
            .render_page(document, page, self.options.resolution)?;
        let matrix = pagecmp_io::read_pnm_mem(&dump)?;
        self.trace(format_args!(
            "rendered page {} of {}: {}x{}",
            page,
            document.display(),
            matrix.width(),
            matrix.height()
        ));
        Ok(matrix)
    }

    fn write_page_diff(
        &self,
        first: &Path,
        page: u32,
        m1: &PixelMatrix,
        m2: &PixelMatrix,
        stamp: &StampPattern,
    ) -> CompareResult<PathBuf> {
        let mask = m1.diff_mask(m2)?;
        self.trace(format_args!(
            "page {} differs in {} pixels",
            page,
            mask.count()
        ));

        let a1 = m1.annotate_with_stamp(&mask, stamp)?;
        let a2 = m2.annotate_with_stamp(&mask, stamp)?;
        let joined = a1.join_horizontal(&a2, self.options.gutter)?;

        let path = self.diff_path(first, page)?;
        pagecmp_io::write_image(&joined, &path, ImageFormat::Png)?;
        self.trace(format_args!("wrote {}", path.display()));
        Ok(path)
    }

    fn diff_path(&self, first: &Path, page: u32) -> CompareResult<PathBuf> {
        let ext = ImageFormat::Png.extension();
        match &self.options.output_dir {
            None => Ok(PathBuf::from(format!(
                "{}-{}-diff.{}",
                first.display(),
                page,
                ext
            ))),
            Some(dir) => {
                let name = first.file_name().ok_or_else(|| {
                    CompareError::InvalidConfig(format!(
                        "input {} has no file name",
                        first.display()
                    ))
                })?;
                Ok(dir.join(format!("{}-{}-diff.{}", name.to_string_lossy(), page, ext)))
            }
        }
    }

    fn trace(&self, args: std::fmt::Arguments<'_>) {
        self.tracer.trace(args);
    }
}

/// Whether two paths name the same file.
fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unreachable;

    impl DocumentAssembler for Unreachable {
        fn assemble(&self, _pages: &[PageDiffFile], _writer: &mut dyn Write) -> CompareResult<()> {
            Err(CompareError::Assembly("should not be called".to_string()))
        }
    }

    #[test]
    fn test_default_document_path() {
        assert_eq!(
            default_document_path(Path::new("out/report.pdf")),
            PathBuf::from("out/report.pdf-diff.pdf")
        );
    }

    #[test]
    fn test_empty_result_assembles_nothing() {
        let result = ComparisonResult::new(Verdict::MismatchFound, Vec::new());
        let mut out = Vec::new();
        result.assemble(&Unreachable, &mut out).unwrap();
        assert!(out.is_empty());
        assert!(!result.equal());
    }

    #[test]
    fn test_same_file() {
        assert!(same_file(Path::new("a.pdf"), Path::new("a.pdf")));
        assert!(!same_file(
            Path::new("/nonexistent/a.pdf"),
            Path::new("/nonexistent/b.pdf")
        ));
    }
}
