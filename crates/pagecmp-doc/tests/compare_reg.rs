//! Document comparison regression test
//!
//! Drives [`Comparator`] with an in-memory renderer that serves synthetic
//! pixel dumps and records every invocation, so page order and early
//! termination can be checked without external tools.

use pagecmp_core::{Color, ImageFormat, PixelMatrix};
use pagecmp_doc::{
    CompareError, CompareOptions, CompareResult, Comparator, DocumentAssembler, ErrorKind,
    OutputMode, PageDiffFile, PdfAssembler, Renderer, SilentTracer, Tracer, Verdict,
    default_document_path,
};
use pagecmp_test::{RegParams, fixtures, scratch_dir};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Count(PathBuf),
    Render(PathBuf, u32),
}

#[derive(Default)]
struct MockRenderer {
    docs: HashMap<PathBuf, Vec<Vec<u8>>>,
    calls: RefCell<Vec<Call>>,
}

impl MockRenderer {
    fn with_doc(mut self, path: &Path, pages: Vec<Vec<u8>>) -> Self {
        self.docs.insert(path.to_path_buf(), pages);
        self
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn rendered(&self) -> Vec<(PathBuf, u32)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Render(p, n) => Some((p, n)),
                Call::Count(_) => None,
            })
            .collect()
    }

    fn pages(&self, document: &Path) -> CompareResult<&Vec<Vec<u8>>> {
        self.docs
            .get(document)
            .ok_or_else(|| CompareError::Process(format!("no such document {}", document.display())))
    }
}

impl Renderer for MockRenderer {
    fn page_count(&self, document: &Path) -> CompareResult<u32> {
        self.calls.borrow_mut().push(Call::Count(document.to_path_buf()));
        Ok(self.pages(document)?.len() as u32)
    }

    fn render_page(&self, document: &Path, page: u32, _resolution: u32) -> CompareResult<Vec<u8>> {
        self.calls
            .borrow_mut()
            .push(Call::Render(document.to_path_buf(), page));
        self.pages(document)?
            .get(page as usize - 1)
            .cloned()
            .ok_or_else(|| CompareError::Process(format!("page {} out of range", page)))
    }
}

#[derive(Default)]
struct RecordingTracer {
    lines: RefCell<Vec<String>>,
}

impl Tracer for RecordingTracer {
    fn trace(&self, args: fmt::Arguments<'_>) {
        self.lines.borrow_mut().push(args.to_string());
    }
}

#[derive(Default)]
struct RecordingAssembler {
    seen: RefCell<Vec<u32>>,
}

impl DocumentAssembler for RecordingAssembler {
    fn assemble(&self, pages: &[PageDiffFile], writer: &mut dyn Write) -> CompareResult<()> {
        self.seen.borrow_mut().extend(pages.iter().map(|p| p.page));
        writer.write_all(b"assembled")?;
        Ok(())
    }
}

struct FailingAssembler;

impl DocumentAssembler for FailingAssembler {
    fn assemble(&self, _pages: &[PageDiffFile], _writer: &mut dyn Write) -> CompareResult<()> {
        Err(CompareError::Assembly("out of paper".to_string()))
    }
}

const BASE: Color = Color::new(10, 20, 30);

fn base_page() -> Vec<u8> {
    fixtures::solid_ascii(2, 2, BASE)
}

fn changed_page() -> Vec<u8> {
    let mut m = PixelMatrix::new_filled(2, 2, BASE).unwrap();
    m.set_pixel(1, 1, Color::new(200, 20, 30)).unwrap();
    fixtures::binary_of(&m)
}

/// Radius 1 at the default 30:1 ratio.
fn small_radius() -> CompareOptions {
    CompareOptions::default().resolution(30)
}

fn docs(dir: &Path) -> (PathBuf, PathBuf) {
    (dir.join("first.pdf"), dir.join("second.pdf"))
}

#[test]
fn test_identical_pages_are_equal() {
    let dir = scratch_dir("identical").unwrap();
    let (a, b) = docs(&dir);
    // same pixels, other encoding
    let binary = fixtures::binary_of(&PixelMatrix::new_filled(2, 2, BASE).unwrap());
    let mock = MockRenderer::default()
        .with_doc(&a, vec![base_page()])
        .with_doc(&b, vec![binary]);

    let result = Comparator::new(&mock, small_radius().mode(OutputMode::PerPageImages))
        .with_tracer(SilentTracer)
        .compare(&a, &b)
        .unwrap();

    assert!(result.equal());
    assert!(result.diff_files.is_empty());
    assert_eq!(mock.rendered(), vec![(a.clone(), 1), (b.clone(), 1)]);
}

#[test]
fn compare_reg() {
    let mut rp = RegParams::new("compare");
    let dir = scratch_dir("compare_reg").unwrap();
    let (a, b) = docs(&dir);
    let mock = MockRenderer::default()
        .with_doc(&a, vec![base_page()])
        .with_doc(&b, vec![changed_page()]);

    let result = Comparator::new(&mock, small_radius().mode(OutputMode::PerPageImages))
        .with_tracer(SilentTracer)
        .compare(&a, &b)
        .unwrap();

    // Test 1: verdict and output naming
    rp.compare_values(1.0, (result.verdict == Verdict::MismatchFound) as u8 as f64, 0.0);
    rp.compare_values(1.0, result.diff_files.len() as f64, 0.0);
    let diff = &result.diff_files[0];
    rp.compare_values(1.0, diff.page as f64, 0.0);
    rp.compare_strings(
        format!("{}-1-diff.png", a.display()).as_bytes(),
        diff.path.to_string_lossy().as_bytes(),
    );

    // Test 2: only pixel (1, 1) differs
    let m1 = pagecmp_io::read_pnm_mem(&base_page()).unwrap();
    let m2 = pagecmp_io::read_pnm_mem(&changed_page()).unwrap();
    let mask = m1.diff_mask(&m2).unwrap();
    rp.compare_values(1.0, mask.count() as f64, 0.0);
    rp.compare_values(1.0, mask.get(1, 1) as u8 as f64, 0.0);

    // Test 3: layout of the written image
    let joined = pagecmp_io::read_image(&diff.path).unwrap();
    rp.compare_values(14.0, joined.width() as f64, 0.0);
    rp.compare_values(2.0, joined.height() as f64, 0.0);
    // radius 1 leaves the diagonal corner untouched on both sides
    rp.compare_values(1.0, (joined.get_pixel(0, 0) == Some(BASE)) as u8 as f64, 0.0);
    rp.compare_values(1.0, (joined.get_pixel(12, 0) == Some(BASE)) as u8 as f64, 0.0);
    rp.compare_values(
        1.0,
        (joined.get_pixel(1, 1) == Some(Color::new(132, 137, 15))) as u8 as f64,
        0.0,
    );
    rp.compare_values(
        1.0,
        (joined.get_pixel(13, 1) == Some(Color::new(227, 137, 15))) as u8 as f64,
        0.0,
    );
    rp.compare_values(1.0, (joined.get_pixel(5, 0) == Some(Color::BLACK)) as u8 as f64, 0.0);
    rp.write_matrix_and_check(&joined, ImageFormat::Png).unwrap();

    assert!(rp.cleanup(), "compare regression test failed");
}

#[test]
fn test_black_pixel_on_white_page() {
    let dir = scratch_dir("black_on_white").unwrap();
    let (a, b) = docs(&dir);
    let mut dark = PixelMatrix::new_filled(2, 2, Color::WHITE).unwrap();
    dark.set_pixel(1, 1, Color::BLACK).unwrap();
    let mock = MockRenderer::default()
        .with_doc(&a, vec![fixtures::solid_ascii(2, 2, Color::WHITE)])
        .with_doc(&b, vec![fixtures::binary_of(&dark)]);

    let result = Comparator::new(&mock, CompareOptions::default().mode(OutputMode::PerPageImages))
        .with_tracer(SilentTracer)
        .compare(&a, &b)
        .unwrap();

    assert_eq!(result.verdict, Verdict::MismatchFound);
    assert_eq!(result.diff_files.len(), 1);

    let white = PixelMatrix::new_filled(2, 2, Color::WHITE).unwrap();
    let mask = white.diff_mask(&dark).unwrap();
    assert_eq!(mask.iter_set().collect::<Vec<_>>(), vec![(1, 1)]);

    let joined = pagecmp_io::read_image(&result.diff_files[0].path).unwrap();
    assert_eq!(joined.dimensions(), (2 + 10 + 2, 2));
    assert_eq!(joined.get_pixel(1, 1), Some(Color::new(255, 255, 127)));
    assert_eq!(joined.get_pixel(13, 1), Some(Color::new(127, 127, 0)));
    assert_eq!(joined.get_pixel(2, 0), Some(Color::BLACK));
}

#[test]
fn test_report_only_stops_at_first_difference() {
    let dir = scratch_dir("report_only").unwrap();
    let (a, b) = docs(&dir);
    let mock = MockRenderer::default()
        .with_doc(&a, vec![base_page(), base_page(), base_page()])
        .with_doc(&b, vec![base_page(), changed_page(), base_page()]);

    let result = Comparator::new(&mock, CompareOptions::default())
        .with_tracer(SilentTracer)
        .compare(&a, &b)
        .unwrap();

    assert!(!result.equal());
    assert!(result.diff_files.is_empty());
    assert_eq!(
        mock.rendered(),
        vec![(a.clone(), 1), (b.clone(), 1), (a.clone(), 2), (b.clone(), 2)]
    );
    assert!(!dir.join("first.pdf-2-diff.png").exists());
}

#[test]
fn test_image_mode_visits_every_page() {
    let dir = scratch_dir("every_page").unwrap();
    let (a, b) = docs(&dir);
    let mock = MockRenderer::default()
        .with_doc(&a, vec![base_page(), base_page(), base_page()])
        .with_doc(&b, vec![changed_page(), base_page(), changed_page()]);

    let result = Comparator::new(&mock, small_radius().mode(OutputMode::PerPageImages))
        .with_tracer(SilentTracer)
        .compare(&a, &b)
        .unwrap();

    assert_eq!(result.verdict, Verdict::MismatchFound);
    let pages: Vec<u32> = result.diff_files.iter().map(|d| d.page).collect();
    assert_eq!(pages, vec![1, 3]);
    assert_eq!(mock.rendered().len(), 6);
    for diff in &result.diff_files {
        assert!(diff.path.exists());
    }
}

#[test]
fn test_same_file_skips_renderer() {
    let dir = scratch_dir("same_file").unwrap();
    let (a, _) = docs(&dir);
    let mock = MockRenderer::default();

    let result = Comparator::new(&mock, CompareOptions::default())
        .compare(&a, &a)
        .unwrap();

    assert!(result.equal());
    assert!(mock.calls().is_empty());
}

#[test]
fn test_same_file_through_different_paths() {
    let dir = scratch_dir("same_canonical").unwrap();
    let a = dir.join("doc.pdf");
    std::fs::write(&a, b"%PDF-1.7").unwrap();
    let b = dir.join(".").join("doc.pdf");
    let mock = MockRenderer::default();

    let result = Comparator::new(&mock, CompareOptions::default())
        .compare(&a, &b)
        .unwrap();

    assert!(result.equal());
    assert!(mock.calls().is_empty());
}

#[test]
fn test_page_count_mismatch() {
    let dir = scratch_dir("page_count").unwrap();
    let (a, b) = docs(&dir);
    let mock = MockRenderer::default()
        .with_doc(&a, vec![base_page(), base_page()])
        .with_doc(&b, vec![base_page(), base_page(), base_page()]);

    // Report-only: no page is rendered
    let result = Comparator::new(&mock, CompareOptions::default())
        .with_tracer(SilentTracer)
        .compare(&a, &b)
        .unwrap();
    assert_eq!(result.verdict, Verdict::MismatchFound);
    assert!(mock.rendered().is_empty());

    // With images: the shared page range is still compared
    let result = Comparator::new(&mock, small_radius().mode(OutputMode::PerPageImages))
        .with_tracer(SilentTracer)
        .compare(&a, &b)
        .unwrap();
    assert_eq!(result.verdict, Verdict::MismatchFound);
    assert!(result.diff_files.is_empty());
    assert_eq!(mock.rendered().len(), 4);
}

#[test]
fn test_dimension_mismatch_fails() {
    let dir = scratch_dir("dimensions").unwrap();
    let (a, b) = docs(&dir);
    let mock = MockRenderer::default()
        .with_doc(&a, vec![fixtures::solid_ascii(10, 10, Color::WHITE)])
        .with_doc(&b, vec![fixtures::solid_ascii(10, 12, Color::WHITE)]);

    let err = Comparator::new(&mock, small_radius().mode(OutputMode::PerPageImages))
        .with_tracer(SilentTracer)
        .compare(&a, &b)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DimensionMismatch);
}

#[test]
fn test_malformed_dump_fails() {
    let dir = scratch_dir("malformed").unwrap();
    let (a, b) = docs(&dir);
    let mock = MockRenderer::default()
        .with_doc(&a, vec![b"P3\n2 2\n255\n1 2 3\n".to_vec()])
        .with_doc(&b, vec![base_page()]);

    let err = Comparator::new(&mock, CompareOptions::default())
        .with_tracer(SilentTracer)
        .compare(&a, &b)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn test_renderer_failure_propagates() {
    let dir = scratch_dir("renderer_failure").unwrap();
    let (a, b) = docs(&dir);
    let mock = MockRenderer::default().with_doc(&a, vec![base_page()]);

    let err = Comparator::new(&mock, CompareOptions::default())
        .with_tracer(SilentTracer)
        .compare(&a, &b)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Process);
}

#[test]
fn test_invalid_ratio_is_config_error() {
    let dir = scratch_dir("bad_ratio").unwrap();
    let (a, b) = docs(&dir);
    let mock = MockRenderer::default();

    let err = Comparator::new(&mock, CompareOptions::default().ratio(0))
        .compare(&a, &b)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
    assert!(mock.calls().is_empty());
}

#[test]
fn test_oversized_gutter_is_config_error() {
    let dir = scratch_dir("bad_gutter").unwrap();
    let (a, b) = docs(&dir);
    let mock = MockRenderer::default()
        .with_doc(&a, vec![base_page()])
        .with_doc(&b, vec![changed_page()]);

    let options = small_radius()
        .mode(OutputMode::PerPageImages)
        .gutter(u32::MAX);
    let err = Comparator::new(&mock, options).compare(&a, &b).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
    assert!(mock.calls().is_empty());
}

#[test]
fn test_output_dir() {
    let dir = scratch_dir("output_dir").unwrap();
    let out = scratch_dir("output_dir_images").unwrap();
    let (a, b) = docs(&dir);
    let mock = MockRenderer::default()
        .with_doc(&a, vec![base_page()])
        .with_doc(&b, vec![changed_page()]);

    let options = small_radius()
        .mode(OutputMode::PerPageImages)
        .output_dir(&out);
    let result = Comparator::new(&mock, options)
        .with_tracer(SilentTracer)
        .compare(&a, &b)
        .unwrap();

    assert_eq!(result.diff_files[0].path, out.join("first.pdf-1-diff.png"));
    assert!(result.diff_files[0].path.exists());
}

#[test]
fn test_aggregated_document() {
    let dir = scratch_dir("aggregate").unwrap();
    let (a, b) = docs(&dir);
    let mock = MockRenderer::default()
        .with_doc(&a, vec![base_page(), base_page()])
        .with_doc(&b, vec![changed_page(), changed_page()]);
    let comparator = Comparator::new(&mock, small_radius().mode(OutputMode::AggregatedDocument))
        .with_tracer(SilentTracer);

    let recorder = RecordingAssembler::default();
    let mut out = Vec::new();
    let result = comparator
        .compare_and_assemble(&a, &b, &recorder, &mut out)
        .unwrap();
    assert!(!result.equal());
    assert_eq!(*recorder.seen.borrow(), vec![1, 2]);
    assert_eq!(out, b"assembled");

    let mut pdf = Vec::new();
    result.assemble(&PdfAssembler::default(), &mut pdf).unwrap();
    assert!(pdf.starts_with(b"%PDF"));

    assert_eq!(
        default_document_path(&a),
        PathBuf::from(format!("{}-diff.pdf", a.display()))
    );
}

#[test]
fn test_assembly_skipped_without_differences() {
    let dir = scratch_dir("aggregate_equal").unwrap();
    let (a, b) = docs(&dir);
    let mock = MockRenderer::default()
        .with_doc(&a, vec![base_page()])
        .with_doc(&b, vec![base_page()]);
    let comparator = Comparator::new(&mock, small_radius().mode(OutputMode::AggregatedDocument))
        .with_tracer(SilentTracer);

    let mut out = Vec::new();
    let result = comparator
        .compare_and_assemble(&a, &b, &FailingAssembler, &mut out)
        .unwrap();
    assert!(result.equal());
    assert!(out.is_empty());
}

#[test]
fn test_image_mode_does_not_assemble() {
    let dir = scratch_dir("images_only").unwrap();
    let (a, b) = docs(&dir);
    let mock = MockRenderer::default()
        .with_doc(&a, vec![base_page()])
        .with_doc(&b, vec![changed_page()]);
    let comparator = Comparator::new(&mock, small_radius().mode(OutputMode::PerPageImages))
        .with_tracer(SilentTracer);

    let mut out = Vec::new();
    let result = comparator
        .compare_and_assemble(&a, &b, &FailingAssembler, &mut out)
        .unwrap();
    assert_eq!(result.diff_files.len(), 1);
    assert!(out.is_empty());
}

#[test]
fn test_assembly_failure_kind() {
    let dir = scratch_dir("aggregate_fail").unwrap();
    let (a, b) = docs(&dir);
    let mock = MockRenderer::default()
        .with_doc(&a, vec![base_page()])
        .with_doc(&b, vec![changed_page()]);
    let comparator = Comparator::new(&mock, small_radius().mode(OutputMode::AggregatedDocument))
        .with_tracer(SilentTracer);

    let mut out = Vec::new();
    let err = comparator
        .compare_and_assemble(&a, &b, &FailingAssembler, &mut out)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Assembly);
    // images written before the failure stay in place
    assert!(dir.join("first.pdf-1-diff.png").exists());
}

#[test]
fn test_tracer_receives_progress() {
    let dir = scratch_dir("tracer").unwrap();
    let (a, b) = docs(&dir);
    let mock = MockRenderer::default()
        .with_doc(&a, vec![base_page(), base_page()])
        .with_doc(&b, vec![base_page(), changed_page()]);
    let tracer = RecordingTracer::default();

    let result = Comparator::new(&mock, CompareOptions::default())
        .with_tracer(&tracer)
        .compare(&a, &b)
        .unwrap();

    assert!(!result.equal());
    let lines = tracer.lines.borrow();
    assert!(lines.iter().any(|l| l.contains("page 1 identical")));
    assert!(lines.iter().any(|l| l.contains("page 2 differs")));
}
