//! Renderer backed by the poppler command-line tools
//!
//! `pdfinfo` reports the page count and `pdftoppm` rasterizes one page to
//! standard output as a binary PPM.

use crate::error::{CompareError, CompareResult};
use crate::render::Renderer;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// [`Renderer`] that shells out to `pdfinfo` and `pdftoppm`.
///
/// `pdftoppm` must be able to stream a page to stdout when no output root
/// is given. Some older poppler releases corrupt that stream; call
/// [`version`](Self::version) to log or reject the installed build.
#[derive(Debug, Clone)]
pub struct PopplerRenderer {
    pdftoppm: PathBuf,
    pdfinfo: PathBuf,
}

impl Default for PopplerRenderer {
    fn default() -> Self {
        Self {
            pdftoppm: PathBuf::from("pdftoppm"),
            pdfinfo: PathBuf::from("pdfinfo"),
        }
    }
}

impl PopplerRenderer {
    /// Use explicit tool locations.
    pub fn with_tools(pdftoppm: impl Into<PathBuf>, pdfinfo: impl Into<PathBuf>) -> Self {
        Self {
            pdftoppm: pdftoppm.into(),
            pdfinfo: pdfinfo.into(),
        }
    }

    /// Version banner of the installed `pdftoppm` (it prints to stderr).
    pub fn version(&self) -> CompareResult<String> {
        let output = run(Command::new(&self.pdftoppm).arg("-v"), &self.pdftoppm)?;
        let text = if output.stderr.is_empty() {
            output.stdout
        } else {
            output.stderr
        };
        Ok(String::from_utf8_lossy(&text)
            .lines()
            .next()
            .unwrap_or_default()
            .trim()
            .to_string())
    }
}

impl Renderer for PopplerRenderer {
    fn page_count(&self, document: &Path) -> CompareResult<u32> {
        let output = run(Command::new(&self.pdfinfo).arg(document), &self.pdfinfo)?;
        check_status(&output, &self.pdfinfo, document)?;
        parse_page_count(&String::from_utf8_lossy(&output.stdout)).ok_or_else(|| {
            CompareError::Process(format!(
                "{} printed no page count for {}",
                self.pdfinfo.display(),
                document.display()
            ))
        })
    }

    fn render_page(&self, document: &Path, page: u32, resolution: u32) -> CompareResult<Vec<u8>> {
        let page_arg = page.to_string();
        let res_arg = resolution.to_string();
        let output = run(
            Command::new(&self.pdftoppm)
                .args(["-f", page_arg.as_str(), "-l", page_arg.as_str()])
                .args(["-r", res_arg.as_str()])
                .arg(document),
            &self.pdftoppm,
        )?;
        check_status(&output, &self.pdftoppm, document)?;
        if output.stdout.is_empty() {
            return Err(CompareError::Process(format!(
                "{} produced no output for page {} of {}",
                self.pdftoppm.display(),
                page,
                document.display()
            )));
        }
        Ok(output.stdout)
    }
}

fn run(command: &mut Command, tool: &Path) -> CompareResult<Output> {
    command
        .output()
        .map_err(|e| CompareError::Process(format!("failed to run {}: {}", tool.display(), e)))
}

fn check_status(output: &Output, tool: &Path, document: &Path) -> CompareResult<()> {
    if output.status.success() {
        return Ok(());
    }
    Err(CompareError::Process(format!(
        "{} exited with {} on {}: {}",
        tool.display(),
        output.status,
        document.display(),
        String::from_utf8_lossy(&output.stderr).trim()
    )))
}

/// Extract the value of the `Pages:` line from `pdfinfo` output.
pub fn parse_page_count(info: &str) -> Option<u32> {
    info.lines()
        .find_map(|line| line.strip_prefix("Pages:"))
        .and_then(|v| v.trim().parse().ok())
}
