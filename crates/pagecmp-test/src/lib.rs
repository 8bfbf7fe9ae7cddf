//! pagecmp-test - Regression test framework for pagecmp
//!
//! Provides a small golden-file regression harness and synthetic pixel-dump
//! fixtures. The harness supports three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! # Usage
//!
//! ```ignore
//! use pagecmp_test::RegParams;
//!
//! let mut rp = RegParams::new("annotate");
//! rp.compare_values(81.0, stamp.area() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Load a test image from the regression output or golden directories.
pub fn load_image(path: &str) -> TestResult<pagecmp_core::PixelMatrix> {
    pagecmp_io::read_image(path).map_err(|e| TestError::ImageLoad {
        path: path.to_string(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // pagecmp-test is at crates/pagecmp-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Create a fresh scratch directory under the system temp dir.
pub fn scratch_dir(name: &str) -> TestResult<std::path::PathBuf> {
    let dir = std::env::temp_dir().join(format!("pagecmp_{}_{}", name, std::process::id()));
    if dir.exists() {
        std::fs::remove_dir_all(&dir)?;
    }
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
