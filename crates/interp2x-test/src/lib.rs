//! interp2x-test - Regression test framework for interp2x
//!
//! This crate provides a small regression test harness with three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! plus deterministic [`synthetic`] grids, so tests do not depend on
//! bundled image files.
//!
//! # Usage
//!
//! ```ignore
//! use interp2x_test::{RegParams, synthetic};
//!
//! let mut rp = RegParams::new("scale");
//! let grid = synthetic::gradient(64, 48).unwrap();
//! rp.compare_values(64.0, grid.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;
pub mod synthetic;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // interp2x-test is at crates/interp2x-test, so go up two directories
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
