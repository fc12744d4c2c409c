//! netpix-test - Regression test helpers for netpix
//!
//! Tests create a [`RegParams`], run a numbered sequence of checks
//! against it and finally call [`RegParams::cleanup`], which reports
//! every recorded failure and returns the overall verdict. Failing checks
//! do not abort the test, so one run shows every mismatch at once.
//!
//! # Usage
//!
//! ```
//! use netpix_test::RegParams;
//!
//! let mut rp = RegParams::new("doc");
//! rp.compare_values(1.0, 1.0 + 1e-7, 1e-6);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // netpix-test is at crates/netpix-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
