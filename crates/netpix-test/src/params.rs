//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use netpix_core::{ColorModel, PixelBuffer};
use std::fs;

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index and success status.
pub struct RegParams {
    /// Name of the test (e.g., "pnm_io")
    pub test_name: String,
    /// Current test index (incremented before each check)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "pnm_io")
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    fn record_failure(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        // NaN never compares within delta
        if !(diff <= delta) {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Compare two images channel by channel
    ///
    /// # Arguments
    ///
    /// * `expected` - Reference image
    /// * `actual` - Image under test
    /// * `delta` - Maximum allowed per-channel difference (0.0 for exact)
    ///
    /// # Returns
    ///
    /// `true` if dimensions agree and every channel matches within delta.
    pub fn compare_images<C: ColorModel>(
        &mut self,
        expected: &PixelBuffer<C>,
        actual: &PixelBuffer<C>,
        delta: f32,
    ) -> bool {
        self.index += 1;

        if expected.dimensions() != actual.dimensions() {
            let msg = format!(
                "Failure in {}_reg: image comparison for index {} - dimension mismatch \
                 {}x{} vs {}x{}",
                self.test_name,
                self.index,
                expected.width(),
                expected.height(),
                actual.width(),
                actual.height()
            );
            self.record_failure(msg);
            return false;
        }

        let width = expected.width().max(1) as usize;
        for (idx, (pe, pa)) in expected.pixels().iter().zip(actual.pixels()).enumerate() {
            let mismatch = pe
                .as_ref()
                .iter()
                .zip(pa.as_ref())
                .any(|(e, a)| !((e - a).abs() <= delta));
            if mismatch {
                let msg = format!(
                    "Failure in {}_reg: image comparison for index {} - pixel mismatch \
                     at ({}, {}): expected {:?}, got {:?}",
                    self.test_name,
                    self.index,
                    idx % width,
                    idx / width,
                    pe,
                    pa
                );
                self.record_failure(msg);
                return false;
            }
        }

        true
    }

    /// Compare two binary data arrays
    ///
    /// # Returns
    ///
    /// `true` if data is identical, `false` otherwise.
    pub fn compare_strings(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 != data2 {
            let msg = format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 sizes: {} vs {}",
                self.test_name,
                self.index,
                data1.len(),
                data2.len()
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Reserve an output file path for the next check
    ///
    /// Paths have the form `tests/regout/<test_name>.<index>.<ext>`
    /// relative to the workspace root.
    ///
    /// # Errors
    ///
    /// Returns `TestError::DirectoryCreate` if the output directory
    /// cannot be created.
    pub fn regout_path(&mut self, ext: &str) -> TestResult<String> {
        self.index += 1;

        let dir = regout_dir();
        fs::create_dir_all(&dir).map_err(|e| TestError::DirectoryCreate {
            path: dir.clone(),
            message: e.to_string(),
        })?;

        Ok(format!(
            "{}/{}.{:02}.{}",
            dir, self.test_name, self.index, ext
        ))
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all tests passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
