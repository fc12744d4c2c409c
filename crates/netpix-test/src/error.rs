//! Error types for the test helpers

use thiserror::Error;

/// Errors that can occur while preparing regression output
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to create the output directory
    #[error("failed to create directory '{path}': {message}")]
    DirectoryCreate { path: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test helper operations
pub type TestResult<T> = Result<T, TestError>;
