//! Error types for netpix-core
//!
//! Provides a unified error type for buffer construction and pixel
//! access. Each variant carries the coordinates or sizes involved so
//! callers can report them without re-deriving anything.

use thiserror::Error;

/// netpix-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested dimensions cannot be represented in memory
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel coordinate outside `[0, width) x [0, height)`
    #[error("index out of range: ({x}, {y}) in {width}x{height} image")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Pixel vector length does not match `width * height`
    #[error("data length mismatch: expected {expected} pixels, got {actual}")]
    DataLengthMismatch { expected: usize, actual: usize },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
