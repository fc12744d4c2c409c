//! I/O error types
//!
//! Provides a unified error type for all image I/O operations. Errors
//! fall into four groups:
//!
//! - [`IoError::Io`]: the file cannot be opened, read or written
//! - format errors ([`IoError::is_format_error`]): bad magic number,
//!   malformed token, invalid maximum value, truncated data
//! - [`IoError::ColorSpaceMismatch`]: the file's format family does not
//!   match the requested color space
//! - [`IoError::Core`]: errors from the core library, such as an
//!   out-of-range pixel coordinate

use crate::format::PnmFormat;
use netpix_core::ColorSpace;
use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream does not start with `P1`..`P6`
    #[error("invalid file format: magic number {0:?}")]
    InvalidMagic([u8; 2]),

    /// A header or sample token is not an unsigned decimal integer
    #[error("malformed numeric token: {0:?}")]
    MalformedToken(String),

    /// The stream ended inside the header or raster
    #[error("unexpected end of stream while reading {0}")]
    UnexpectedEof(&'static str),

    /// The header's maximum value is outside `1..=65535`
    #[error("invalid maximum value: {0}")]
    InvalidMaxValue(u32),

    /// The image data is structurally invalid
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// The file holds a different format family than requested
    #[error("wrong format for requested color space: {requested} image requested, file is {found}")]
    ColorSpaceMismatch {
        requested: ColorSpace,
        found: PnmFormat,
    },

    /// An error from the core library (e.g. pixel index out of range)
    #[error("core error: {0}")]
    Core(#[from] netpix_core::Error),
}

impl IoError {
    /// True for errors caused by the content of the stream rather than
    /// by the file system or the caller.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            IoError::InvalidMagic(_)
                | IoError::MalformedToken(_)
                | IoError::UnexpectedEof(_)
                | IoError::InvalidMaxValue(_)
                | IoError::InvalidData(_)
        )
    }

    /// Map a short read onto [`IoError::UnexpectedEof`], keeping other
    /// I/O failures as they are.
    pub(crate) fn from_read(err: std::io::Error, context: &'static str) -> Self {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            IoError::UnexpectedEof(context)
        } else {
            IoError::Io(err)
        }
    }
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
