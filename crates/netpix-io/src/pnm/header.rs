//! Netpbm header reading and writing
//!
//! A header is the magic number followed by width, height and, for
//! grayscale and color variants, the maximum sample value. Bi-level
//! variants imply a maximum of 1 and store no such field.

use super::token::read_value;
use crate::format::PnmFormat;
use crate::{IoError, IoResult};
use log::debug;
use std::io::{Read, Write};

/// Largest maximum value allowed by the Netpbm formats
pub const MAX_SAMPLE_VALUE: u32 = 65535;

/// Parsed or to-be-written Netpbm header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PnmHeader {
    /// Variant selected by the magic number
    pub format: PnmFormat,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Maximum sample value; `None` for bi-level formats
    pub max_value: Option<u32>,
}

impl PnmHeader {
    /// Build a header, choosing `max_value` from the format family.
    ///
    /// `max_value` is ignored for bi-level formats.
    pub fn new(format: PnmFormat, width: u32, height: u32, max_value: u32) -> Self {
        PnmHeader {
            format,
            width,
            height,
            max_value: (!format.is_bitmap()).then_some(max_value),
        }
    }

    /// Normalization divisor: `max_value`, or 1 for bi-level formats.
    pub fn sample_max(&self) -> u32 {
        self.max_value.unwrap_or(1)
    }

    /// Bytes per binary sample: 2 when `max_value >= 256`, else 1.
    pub fn bytes_per_sample(&self) -> usize {
        if self.sample_max() >= 256 { 2 } else { 1 }
    }

    /// Number of samples in the raster (`width * height * channels`).
    ///
    /// # Errors
    ///
    /// Returns `IoError::InvalidData` if the count overflows `usize`.
    pub fn sample_count(&self) -> IoResult<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|n| n.checked_mul(self.format.channels()))
            .ok_or_else(|| {
                IoError::InvalidData(format!(
                    "raster too large: {}x{}",
                    self.width, self.height
                ))
            })
    }
}

/// Read a header, leaving the stream positioned at the first raster byte.
///
/// # Errors
///
/// - `IoError::InvalidMagic` if the stream does not start with `P1`..`P6`
/// - `IoError::MalformedToken` / `IoError::UnexpectedEof` for bad fields
/// - `IoError::InvalidMaxValue` if `max_value` is 0 or above 65535
pub fn read_header<R: Read>(reader: &mut R) -> IoResult<PnmHeader> {
    let mut magic = [0u8; 2];
    reader
        .read_exact(&mut magic)
        .map_err(|e| IoError::from_read(e, "magic number"))?;
    let format = PnmFormat::from_magic(magic)?;

    let width = read_value(reader)?;
    let height = read_value(reader)?;
    let max_value = if format.is_bitmap() {
        None
    } else {
        let max_value = read_value(reader)?;
        if max_value == 0 || max_value > MAX_SAMPLE_VALUE {
            return Err(IoError::InvalidMaxValue(max_value));
        }
        Some(max_value)
    };

    let header = PnmHeader {
        format,
        width,
        height,
        max_value,
    };
    header.sample_count()?;

    debug!(
        "PNM header: {} {}x{} max={}",
        format,
        width,
        height,
        header.sample_max()
    );
    Ok(header)
}

/// Write a header as `P<n>\n<width> <height>\n[<max_value>\n]`.
pub fn write_header<W: Write>(writer: &mut W, header: &PnmHeader) -> IoResult<()> {
    let [p, digit] = header.format.magic();
    writeln!(writer, "{}{}", p as char, digit as char)?;
    writeln!(writer, "{} {}", header.width, header.height)?;
    if let Some(max_value) = header.max_value {
        writeln!(writer, "{}", max_value)?;
    }
    Ok(())
}
