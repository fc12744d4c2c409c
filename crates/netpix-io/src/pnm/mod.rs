//! PNM (Portable Any Map) format support
//!
//! Reads and writes all six classic Netpbm variants:
//!
//! - PBM bi-level: `P1` (plain) and `P4` (packed bits)
//! - PGM grayscale: `P2` (plain) and `P5` (raw)
//! - PPM color: `P3` (plain) and `P6` (raw)
//!
//! Decoded samples are normalized to `[0, 1]` by dividing by the header's
//! maximum value. Raw samples are one byte wide when the maximum value is
//! below 256 and two bytes, big-endian, otherwise. PAM (`P7`) is not
//! supported.

mod binary;
pub mod header;
mod plain;
pub mod token;

pub use header::{MAX_SAMPLE_VALUE, PnmHeader, read_header, write_header};
pub use token::read_value;

use crate::format::PnmFormat;
use crate::{IoError, IoResult};
use log::debug;
use netpix_core::{AnyImage, BwImage, ColorModel, ColorSpace, GrayImage, PixelBuffer, RgbImage};
use std::io::{Read, Write};

/// Options for writing grayscale and color images
///
/// # Examples
///
/// ```
/// use netpix_io::PnmOptions;
///
/// let options = PnmOptions::default().with_plain(true);
/// assert_eq!(options.max_value(), 255);
/// assert_eq!(options.with_double_precision(true).max_value(), 65535);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PnmOptions {
    /// Store 16-bit samples (`max_value = 65535`) instead of 8-bit (`255`)
    pub double_precision: bool,
    /// Write the ASCII variant instead of the binary one
    pub plain: bool,
}

impl PnmOptions {
    /// Create options for binary 8-bit output
    pub fn new() -> Self {
        Self::default()
    }

    /// Set 16-bit sample precision
    pub fn with_double_precision(mut self, double_precision: bool) -> Self {
        self.double_precision = double_precision;
        self
    }

    /// Set plain (ASCII) output
    pub fn with_plain(mut self, plain: bool) -> Self {
        self.plain = plain;
        self
    }

    /// Maximum sample value written to the header
    pub fn max_value(&self) -> u32 {
        if self.double_precision { 65535 } else { 255 }
    }
}

/// Scale a raw sample into `[0, 1]`.
#[inline]
pub(crate) fn normalize(sample: u32, max_value: u32) -> f32 {
    sample as f32 / max_value as f32
}

/// Scale a normalized value to the nearest sample in `0..=max_value`.
#[inline]
pub(crate) fn quantize(value: f32, max_value: u32) -> u32 {
    // NaN saturates to 0 in the cast
    (value.clamp(0.0, 1.0) * max_value as f32).round() as u32
}

/// Bi-level values below one half are drawn as ink (black).
#[inline]
pub(crate) fn is_ink(value: f32) -> bool {
    value < 0.5
}

fn expect_family(header: &PnmHeader, requested: ColorSpace) -> IoResult<()> {
    if header.format.color_space() != requested {
        return Err(IoError::ColorSpaceMismatch {
            requested,
            found: header.format,
        });
    }
    Ok(())
}

fn read_bw_body<R: Read>(reader: &mut R, header: &PnmHeader) -> IoResult<BwImage> {
    if header.format.is_plain() {
        plain::read_bitmap(reader, header)
    } else {
        binary::read_bitmap(reader, header)
    }
}

fn read_sample_body<C, R>(reader: &mut R, header: &PnmHeader) -> IoResult<PixelBuffer<C>>
where
    C: ColorModel,
    R: Read,
{
    if header.format.is_plain() {
        plain::read_samples(reader, header)
    } else {
        binary::read_samples(reader, header)
    }
}

/// Read any PBM, PGM or PPM image, tagged with its color space.
///
/// # See also
///
/// [`read_pnm_bw`], [`read_pnm_gray`], [`read_pnm_rgb`] for typed loaders.
pub fn read_pnm<R: Read>(mut reader: R) -> IoResult<AnyImage> {
    let header = read_header(&mut reader)?;
    debug!("dispatching {} to {} loader", header.format, header.format.color_space());
    let image = match header.format {
        PnmFormat::PlainPbm | PnmFormat::Pbm => AnyImage::Bw(read_bw_body(&mut reader, &header)?),
        PnmFormat::PlainPgm | PnmFormat::Pgm => {
            AnyImage::Gray(read_sample_body(&mut reader, &header)?)
        }
        PnmFormat::PlainPpm | PnmFormat::Ppm => {
            AnyImage::Rgb(read_sample_body(&mut reader, &header)?)
        }
    };
    Ok(image)
}

/// Read a bi-level image from a `P1` or `P4` stream.
///
/// # Errors
///
/// Returns `IoError::ColorSpaceMismatch` for PGM and PPM streams.
pub fn read_pnm_bw<R: Read>(mut reader: R) -> IoResult<BwImage> {
    let header = read_header(&mut reader)?;
    expect_family(&header, ColorSpace::Bw)?;
    read_bw_body(&mut reader, &header)
}

/// Read a grayscale image from a `P2` or `P5` stream.
///
/// # Errors
///
/// Returns `IoError::ColorSpaceMismatch` for PBM and PPM streams.
pub fn read_pnm_gray<R: Read>(mut reader: R) -> IoResult<GrayImage> {
    let header = read_header(&mut reader)?;
    expect_family(&header, ColorSpace::Gray)?;
    read_sample_body(&mut reader, &header)
}

/// Read an RGB image from a `P3` or `P6` stream.
///
/// # Errors
///
/// Returns `IoError::ColorSpaceMismatch` for PBM and PGM streams.
pub fn read_pnm_rgb<R: Read>(mut reader: R) -> IoResult<RgbImage> {
    let header = read_header(&mut reader)?;
    expect_family(&header, ColorSpace::Rgb)?;
    read_sample_body(&mut reader, &header)
}

/// Write a bi-level image as `P1` (plain) or `P4`.
pub fn write_pnm_bw<W: Write>(image: &BwImage, mut writer: W, plain: bool) -> IoResult<()> {
    let format = if plain { PnmFormat::PlainPbm } else { PnmFormat::Pbm };
    let header = PnmHeader::new(format, image.width(), image.height(), 1);
    debug!("writing {} {}x{}", format, header.width, header.height);

    write_header(&mut writer, &header)?;
    if plain {
        plain::write_bitmap(&mut writer, image)?;
    } else {
        binary::write_bitmap(&mut writer, image)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_sample_image<C, W>(
    image: &PixelBuffer<C>,
    mut writer: W,
    format: PnmFormat,
    options: &PnmOptions,
) -> IoResult<()>
where
    C: ColorModel,
    W: Write,
{
    let max_value = options.max_value();
    let header = PnmHeader::new(format, image.width(), image.height(), max_value);
    debug!(
        "writing {} {}x{} max={}",
        format, header.width, header.height, max_value
    );

    write_header(&mut writer, &header)?;
    if format.is_plain() {
        plain::write_samples(&mut writer, image, max_value)?;
    } else {
        binary::write_samples(&mut writer, image, max_value)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a grayscale image as `P2` (plain) or `P5`.
pub fn write_pnm_gray<W: Write>(image: &GrayImage, writer: W, options: &PnmOptions) -> IoResult<()> {
    let format = if options.plain { PnmFormat::PlainPgm } else { PnmFormat::Pgm };
    write_sample_image(image, writer, format, options)
}

/// Write an RGB image as `P3` (plain) or `P6`.
pub fn write_pnm_rgb<W: Write>(image: &RgbImage, writer: W, options: &PnmOptions) -> IoResult<()> {
    let format = if options.plain { PnmFormat::PlainPpm } else { PnmFormat::Ppm };
    write_sample_image(image, writer, format, options)
}

/// Write a tagged image with the writer matching its color space.
///
/// `double_precision` is ignored for bi-level images.
pub fn write_pnm<W: Write>(image: &AnyImage, writer: W, options: &PnmOptions) -> IoResult<()> {
    match image {
        AnyImage::Bw(img) => write_pnm_bw(img, writer, options.plain),
        AnyImage::Gray(img) => write_pnm_gray(img, writer, options),
        AnyImage::Rgb(img) => write_pnm_rgb(img, writer, options),
    }
}

/// Decode an image held in memory.
pub fn read_pnm_mem(data: &[u8]) -> IoResult<AnyImage> {
    read_pnm(data)
}

/// Encode an image into a new byte vector.
pub fn write_pnm_mem(image: &AnyImage, options: &PnmOptions) -> IoResult<Vec<u8>> {
    let mut out = Vec::new();
    write_pnm(image, &mut out, options)?;
    Ok(out)
}
