//! Binary raster codecs (`P4`, `P5`, `P6`)
//!
//! - `P4`: one bit per pixel, most significant bit first, each row padded
//!   to a whole byte. A set bit is black.
//! - `P5` / `P6`: one byte per sample when `max_value < 256`, otherwise
//!   two bytes in big-endian order.

use super::header::PnmHeader;
use super::{is_ink, normalize, quantize};
use crate::{IoError, IoResult};
use netpix_core::{BwImage, ColorModel, PixelBuffer};
use std::io::{Read, Write};

/// Bytes in one packed bi-level row.
#[inline]
fn row_bytes(width: u32) -> usize {
    (width as usize).div_ceil(8)
}

/// Read exactly `len` raster bytes, growing the buffer only as data
/// arrives.
fn read_raster<R: Read>(reader: &mut R, len: usize, context: &'static str) -> IoResult<Vec<u8>> {
    let mut raster = Vec::new();
    reader
        .by_ref()
        .take(len as u64)
        .read_to_end(&mut raster)
        .map_err(|e| IoError::from_read(e, context))?;
    if raster.len() < len {
        return Err(IoError::UnexpectedEof(context));
    }
    Ok(raster)
}

/// Decode a packed bi-level raster.
pub(crate) fn read_bitmap<R: Read>(reader: &mut R, header: &PnmHeader) -> IoResult<BwImage> {
    let stride = row_bytes(header.width);
    if stride == 0 || header.height == 0 {
        return Ok(BwImage::new(header.width, header.height)?);
    }

    let len = stride
        .checked_mul(header.height as usize)
        .ok_or_else(|| IoError::InvalidData("PBM raster too large".to_string()))?;
    let raster = read_raster(reader, len, "PBM raster")?;
    let mut image = BwImage::new(header.width, header.height)?;

    let width = header.width as usize;
    for (packed, row) in raster
        .chunks_exact(stride)
        .zip(image.pixels_mut().chunks_exact_mut(width))
    {
        for (byte_idx, &byte) in packed.iter().enumerate() {
            let start = byte_idx * 8;
            // The last byte of a row may hold fewer than 8 pixels
            let end = (start + 8).min(width);
            for (bit, pixel) in row[start..end].iter_mut().enumerate() {
                let ink = byte & (0x80 >> bit) != 0;
                pixel[0] = if ink { 0.0 } else { 1.0 };
            }
        }
    }

    Ok(image)
}

/// Decode a raw grayscale or color raster into `C` pixels.
pub(crate) fn read_samples<C, R>(reader: &mut R, header: &PnmHeader) -> IoResult<PixelBuffer<C>>
where
    C: ColorModel,
    R: Read,
{
    let count = header.sample_count()?;
    let bytes_per_sample = header.bytes_per_sample();
    let len = count
        .checked_mul(bytes_per_sample)
        .ok_or_else(|| IoError::InvalidData("raster too large".to_string()))?;
    let raster = read_raster(reader, len, "raster samples")?;
    let max_value = header.sample_max();

    let samples: Vec<f32> = if bytes_per_sample == 1 {
        raster
            .iter()
            .map(|&s| normalize(u32::from(s), max_value))
            .collect()
    } else {
        raster
            .chunks_exact(2)
            .map(|s| normalize(u32::from(u16::from_be_bytes([s[0], s[1]])), max_value))
            .collect()
    };

    let mut image = PixelBuffer::<C>::new(header.width, header.height)?;
    for (pixel, channels) in image
        .pixels_mut()
        .iter_mut()
        .zip(samples.chunks_exact(C::CHANNELS))
    {
        pixel.as_mut().copy_from_slice(channels);
    }

    Ok(image)
}

/// Encode a bi-level image as packed rows.
pub(crate) fn write_bitmap<W: Write>(writer: &mut W, image: &BwImage) -> IoResult<()> {
    let mut packed = vec![0u8; row_bytes(image.width())];
    for row in image.rows() {
        packed.fill(0);
        for (x, pixel) in row.iter().enumerate() {
            if is_ink(pixel[0]) {
                packed[x / 8] |= 0x80 >> (x % 8);
            }
        }
        writer.write_all(&packed)?;
    }
    Ok(())
}

/// Encode grayscale or color samples scaled to `max_value`.
pub(crate) fn write_samples<C, W>(
    writer: &mut W,
    image: &PixelBuffer<C>,
    max_value: u32,
) -> IoResult<()>
where
    C: ColorModel,
    W: Write,
{
    let wide = max_value >= 256;
    let bytes_per_sample = if wide { 2 } else { 1 };
    let mut line = Vec::with_capacity(image.width() as usize * C::CHANNELS * bytes_per_sample);

    for row in image.rows() {
        line.clear();
        for pixel in row {
            for &value in pixel.as_ref() {
                let sample = quantize(value, max_value);
                if wide {
                    line.extend_from_slice(&(sample as u16).to_be_bytes());
                } else {
                    line.push(sample as u8);
                }
            }
        }
        writer.write_all(&line)?;
    }
    Ok(())
}
