//! Plain (ASCII) raster codecs (`P1`, `P2`, `P3`)
//!
//! Every sample is a whitespace separated decimal token. In `P1` a `1`
//! is black and anything else is white.
//!
//! The writer starts each image row on a new line and wraps lines so
//! that none exceeds 70 characters.

use super::header::PnmHeader;
use super::token::read_value;
use super::{is_ink, normalize, quantize};
use crate::IoResult;
use netpix_core::{BwImage, ColorModel, PixelBuffer};
use std::io::{Read, Write};

/// Longest line the plain writer emits
const MAX_LINE_LEN: usize = 70;

/// Decode `width * height` bit tokens.
pub(crate) fn read_bitmap<R: Read>(reader: &mut R, header: &PnmHeader) -> IoResult<BwImage> {
    let mut pixels = Vec::new();
    for _ in 0..header.height {
        for _ in 0..header.width {
            pixels.push([if read_value(reader)? == 1 { 0.0 } else { 1.0 }]);
        }
    }
    Ok(BwImage::from_pixels(header.width, header.height, pixels)?)
}

/// Decode `width * height * channels` sample tokens.
///
/// Samples above `max_value` are passed through as values above 1.0.
pub(crate) fn read_samples<C, R>(reader: &mut R, header: &PnmHeader) -> IoResult<PixelBuffer<C>>
where
    C: ColorModel,
    R: Read,
{
    let max_value = header.sample_max();
    let mut pixels = Vec::new();
    for _ in 0..header.height {
        for _ in 0..header.width {
            let mut pixel = C::Pixel::default();
            for channel in pixel.as_mut() {
                *channel = normalize(read_value(reader)?, max_value);
            }
            pixels.push(pixel);
        }
    }
    Ok(PixelBuffer::from_pixels(header.width, header.height, pixels)?)
}

/// Line-length aware token writer
struct TokenWriter<'a, W: Write> {
    out: &'a mut W,
    line_len: usize,
    scratch: Vec<u8>,
}

impl<'a, W: Write> TokenWriter<'a, W> {
    fn new(out: &'a mut W) -> Self {
        TokenWriter {
            out,
            line_len: 0,
            scratch: Vec::with_capacity(8),
        }
    }

    fn token(&mut self, value: u32) -> IoResult<()> {
        self.scratch.clear();
        write!(self.scratch, "{}", value)?;

        if self.line_len > 0 {
            if self.line_len + 1 + self.scratch.len() > MAX_LINE_LEN {
                self.out.write_all(b"\n")?;
                self.line_len = 0;
            } else {
                self.out.write_all(b" ")?;
                self.line_len += 1;
            }
        }
        self.out.write_all(&self.scratch)?;
        self.line_len += self.scratch.len();
        Ok(())
    }

    fn end_row(&mut self) -> IoResult<()> {
        if self.line_len > 0 {
            self.out.write_all(b"\n")?;
            self.line_len = 0;
        }
        Ok(())
    }
}

/// Encode a bi-level image as `0`/`1` tokens.
pub(crate) fn write_bitmap<W: Write>(writer: &mut W, image: &BwImage) -> IoResult<()> {
    let mut tokens = TokenWriter::new(writer);
    for row in image.rows() {
        for pixel in row {
            tokens.token(u32::from(is_ink(pixel[0])))?;
        }
        tokens.end_row()?;
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
    let mut tokens = TokenWriter::new(writer);
    for row in image.rows() {
        for pixel in row {
            for &value in pixel.as_ref() {
                tokens.token(quantize(value, max_value))?;
            }
        }
        tokens.end_row()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IoError;
    use crate::format::PnmFormat;
    use netpix_core::{Gray, GrayImage, Rgb, RgbImage};
    use std::io::Cursor;

    #[test]
    fn test_read_graymap_tokens() {
        let header = PnmHeader::new(PnmFormat::PlainPgm, 2, 1, 255);
        let image: GrayImage = read_samples(&mut Cursor::new(&b"0 255"[..]), &header).unwrap();
        assert_eq!(image.get_pixel(0, 0).unwrap(), [0.0]);
        assert_eq!(image.get_pixel(1, 0).unwrap(), [1.0]);
    }

    #[test]
    fn test_read_bitmap_inverts() {
        let header = PnmHeader::new(PnmFormat::PlainPbm, 3, 1, 1);
        let image = read_bitmap(&mut Cursor::new(&b"1 0\n2\n"[..]), &header).unwrap();
        assert_eq!(image.pixels(), &[[0.0], [1.0], [1.0]]);
    }

    #[test]
    fn test_read_truncated() {
        let header = PnmHeader::new(PnmFormat::PlainPpm, 1, 1, 255);
        let err = read_samples::<Rgb, _>(&mut Cursor::new(&b"1 2 "[..]), &header).unwrap_err();
        assert!(matches!(err, IoError::UnexpectedEof(_)));
    }

    #[test]
    fn test_read_huge_header_fails_on_first_token() {
        let header = PnmHeader::new(PnmFormat::PlainPbm, u32::MAX, u32::MAX, 1);
        let err = read_bitmap(&mut Cursor::new(&b""[..]), &header).unwrap_err();
        assert!(matches!(err, IoError::UnexpectedEof(_)));

        let header = PnmHeader::new(PnmFormat::PlainPgm, u32::MAX, u32::MAX, 255);
        let err = read_samples::<Gray, _>(&mut Cursor::new(&b"7 8"[..]), &header).unwrap_err();
        assert!(matches!(err, IoError::UnexpectedEof(_)));
    }

    #[test]
    fn test_zero_sized_round_trip() {
        let empty = BwImage::new(5, 0).unwrap();
        let mut out = Vec::new();
        write_bitmap(&mut out, &empty).unwrap();
        assert!(out.is_empty());
        let header = PnmHeader::new(PnmFormat::PlainPbm, 5, 0, 1);
        assert_eq!(read_bitmap(&mut Cursor::new(out), &header).unwrap(), empty);

        let empty = GrayImage::new(0, 3).unwrap();
        let mut out = Vec::new();
        write_samples(&mut out, &empty, 255).unwrap();
        assert!(out.is_empty());
        let header = PnmHeader::new(PnmFormat::PlainPgm, 0, 3, 255);
        let decoded: GrayImage = read_samples(&mut Cursor::new(out), &header).unwrap();
        assert_eq!(decoded, empty);
    }

    #[test]
    fn test_write_rows_on_own_lines() {
        let mut image = BwImage::new_with_value(3, 2, 1.0).unwrap();
        image.set_pixel(1, 0, [0.0]).unwrap();
        let mut out = Vec::new();
        write_bitmap(&mut out, &image).unwrap();
        assert_eq!(out, b"0 1 0\n0 0 0\n");
    }

    #[test]
    fn test_write_rgb_samples() {
        let image = RgbImage::from_pixels(2, 1, vec![[1.0, 0.0, 0.5], [0.2, 0.4, 0.6]]).unwrap();
        let mut out = Vec::new();
        write_samples(&mut out, &image, 255).unwrap();
        assert_eq!(out, b"255 0 128 51 102 153\n");
    }

    #[test]
    fn test_write_wraps_long_lines() {
        let image = PixelBuffer::<Gray>::new_with_value(40, 1, 1.0).unwrap();
        let mut out = Vec::new();
        write_samples(&mut out, &image, 65535).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().all(|line| line.len() <= MAX_LINE_LEN));
        assert_eq!(text.split_whitespace().count(), 40);
        assert!(text.split_whitespace().all(|t| t == "65535"));
    }
}
