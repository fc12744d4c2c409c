//! PixelBuffer - Color-space typed float image
//!
//! `PixelBuffer<C>` is a 2D array of fixed-size `f32` channel tuples. The
//! color space `C` is part of the type: a grayscale buffer can never be
//! passed where an RGB buffer is expected, and converting between color
//! spaces always produces a new buffer.
//!
//! # Memory layout
//!
//! Pixels are stored in row-major order with no padding. The pixel at
//! `(i, j)` (column `i`, row `j`) is at linear offset `i + j * width`.
//!
//! # Examples
//!
//! ```
//! use netpix_core::GrayImage;
//!
//! let mut gray = GrayImage::new(3, 2).unwrap();
//! gray.fill(0.5);
//! gray.at_mut(2, 1).unwrap()[0] = 1.0;
//! assert_eq!(gray.at(2, 1).unwrap(), &[1.0]);
//! assert_eq!(gray.at(0, 0).unwrap(), &[0.5]);
//! ```

mod access;
mod any;

pub use any::AnyImage;

use crate::color_space::{Bw, ColorModel, ColorSpace, Gray, Hsv, Rgb};
use crate::error::{Error, Result};
use std::marker::PhantomData;

/// Black and white image
pub type BwImage = PixelBuffer<Bw>;
/// Grayscale image
pub type GrayImage = PixelBuffer<Gray>;
/// RGB image
pub type RgbImage = PixelBuffer<Rgb>;
/// HSV image
pub type HsvImage = PixelBuffer<Hsv>;

/// Float image tagged with color space `C`
///
/// Width and height are fixed at construction. Zero-sized buffers are
/// allowed and own no pixel storage.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer<C: ColorModel> {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Pixel data (row-major, no padding)
    pixels: Vec<C::Pixel>,
    _space: PhantomData<C>,
}

/// Number of pixels in a `width` x `height` image of `C`, if the whole
/// buffer is addressable.
fn pixel_count<C: ColorModel>(width: u32, height: u32) -> Result<usize> {
    let invalid = || Error::InvalidDimension { width, height };
    let count = (width as usize).checked_mul(height as usize).ok_or_else(invalid)?;
    let bytes = count
        .checked_mul(std::mem::size_of::<C::Pixel>())
        .ok_or_else(invalid)?;
    if bytes > isize::MAX as usize {
        return Err(invalid());
    }
    Ok(count)
}

impl<C: ColorModel> PixelBuffer<C> {
    /// Create a new buffer with every channel set to zero
    ///
    /// # Arguments
    ///
    /// * `width` - Width in pixels (may be 0)
    /// * `height` - Height in pixels (may be 0)
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if the buffer size overflows or
    /// cannot be allocated.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_with_value(width, height, 0.0)
    }

    /// Create a new buffer with every channel set to `value`
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if the buffer size overflows or
    /// cannot be allocated.
    pub fn new_with_value(width: u32, height: u32, value: f32) -> Result<Self> {
        let size = pixel_count::<C>(width, height)?;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(size)
            .map_err(|_| Error::InvalidDimension { width, height })?;
        pixels.resize(size, C::splat(value));
        Ok(PixelBuffer {
            width,
            height,
            pixels,
            _space: PhantomData,
        })
    }

    /// Create a buffer from row-major pixel data
    ///
    /// # Errors
    ///
    /// Returns `Error::DataLengthMismatch` if `pixels.len()` is not
    /// `width * height`.
    ///
    /// # Examples
    ///
    /// ```
    /// use netpix_core::BwImage;
    ///
    /// let bw = BwImage::from_pixels(2, 1, vec![[1.0], [0.0]]).unwrap();
    /// assert_eq!(bw.get_pixel(1, 0).unwrap(), [0.0]);
    /// assert!(BwImage::from_pixels(2, 2, vec![[1.0]]).is_err());
    /// ```
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<C::Pixel>) -> Result<Self> {
        let expected = pixel_count::<C>(width, height)?;
        if pixels.len() != expected {
            return Err(Error::DataLengthMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(PixelBuffer {
            width,
            height,
            pixels,
            _space: PhantomData,
        })
    }

    /// Get the image width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the image dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Color space tag of this buffer
    #[inline]
    pub fn color_space(&self) -> ColorSpace {
        C::SPACE
    }

    /// Channels per pixel
    #[inline]
    pub fn channels(&self) -> usize {
        C::CHANNELS
    }

    /// Number of pixels (`width * height`)
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// True for zero-width or zero-height buffers
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Get raw access to the pixel data
    #[inline]
    pub fn pixels(&self) -> &[C::Pixel] {
        &self.pixels
    }

    /// Get mutable access to the pixel data
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [C::Pixel] {
        &mut self.pixels
    }

    /// Consume the buffer, returning its pixel data
    pub fn into_pixels(self) -> Vec<C::Pixel> {
        self.pixels
    }

    /// Build a buffer in color space `D` by applying `f` to every pixel.
    ///
    /// The result has the same dimensions as `self`; pixels are visited
    /// independently in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use netpix_core::{Gray, GrayImage, RgbImage};
    ///
    /// let rgb = RgbImage::new_with_value(2, 2, 0.5).unwrap();
    /// let gray: GrayImage = rgb.map_pixels::<Gray, _>(|[r, _, _]| [r]);
    /// assert_eq!(gray.dimensions(), (2, 2));
    /// assert_eq!(gray.get_pixel(1, 1).unwrap(), [0.5]);
    /// ```
    pub fn map_pixels<D, F>(&self, f: F) -> PixelBuffer<D>
    where
        D: ColorModel,
        F: FnMut(C::Pixel) -> D::Pixel,
    {
        PixelBuffer {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().copied().map(f).collect(),
            _space: PhantomData,
        }
    }
}
