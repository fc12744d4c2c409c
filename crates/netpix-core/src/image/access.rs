//! Pixel access functions
//!
//! Bounds-checked coordinate access, row slices and fills. Every
//! coordinate accessor fails with [`Error::IndexOutOfBounds`] rather than
//! wrapping into a neighbouring row.

use super::PixelBuffer;
use crate::color_space::ColorModel;
use crate::error::{Error, Result};

impl<C: ColorModel> PixelBuffer<C> {
    /// Linear offset of `(x, y)`, checked against the image bounds.
    #[inline]
    fn offset(&self, x: u32, y: u32) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(x as usize + y as usize * self.width as usize)
    }

    /// Borrow the channel tuple at column `x`, row `y`.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `x >= width` or `y >= height`.
    pub fn at(&self, x: u32, y: u32) -> Result<&C::Pixel> {
        let idx = self.offset(x, y)?;
        Ok(&self.pixels[idx])
    }

    /// Mutably borrow the channel tuple at column `x`, row `y`.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `x >= width` or `y >= height`.
    pub fn at_mut(&mut self, x: u32, y: u32) -> Result<&mut C::Pixel> {
        let idx = self.offset(x, y)?;
        Ok(&mut self.pixels[idx])
    }

    /// Get a copy of the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<C::Pixel> {
        self.at(x, y).copied()
    }

    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: C::Pixel) -> Result<()> {
        *self.at_mut(x, y)? = pixel;
        Ok(())
    }

    /// Get a row of pixel data
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `y >= height`.
    pub fn row(&self, y: u32) -> Result<&[C::Pixel]> {
        if y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x: 0,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let start = y as usize * self.width as usize;
        Ok(&self.pixels[start..start + self.width as usize])
    }

    /// Iterate over rows, top to bottom.
    ///
    /// Yields nothing for zero-width or zero-height buffers.
    pub fn rows(&self) -> impl Iterator<Item = &[C::Pixel]> {
        // chunks_exact panics on a zero chunk size
        let width = (self.width as usize).max(1);
        self.pixels.chunks_exact(width)
    }

    /// Set every channel of every pixel to `value`
    pub fn fill(&mut self, value: f32) {
        self.pixels.fill(C::splat(value));
    }

    /// Set every pixel to `pixel`
    pub fn fill_pixel(&mut self, pixel: C::Pixel) {
        self.pixels.fill(pixel);
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, GrayImage, RgbImage};

    #[test]
    fn test_at_row_major_offset() {
        let mut img = GrayImage::new(3, 2).unwrap();
        img.set_pixel(1, 1, [0.75]).unwrap();
        // (1, 1) -> 1 + 1 * 3
        assert_eq!(img.pixels()[4], [0.75]);
        assert_eq!(img.at(1, 1).unwrap(), &[0.75]);
    }

    #[test]
    fn test_at_out_of_bounds() {
        let img = GrayImage::new(3, 2).unwrap();
        // (3, 0) would alias (0, 1) if wrapping were allowed
        assert_eq!(
            img.at(3, 0).unwrap_err(),
            Error::IndexOutOfBounds {
                x: 3,
                y: 0,
                width: 3,
                height: 2
            }
        );
        assert!(img.at(0, 2).is_err());
        assert!(img.get_pixel(u32::MAX, u32::MAX).is_err());
    }

    #[test]
    fn test_at_mut_out_of_bounds() {
        let mut img = RgbImage::new(1, 1).unwrap();
        assert!(img.at_mut(1, 0).is_err());
        assert!(img.set_pixel(0, 1, [1.0; 3]).is_err());
        assert_eq!(img.get_pixel(0, 0).unwrap(), [0.0; 3]);
    }

    #[test]
    fn test_empty_access_fails() {
        let img = GrayImage::new(0, 0).unwrap();
        assert!(img.at(0, 0).is_err());
        assert_eq!(img.rows().count(), 0);
    }

    #[test]
    fn test_fill() {
        let mut img = RgbImage::new(2, 2).unwrap();
        img.fill(0.25);
        assert!(img.pixels().iter().all(|p| *p == [0.25; 3]));

        img.fill_pixel([1.0, 0.0, 0.5]);
        assert_eq!(img.get_pixel(1, 1).unwrap(), [1.0, 0.0, 0.5]);
    }

    #[test]
    fn test_rows() {
        let mut img = GrayImage::new(2, 3).unwrap();
        img.set_pixel(1, 2, [1.0]).unwrap();
        let rows: Vec<_> = img.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], &[[0.0], [1.0]]);
        assert_eq!(img.row(2).unwrap(), rows[2]);
        assert!(img.row(3).is_err());
    }
}
