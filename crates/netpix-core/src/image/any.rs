//! Color-space tagged image handle
//!
//! [`AnyImage`] carries one of the buffers that a Netpbm file can hold,
//! together with its color space discriminant. Consumers dispatch on it
//! with a single `match`.

use super::{BwImage, GrayImage, RgbImage};
use crate::color_space::{ColorSpace, Rgb};

/// A BW, grayscale or RGB image with its color space tag
///
/// There is no HSV variant; HSV buffers must be
/// converted to RGB before they can be stored.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyImage {
    /// Bi-level image
    Bw(BwImage),
    /// Grayscale image
    Gray(GrayImage),
    /// RGB image
    Rgb(RgbImage),
}

impl AnyImage {
    /// Color space of the wrapped buffer
    pub fn color_space(&self) -> ColorSpace {
        match self {
            AnyImage::Bw(_) => ColorSpace::Bw,
            AnyImage::Gray(_) => ColorSpace::Gray,
            AnyImage::Rgb(_) => ColorSpace::Rgb,
        }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.dimensions().0
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.dimensions().1
    }

    /// Dimensions as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            AnyImage::Bw(img) => img.dimensions(),
            AnyImage::Gray(img) => img.dimensions(),
            AnyImage::Rgb(img) => img.dimensions(),
        }
    }

    /// Borrow the BW buffer, if this is one
    pub fn as_bw(&self) -> Option<&BwImage> {
        match self {
            AnyImage::Bw(img) => Some(img),
            _ => None,
        }
    }

    /// Borrow the grayscale buffer, if this is one
    pub fn as_gray(&self) -> Option<&GrayImage> {
        match self {
            AnyImage::Gray(img) => Some(img),
            _ => None,
        }
    }

    /// Borrow the RGB buffer, if this is one
    pub fn as_rgb(&self) -> Option<&RgbImage> {
        match self {
            AnyImage::Rgb(img) => Some(img),
            _ => None,
        }
    }

    /// Expand to RGB, replicating the single channel of BW and
    /// grayscale images into all three channels.
    ///
    /// # Examples
    ///
    /// ```
    /// use netpix_core::{AnyImage, GrayImage};
    ///
    /// let gray = GrayImage::new_with_value(2, 1, 0.5).unwrap();
    /// let rgb = AnyImage::from(gray).into_rgb_lossy();
    /// assert_eq!(rgb.get_pixel(1, 0).unwrap(), [0.5, 0.5, 0.5]);
    /// ```
    pub fn into_rgb_lossy(self) -> RgbImage {
        match self {
            AnyImage::Bw(img) => img.map_pixels::<Rgb, _>(|[l]| [l; 3]),
            AnyImage::Gray(img) => img.map_pixels::<Rgb, _>(|[l]| [l; 3]),
            AnyImage::Rgb(img) => img,
        }
    }
}

impl From<BwImage> for AnyImage {
    fn from(img: BwImage) -> Self {
        AnyImage::Bw(img)
    }
}

impl From<GrayImage> for AnyImage {
    fn from(img: GrayImage) -> Self {
        AnyImage::Gray(img)
    }
}

impl From<RgbImage> for AnyImage {
    fn from(img: RgbImage) -> Self {
        AnyImage::Rgb(img)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_follows_variant() {
        let bw = AnyImage::from(BwImage::new(3, 1).unwrap());
        assert_eq!(bw.color_space(), ColorSpace::Bw);
        assert_eq!(bw.dimensions(), (3, 1));
        assert!(bw.as_bw().is_some());
        assert!(bw.as_rgb().is_none());

        let rgb = AnyImage::from(RgbImage::new(1, 4).unwrap());
        assert_eq!(rgb.color_space(), ColorSpace::Rgb);
        assert_eq!(rgb.height(), 4);
        assert!(rgb.as_gray().is_none());
    }

    #[test]
    fn test_into_rgb_lossy_from_bw() {
        let mut bw = BwImage::new(2, 1).unwrap();
        bw.set_pixel(0, 0, [1.0]).unwrap();
        let rgb = AnyImage::Bw(bw).into_rgb_lossy();
        assert_eq!(rgb.get_pixel(0, 0).unwrap(), [1.0; 3]);
        assert_eq!(rgb.get_pixel(1, 0).unwrap(), [0.0; 3]);
    }
}
