//! Color spaces and their compile-time markers
//!
//! A [`PixelBuffer`](crate::PixelBuffer) is tagged with exactly one color
//! space for its whole lifetime. The tag is a type parameter implementing
//! [`ColorModel`], so the channel count is known at compile time and the
//! per-pixel loops never switch on a run-time value.
//!
//! | Space | Marker | Channels | Channel order |
//! |-------|--------|----------|---------------|
//! | BW    | [`Bw`]   | 1 | level (0 = black, 1 = white) |
//! | Gray  | [`Gray`] | 1 | luminance |
//! | RGB   | [`Rgb`]  | 3 | red, green, blue |
//! | HSV   | [`Hsv`]  | 3 | hue, saturation, value (all normalized to [0, 1]) |

use std::fmt;

/// Supported color spaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// Bi-level black and white
    Bw,
    /// Single channel luminance
    Gray,
    /// Red, green, blue
    Rgb,
    /// Hue, saturation, value
    Hsv,
}

impl ColorSpace {
    /// Number of channels stored per pixel.
    pub const fn channels(self) -> usize {
        match self {
            ColorSpace::Bw | ColorSpace::Gray => 1,
            ColorSpace::Rgb | ColorSpace::Hsv => 3,
        }
    }

    /// Short display name.
    pub const fn name(self) -> &'static str {
        match self {
            ColorSpace::Bw => "BW",
            ColorSpace::Gray => "Gray",
            ColorSpace::Rgb => "RGB",
            ColorSpace::Hsv => "HSV",
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compile-time color space tag.
///
/// `Pixel` is the fixed-size channel tuple of one pixel; its length is
/// always [`ColorModel::CHANNELS`].
pub trait ColorModel: Copy + Clone + fmt::Debug + Default + PartialEq + 'static {
    /// Channel tuple of a single pixel
    type Pixel: Copy + Default + PartialEq + fmt::Debug + AsRef<[f32]> + AsMut<[f32]>;

    /// Run-time discriminant of this color space
    const SPACE: ColorSpace;

    /// Number of channels, equal to `SPACE.channels()`
    const CHANNELS: usize;

    /// Pixel with every channel set to `value`.
    fn splat(value: f32) -> Self::Pixel;
}

/// Black and white marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bw;

/// Grayscale marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gray;

/// RGB marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb;

/// HSV marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hsv;

impl ColorModel for Bw {
    type Pixel = [f32; 1];
    const SPACE: ColorSpace = ColorSpace::Bw;
    const CHANNELS: usize = 1;

    #[inline]
    fn splat(value: f32) -> Self::Pixel {
        [value]
    }
}

impl ColorModel for Gray {
    type Pixel = [f32; 1];
    const SPACE: ColorSpace = ColorSpace::Gray;
    const CHANNELS: usize = 1;

    #[inline]
    fn splat(value: f32) -> Self::Pixel {
        [value]
    }
}

impl ColorModel for Rgb {
    type Pixel = [f32; 3];
    const SPACE: ColorSpace = ColorSpace::Rgb;
    const CHANNELS: usize = 3;

    #[inline]
    fn splat(value: f32) -> Self::Pixel {
        [value; 3]
    }
}

impl ColorModel for Hsv {
    type Pixel = [f32; 3];
    const SPACE: ColorSpace = ColorSpace::Hsv;
    const CHANNELS: usize = 3;

    #[inline]
    fn splat(value: f32) -> Self::Pixel {
        [value; 3]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_counts() {
        assert_eq!(ColorSpace::Bw.channels(), 1);
        assert_eq!(ColorSpace::Gray.channels(), 1);
        assert_eq!(ColorSpace::Rgb.channels(), 3);
        assert_eq!(ColorSpace::Hsv.channels(), 3);
    }

    #[test]
    fn test_marker_constants_agree() {
        fn check<C: ColorModel>() {
            assert_eq!(C::SPACE.channels(), C::CHANNELS);
            assert_eq!(C::splat(0.25).as_ref().len(), C::CHANNELS);
        }
        check::<Bw>();
        check::<Gray>();
        check::<Rgb>();
        check::<Hsv>();
    }

    #[test]
    fn test_display() {
        assert_eq!(ColorSpace::Rgb.to_string(), "RGB");
        assert_eq!(ColorSpace::Bw.to_string(), "BW");
    }
}
