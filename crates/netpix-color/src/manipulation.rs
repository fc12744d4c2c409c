//! Color key effect
//!
//! Rotates every hue by 30 degrees and keeps color only where the
//! rotated hue falls in the yellow-green band `[50, 100]` degrees. All
//! other pixels are desaturated. Operates on HSV images; convert with
//! [`crate::rgb_to_hsv`] first.

use log::debug;
use netpix_core::HsvImage;

/// Hue rotation in degrees
const HUE_SHIFT_DEGREES: f32 = 30.0;

/// Closed band of rotated hues that keep their color, in degrees
const KEY_BAND_DEGREES: (f32, f32) = (50.0, 100.0);

/// Apply the color key effect to one `[h, s, v]` pixel.
///
/// # Examples
///
/// ```
/// use netpix_color::pixel_color_key;
///
/// // Red rotates to 30 degrees, outside the band: desaturated, darkened
/// let [h, s, v] = pixel_color_key([0.0, 1.0, 1.0]);
/// assert!((h - 1.0 / 12.0).abs() < 1e-6);
/// assert_eq!(s, 0.0);
/// assert!((v - 0.8).abs() < 1e-6);
/// ```
pub fn pixel_color_key(hsv: [f32; 3]) -> [f32; 3] {
    let [h, s, v] = hsv;

    let mut degrees = h * 360.0 + HUE_SHIFT_DEGREES;
    if degrees >= 360.0 {
        degrees -= 360.0;
    }

    let (low, high) = KEY_BAND_DEGREES;
    let (s, v) = if (low..=high).contains(&degrees) {
        (s * 0.9, v * 0.7)
    } else {
        (0.0, v * 0.8)
    };

    [degrees / 360.0, s, v]
}

/// Apply the color key effect to every pixel of an HSV image.
pub fn modify_in_hsv(image: &HsvImage) -> HsvImage {
    debug!("modify_in_hsv: {}x{}", image.width(), image.height());
    image.map_pixels(pixel_color_key)
}
