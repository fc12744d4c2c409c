//! Color space conversion
//!
//! Provides conversion between the color spaces of `netpix-core`:
//! - RGB -> Grayscale (ITU-R BT.601 luma)
//! - Grayscale -> bi-level (threshold at 0.5)
//! - RGB <-> HSV (Hue, Saturation, Value)
//!
//! Each conversion comes as a pixel-level function and an image-level
//! function. Image-level conversions allocate a new buffer of the same
//! size and never fail. Values outside `[0, 1]` are passed through
//! unchanged rather than clamped.

use log::debug;
use netpix_core::{BwImage, GrayImage, HsvImage, RgbImage};

/// BT.601 luma weights for R, G, B
const BT601: [f32; 3] = [0.299, 0.587, 0.114];

/// BT.709 luma weights for R, G, B
const BT709: [f32; 3] = [0.2126, 0.7152, 0.0722];

/// Gray levels below this become black
const BW_THRESHOLD: f32 = 0.5;

#[inline]
fn weighted(rgb: [f32; 3], weights: [f32; 3]) -> f32 {
    weights[0] * rgb[0] + weights[1] * rgb[1] + weights[2] * rgb[2]
}

/// Luminance of an RGB pixel using ITU-R BT.601 coefficients
///
/// Formula: gray = 0.299*R + 0.587*G + 0.114*B
#[inline]
pub fn pixel_luminance(rgb: [f32; 3]) -> f32 {
    weighted(rgb, BT601)
}

/// Luminance of an RGB pixel using ITU-R BT.709 coefficients
///
/// Formula: gray = 0.2126*R + 0.7152*G + 0.0722*B
///
/// Not used by [`rgb_to_gray`].
#[inline]
pub fn pixel_luminance_bt709(rgb: [f32; 3]) -> f32 {
    weighted(rgb, BT709)
}

/// Threshold a gray level: 0.0 below 0.5, otherwise 1.0.
#[inline]
pub fn pixel_threshold(gray: f32) -> f32 {
    if gray < BW_THRESHOLD { 0.0 } else { 1.0 }
}

/// Convert an RGB pixel to HSV
///
/// Returns `[h, s, v]` with the hue normalized to `[0, 1)`.
pub fn pixel_rgb_to_hsv(rgb: [f32; 3]) -> [f32; 3] {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { delta / max };

    if delta == 0.0 {
        return [0.0, s, v];
    }

    let sector = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    let mut h = sector * 60.0 / 360.0;
    if h < 0.0 {
        h += 1.0;
    }
    // rem_euclid may round up to exactly 6
    if h >= 1.0 {
        h -= 1.0;
    }
    [h, s, v]
}

/// Convert an HSV pixel to RGB
///
/// Input hue is normalized; values at or above 1 wrap around.
pub fn pixel_hsv_to_rgb(hsv: [f32; 3]) -> [f32; 3] {
    let [h, s, v] = hsv;
    if s == 0.0 {
        return [v, v, v];
    }

    let mut h6 = (h * 6.0).rem_euclid(6.0);
    if h6 >= 6.0 {
        h6 = 0.0;
    }
    let sector = h6.floor();
    let f = h6 - sector;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector as u32 % 6 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

/// Convert an RGB image to grayscale (BT.601)
pub fn rgb_to_gray(image: &RgbImage) -> GrayImage {
    debug!("rgb_to_gray: {}x{}", image.width(), image.height());
    image.map_pixels(|rgb| [pixel_luminance(rgb)])
}

/// Convert a grayscale image to bi-level
///
/// A gray level of exactly 0.5 becomes white. Applying the conversion
/// to its own output (viewed as gray) yields the same image.
pub fn gray_to_bw(image: &GrayImage) -> BwImage {
    debug!("gray_to_bw: {}x{}", image.width(), image.height());
    image.map_pixels(|[gray]| [pixel_threshold(gray)])
}

/// Convert an RGB image to HSV
pub fn rgb_to_hsv(image: &RgbImage) -> HsvImage {
    debug!("rgb_to_hsv: {}x{}", image.width(), image.height());
    image.map_pixels(pixel_rgb_to_hsv)
}

/// Convert an HSV image to RGB
pub fn hsv_to_rgb(image: &HsvImage) -> RgbImage {
    debug!("hsv_to_rgb: {}x{}", image.width(), image.height());
    image.map_pixels(pixel_hsv_to_rgb)
}
