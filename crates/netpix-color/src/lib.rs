//! netpix-color - Color processing for netpix
//!
//! This crate provides color conversions and effects over the typed
//! buffers of `netpix-core`:
//!
//! - **Color space conversion** ([`colorspace`]): RGB -> Gray, Gray -> BW, RGB <-> HSV
//! - **Color effects** ([`manipulation`]): hue-rotating color key
//!
//! # Examples
//!
//! ```
//! use netpix_color::{hsv_to_rgb, modify_in_hsv, rgb_to_hsv};
//! use netpix_core::RgbImage;
//!
//! let rgb = RgbImage::new_with_value(8, 8, 0.25).unwrap();
//! let keyed = hsv_to_rgb(&modify_in_hsv(&rgb_to_hsv(&rgb)));
//! assert_eq!(keyed.dimensions(), (8, 8));
//! ```

pub mod colorspace;
pub mod manipulation;

// Re-export core types
pub use netpix_core;

// Re-export color space functions
pub use colorspace::{
    // Pixel-level conversions
    pixel_hsv_to_rgb,
    pixel_luminance,
    pixel_luminance_bt709,
    pixel_rgb_to_hsv,
    pixel_threshold,
    // Image-level conversions
    gray_to_bw,
    hsv_to_rgb,
    rgb_to_gray,
    rgb_to_hsv,
};

// Re-export effects
pub use manipulation::{modify_in_hsv, pixel_color_key};
