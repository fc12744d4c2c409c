//! netpix Core - Basic data structures for color-space typed images
//!
//! This crate provides the fundamental data structures used throughout
//! the netpix workspace:
//!
//! - [`ColorSpace`] - The closed set of supported color spaces
//! - [`ColorModel`] - Compile-time color space marker trait, implemented by
//!   [`Bw`], [`Gray`], [`Rgb`] and [`Hsv`]
//! - [`PixelBuffer`] - Row-major float image typed by its color space
//! - [`AnyImage`] - Tagged handle over the BW / Gray / RGB buffers that
//!   can be stored on disk
//!
//! # Example
//!
//! ```
//! use netpix_core::{ColorSpace, RgbImage};
//!
//! let mut image = RgbImage::new(4, 2).unwrap();
//! image.set_pixel(3, 1, [1.0, 0.5, 0.0]).unwrap();
//! assert_eq!(image.color_space(), ColorSpace::Rgb);
//! assert_eq!(image.get_pixel(3, 1).unwrap(), [1.0, 0.5, 0.0]);
//! assert!(image.at(4, 0).is_err());
//! ```

pub mod color_space;
pub mod error;
pub mod image;

pub use color_space::{Bw, ColorModel, ColorSpace, Gray, Hsv, Rgb};
pub use error::{Error, Result};
pub use image::{AnyImage, BwImage, GrayImage, HsvImage, PixelBuffer, RgbImage};
