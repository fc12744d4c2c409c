//! netpix - Typed pixel buffers, color conversion and Netpbm I/O
//!
//! # Overview
//!
//! - Pixel buffers typed by color space (BW, Gray, RGB, HSV)
//! - Color conversion: RGB -> Gray, Gray -> BW, RGB <-> HSV
//! - A hue-rotating color key effect
//! - Netpbm I/O: PBM, PGM and PPM in plain and binary variants
//! - File-to-file conversion pipelines ([`pipeline`])
//!
//! # Example
//!
//! ```
//! use netpix::{AnyImage, RgbImage};
//! use netpix::color::rgb_to_gray;
//! use netpix::io::{PnmOptions, read_pnm_mem, write_pnm_mem};
//!
//! let rgb = RgbImage::new(4, 4).unwrap();
//! let gray = AnyImage::Gray(rgb_to_gray(&rgb));
//! let bytes = write_pnm_mem(&gray, &PnmOptions::default()).unwrap();
//! assert_eq!(read_pnm_mem(&bytes).unwrap(), gray);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use netpix_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use netpix_color as color;
pub use netpix_io as io;

pub mod pipeline;

pub use pipeline::{Pipeline, run_pipeline};
