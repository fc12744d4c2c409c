//! netpix-io - Netpbm image I/O for netpix
//!
//! Loads and saves the six Netpbm variants (`P1`..`P6`) into the typed
//! buffers of `netpix-core`:
//!
//! | Family | Plain | Binary | Buffer      |
//! |--------|-------|--------|-------------|
//! | PBM    | `P1`  | `P4`   | `BwImage`   |
//! | PGM    | `P2`  | `P5`   | `GrayImage` |
//! | PPM    | `P3`  | `P6`   | `RgbImage`  |
//!
//! Three layers of API are provided:
//!
//! - path: [`load_image`], [`save_image`] and the typed `load_*` /
//!   `save_*` variants
//! - stream: [`read_pnm`], [`write_pnm`] and friends over any
//!   `Read` / `Write`
//! - memory: [`read_pnm_mem`], [`write_pnm_mem`]
//!
//! # Examples
//!
//! ```
//! use netpix_core::{AnyImage, GrayImage};
//! use netpix_io::{PnmOptions, read_pnm_mem, write_pnm_mem};
//!
//! let gray = GrayImage::new_with_value(4, 2, 0.5).unwrap();
//! let bytes = write_pnm_mem(&AnyImage::Gray(gray), &PnmOptions::default()).unwrap();
//! assert!(bytes.starts_with(b"P5\n4 2\n255\n"));
//!
//! let decoded = read_pnm_mem(&bytes).unwrap();
//! assert_eq!(decoded.dimensions(), (4, 2));
//! ```

mod error;
pub mod format;

mod file;
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{PnmFormat, detect_format, detect_format_from_bytes};

pub use file::{
    load_bw_image, load_grayscale_image, load_image, load_rgb_image, read_pnm_header, save_bw_image,
    save_grayscale_image, save_image, save_rgb_image,
};
pub use pnm::{
    PnmHeader, PnmOptions, read_pnm, read_pnm_bw, read_pnm_gray, read_pnm_mem, read_pnm_rgb,
    write_pnm, write_pnm_bw, write_pnm_gray, write_pnm_mem, write_pnm_rgb,
};
