//! Path based loading and saving
//!
//! Thin wrappers over the stream codecs in [`crate::pnm`] that open the
//! file, buffer it and log what was read or written.

use crate::pnm::{self, PnmHeader, PnmOptions};
use crate::IoResult;
use log::info;
use netpix_core::{AnyImage, BwImage, GrayImage, RgbImage};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

fn open<P: AsRef<Path>>(path: P) -> IoResult<BufReader<File>> {
    Ok(BufReader::new(File::open(path)?))
}

fn create<P: AsRef<Path>>(path: P) -> IoResult<BufWriter<File>> {
    Ok(BufWriter::new(File::create(path)?))
}

/// Read only the header of a Netpbm file.
pub fn read_pnm_header<P: AsRef<Path>>(path: P) -> IoResult<PnmHeader> {
    let mut reader = open(path)?;
    pnm::read_header(&mut reader)
}

/// Load any PBM, PGM or PPM file.
///
/// The returned [`AnyImage`] carries the color space implied by the
/// file's magic number.
///
/// # Errors
///
/// Returns `IoError::Io` if the file cannot be opened, or a format error
/// if its content is not a valid Netpbm image.
pub fn load_image<P: AsRef<Path>>(path: P) -> IoResult<AnyImage> {
    let path = path.as_ref();
    let image = pnm::read_pnm(open(path)?)?;
    info!(
        "loaded {} image {}x{} from {}",
        image.color_space(),
        image.width(),
        image.height(),
        path.display()
    );
    Ok(image)
}

/// Load a bi-level image from a `P1` or `P4` file.
///
/// # Errors
///
/// Returns `IoError::ColorSpaceMismatch` if the file is PGM or PPM.
pub fn load_bw_image<P: AsRef<Path>>(path: P) -> IoResult<BwImage> {
    pnm::read_pnm_bw(open(path)?)
}

/// Load a grayscale image from a `P2` or `P5` file.
///
/// # Errors
///
/// Returns `IoError::ColorSpaceMismatch` if the file is PBM or PPM.
pub fn load_grayscale_image<P: AsRef<Path>>(path: P) -> IoResult<GrayImage> {
    pnm::read_pnm_gray(open(path)?)
}

/// Load an RGB image from a `P3` or `P6` file.
///
/// # Errors
///
/// Returns `IoError::ColorSpaceMismatch` if the file is PBM or PGM.
pub fn load_rgb_image<P: AsRef<Path>>(path: P) -> IoResult<RgbImage> {
    pnm::read_pnm_rgb(open(path)?)
}

/// Save a tagged image with the format matching its color space.
///
/// # Arguments
///
/// * `path` - Destination file, created or truncated
/// * `image` - Bi-level, grayscale or RGB image
/// * `double_precision` - Write 16-bit samples; ignored for bi-level images
/// * `plain` - Write the ASCII variant
pub fn save_image<P: AsRef<Path>>(
    path: P,
    image: &AnyImage,
    double_precision: bool,
    plain: bool,
) -> IoResult<()> {
    let path = path.as_ref();
    let options = PnmOptions::new()
        .with_double_precision(double_precision)
        .with_plain(plain);
    pnm::write_pnm(image, create(path)?, &options)?;
    info!(
        "saved {} image {}x{} to {}",
        image.color_space(),
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}

/// Save a bi-level image as `P1` or `P4`.
pub fn save_bw_image<P: AsRef<Path>>(path: P, image: &BwImage, plain: bool) -> IoResult<()> {
    pnm::write_pnm_bw(image, create(path)?, plain)
}

/// Save a grayscale image as `P2` or `P5`.
pub fn save_grayscale_image<P: AsRef<Path>>(
    path: P,
    image: &GrayImage,
    double_precision: bool,
    plain: bool,
) -> IoResult<()> {
    let options = PnmOptions::new()
        .with_double_precision(double_precision)
        .with_plain(plain);
    pnm::write_pnm_gray(image, create(path)?, &options)
}

/// Save an RGB image as `P3` or `P6`.
pub fn save_rgb_image<P: AsRef<Path>>(
    path: P,
    image: &RgbImage,
    double_precision: bool,
    plain: bool,
) -> IoResult<()> {
    let options = PnmOptions::new()
        .with_double_precision(double_precision)
        .with_plain(plain);
    pnm::write_pnm_rgb(image, create(path)?, &options)
}
