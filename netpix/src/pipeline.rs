//! File-to-file conversion pipelines
//!
//! Each [`Pipeline`] loads a Netpbm file, runs a fixed chain of
//! conversions and saves the result:
//!
//! | Pipeline        | Input | Chain                                       | Output |
//! |-----------------|-------|---------------------------------------------|--------|
//! | `gray`          | PPM   | `rgb_to_gray`                               | PGM    |
//! | `bw`            | PGM   | `gray_to_bw`                                | PBM    |
//! | `hsv-roundtrip` | PPM   | `rgb_to_hsv`, `hsv_to_rgb`                  | PPM    |
//! | `color-key`     | PPM   | `rgb_to_hsv`, `modify_in_hsv`, `hsv_to_rgb` | PPM    |

use clap::ValueEnum;
use log::info;
use netpix_color::{gray_to_bw, hsv_to_rgb, modify_in_hsv, rgb_to_gray, rgb_to_hsv};
use netpix_core::{AnyImage, ColorSpace};
use netpix_io::{
    IoError, IoResult, PnmFormat, PnmOptions, detect_format, load_grayscale_image,
    load_rgb_image, save_image,
};
use std::fmt;
use std::path::Path;

/// Conversion chain selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Pipeline {
    /// RGB to grayscale
    Gray,
    /// Grayscale to bi-level
    Bw,
    /// RGB to HSV and back
    #[value(name = "hsv-roundtrip")]
    HsvRoundTrip,
    /// RGB through the HSV color key effect
    ColorKey,
}

impl Pipeline {
    /// Color space the source file must hold.
    pub fn input_color_space(self) -> ColorSpace {
        match self {
            Pipeline::Bw => ColorSpace::Gray,
            Pipeline::Gray | Pipeline::HsvRoundTrip | Pipeline::ColorKey => ColorSpace::Rgb,
        }
    }

    /// Color space written to the target file.
    pub fn output_color_space(self) -> ColorSpace {
        match self {
            Pipeline::Gray => ColorSpace::Gray,
            Pipeline::Bw => ColorSpace::Bw,
            Pipeline::HsvRoundTrip | Pipeline::ColorKey => ColorSpace::Rgb,
        }
    }

    /// Format written to the target file for the plain/binary choice.
    pub fn target_format(self, plain: bool) -> Option<PnmFormat> {
        PnmFormat::for_color_space(self.output_color_space(), plain)
    }

    /// Check the magic number of `source` against the input color space.
    ///
    /// # Errors
    ///
    /// Returns `IoError::ColorSpaceMismatch` if `source` holds another
    /// format family, or the error of [`detect_format`].
    pub fn check_source<P: AsRef<Path>>(self, source: P) -> IoResult<PnmFormat> {
        let found = detect_format(source)?;
        let requested = self.input_color_space();
        if found.color_space() != requested {
            return Err(IoError::ColorSpaceMismatch { requested, found });
        }
        Ok(found)
    }

    /// True if the extension of `target` names the family this pipeline
    /// writes, e.g. `.pgm` for [`Pipeline::Gray`].
    pub fn matches_target_extension<P: AsRef<Path>>(self, target: P) -> bool {
        match (PnmFormat::from_path(target), self.target_format(false)) {
            (Some(named), Some(written)) => named == written,
            _ => false,
        }
    }

    /// Load `source` with the typed loader for the input color space
    /// and apply the conversion chain.
    fn apply(self, source: &Path) -> IoResult<AnyImage> {
        let image = match self {
            Pipeline::Gray => AnyImage::Gray(rgb_to_gray(&load_rgb_image(source)?)),
            Pipeline::Bw => AnyImage::Bw(gray_to_bw(&load_grayscale_image(source)?)),
            Pipeline::HsvRoundTrip => {
                AnyImage::Rgb(hsv_to_rgb(&rgb_to_hsv(&load_rgb_image(source)?)))
            }
            Pipeline::ColorKey => {
                let hsv = rgb_to_hsv(&load_rgb_image(source)?);
                AnyImage::Rgb(hsv_to_rgb(&modify_in_hsv(&hsv)))
            }
        };
        Ok(image)
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Pipeline::Gray => "gray",
            Pipeline::Bw => "bw",
            Pipeline::HsvRoundTrip => "hsv-roundtrip",
            Pipeline::ColorKey => "color-key",
        };
        f.write_str(name)
    }
}

/// Load `source`, run `pipeline` and save the result to `target`.
///
/// # Arguments
///
/// * `pipeline` - Conversion chain to run
/// * `source` - Netpbm file holding [`Pipeline::input_color_space`]
/// * `target` - Destination file, created or truncated
/// * `options` - Output precision and plain/binary selection
///
/// # Errors
///
/// Returns `IoError::ColorSpaceMismatch` if the source file holds a
/// different format family, or any load/save error.
pub fn run_pipeline<P, Q>(pipeline: Pipeline, source: P, target: Q, options: &PnmOptions) -> IoResult<()>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let (source, target) = (source.as_ref(), target.as_ref());
    info!(
        "pipeline {}: {} -> {}",
        pipeline,
        source.display(),
        target.display()
    );

    let image = pipeline.apply(source)?;
    save_image(target, &image, options.double_precision, options.plain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_spaces() {
        assert_eq!(Pipeline::Bw.input_color_space(), ColorSpace::Gray);
        assert_eq!(Pipeline::Bw.output_color_space(), ColorSpace::Bw);
        assert_eq!(Pipeline::Gray.input_color_space(), ColorSpace::Rgb);
        assert_eq!(Pipeline::ColorKey.output_color_space(), ColorSpace::Rgb);
    }

    #[test]
    fn test_target_format() {
        assert_eq!(Pipeline::Gray.target_format(false), Some(PnmFormat::Pgm));
        assert_eq!(Pipeline::Bw.target_format(true), Some(PnmFormat::PlainPbm));
        assert_eq!(Pipeline::ColorKey.target_format(true), Some(PnmFormat::PlainPpm));
    }

    #[test]
    fn test_target_extension() {
        assert!(Pipeline::Gray.matches_target_extension("out.pgm"));
        assert!(Pipeline::Bw.matches_target_extension("OUT.PBM"));
        assert!(Pipeline::HsvRoundTrip.matches_target_extension("out.pnm"));
        assert!(!Pipeline::Gray.matches_target_extension("out.ppm"));
        assert!(!Pipeline::ColorKey.matches_target_extension("out.png"));
        assert!(!Pipeline::Bw.matches_target_extension("out"));
    }

    #[test]
    fn test_value_names() {
        assert_eq!(
            Pipeline::from_str("hsv-roundtrip", false).unwrap(),
            Pipeline::HsvRoundTrip
        );
        assert_eq!(Pipeline::from_str("color-key", false).unwrap(), Pipeline::ColorKey);
        assert!(Pipeline::from_str("sepia", false).is_err());
    }
}
