//! Netpbm format detection
//!
//! Detects the Netpbm variant from the two-byte magic number at the
//! start of a file.
//!
//! | Magic | Variant | Family | Color space |
//! |-------|---------|--------|-------------|
//! | `P1`  | plain   | PBM    | BW          |
//! | `P2`  | plain   | PGM    | Gray        |
//! | `P3`  | plain   | PPM    | RGB         |
//! | `P4`  | binary  | PBM    | BW          |
//! | `P5`  | binary  | PGM    | Gray        |
//! | `P6`  | binary  | PPM    | RGB         |

use crate::{IoError, IoResult};
use netpix_core::ColorSpace;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One of the six Netpbm variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PnmFormat {
    /// `P1`: ASCII bi-level
    PlainPbm,
    /// `P2`: ASCII grayscale
    PlainPgm,
    /// `P3`: ASCII color
    PlainPpm,
    /// `P4`: packed-bit bi-level
    Pbm,
    /// `P5`: raw grayscale
    Pgm,
    /// `P6`: raw color
    Ppm,
}

impl PnmFormat {
    /// Parse a magic number.
    ///
    /// # Errors
    ///
    /// Returns `IoError::InvalidMagic` for anything except `P1`..`P6`.
    pub fn from_magic(magic: [u8; 2]) -> IoResult<Self> {
        match magic {
            [b'P', b'1'] => Ok(PnmFormat::PlainPbm),
            [b'P', b'2'] => Ok(PnmFormat::PlainPgm),
            [b'P', b'3'] => Ok(PnmFormat::PlainPpm),
            [b'P', b'4'] => Ok(PnmFormat::Pbm),
            [b'P', b'5'] => Ok(PnmFormat::Pgm),
            [b'P', b'6'] => Ok(PnmFormat::Ppm),
            _ => Err(IoError::InvalidMagic(magic)),
        }
    }

    /// The two-byte magic number written at the start of the file.
    pub fn magic(self) -> [u8; 2] {
        let digit = match self {
            PnmFormat::PlainPbm => b'1',
            PnmFormat::PlainPgm => b'2',
            PnmFormat::PlainPpm => b'3',
            PnmFormat::Pbm => b'4',
            PnmFormat::Pgm => b'5',
            PnmFormat::Ppm => b'6',
        };
        [b'P', digit]
    }

    /// Select the variant storing `color_space`.
    ///
    /// Returns `None` for HSV, which has no Netpbm representation.
    pub fn for_color_space(color_space: ColorSpace, plain: bool) -> Option<Self> {
        let format = match (color_space, plain) {
            (ColorSpace::Bw, true) => PnmFormat::PlainPbm,
            (ColorSpace::Bw, false) => PnmFormat::Pbm,
            (ColorSpace::Gray, true) => PnmFormat::PlainPgm,
            (ColorSpace::Gray, false) => PnmFormat::Pgm,
            (ColorSpace::Rgb, true) => PnmFormat::PlainPpm,
            (ColorSpace::Rgb, false) => PnmFormat::Ppm,
            (ColorSpace::Hsv, _) => return None,
        };
        Some(format)
    }

    /// Color space decoded from this variant.
    pub fn color_space(self) -> ColorSpace {
        match self {
            PnmFormat::PlainPbm | PnmFormat::Pbm => ColorSpace::Bw,
            PnmFormat::PlainPgm | PnmFormat::Pgm => ColorSpace::Gray,
            PnmFormat::PlainPpm | PnmFormat::Ppm => ColorSpace::Rgb,
        }
    }

    /// True for the ASCII variants `P1`..`P3`.
    pub fn is_plain(self) -> bool {
        matches!(
            self,
            PnmFormat::PlainPbm | PnmFormat::PlainPgm | PnmFormat::PlainPpm
        )
    }

    /// True for bi-level formats, which carry no maximum value.
    pub fn is_bitmap(self) -> bool {
        self.color_space() == ColorSpace::Bw
    }

    /// Samples stored per pixel.
    pub fn channels(self) -> usize {
        self.color_space().channels()
    }

    /// Conventional file extension.
    pub fn extension(self) -> &'static str {
        match self.color_space() {
            ColorSpace::Bw => "pbm",
            ColorSpace::Gray => "pgm",
            _ => "ppm",
        }
    }

    /// Map a file extension to the binary variant it conventionally holds.
    ///
    /// `pnm` maps to binary PPM. Matching is case-insensitive.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pbm" => Some(PnmFormat::Pbm),
            "pgm" => Some(PnmFormat::Pgm),
            "ppm" | "pnm" => Some(PnmFormat::Ppm),
            _ => None,
        }
    }

    /// Map a path's extension to a format, see [`PnmFormat::from_extension`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

impl fmt::Display for PnmFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PnmFormat::PlainPbm => "plain PBM (P1)",
            PnmFormat::PlainPgm => "plain PGM (P2)",
            PnmFormat::PlainPpm => "plain PPM (P3)",
            PnmFormat::Pbm => "PBM (P4)",
            PnmFormat::Pgm => "PGM (P5)",
            PnmFormat::Ppm => "PPM (P6)",
        };
        f.write_str(name)
    }
}

/// Detect the Netpbm variant of a file from its magic number
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<PnmFormat> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(2);
    file.take(2).read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the Netpbm variant from the first bytes of a stream
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<PnmFormat> {
    match data {
        [first, second, ..] => PnmFormat::from_magic([*first, *second]),
        _ => Err(IoError::UnexpectedEof("magic number")),
    }
}
