//! Encoded image file formats
//!
//! The resampling engine itself never touches files; this enum is shared
//! between `interp2x-io` (which detects, decodes and encodes the formats)
//! and the command-line front end (which picks one for output).

/// Image file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// Unknown format
    #[default]
    Unknown,
    /// Windows bitmap
    Bmp,
    /// JFIF JPEG
    Jpeg,
    /// PNG
    Png,
    /// Portable any map (PBM/PGM/PPM)
    Pnm,
}

impl ImageFormat {
    /// Get the file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Unknown => "dat",
            Self::Bmp => "bmp",
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Pnm => "pgm",
        }
    }

    /// Guess the format from a file extension (case-insensitive, no dot).
    ///
    /// Returns [`ImageFormat::Unknown`] for anything unrecognized.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "bmp" | "dib" => Self::Bmp,
            "jpg" | "jpeg" | "jpe" | "jfif" => Self::Jpeg,
            "png" => Self::Png,
            "pnm" | "pgm" | "ppm" | "pbm" => Self::Pnm,
            _ => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(ImageFormat::from_extension("PNG"), ImageFormat::Png);
        assert_eq!(ImageFormat::from_extension("jpeg"), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_extension("jpg"), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_extension("bmp"), ImageFormat::Bmp);
        assert_eq!(ImageFormat::from_extension("pgm"), ImageFormat::Pnm);
        assert_eq!(ImageFormat::from_extension("tif"), ImageFormat::Unknown);
    }

    #[test]
    fn test_extension_roundtrip() {
        for format in [
            ImageFormat::Bmp,
            ImageFormat::Jpeg,
            ImageFormat::Png,
            ImageFormat::Pnm,
        ] {
            assert_eq!(ImageFormat::from_extension(format.extension()), format);
        }
    }
}
