//! interp2x Core - Basic data structures for 2x grayscale resampling
//!
//! This crate provides the fundamental pieces shared by the rest of the
//! workspace:
//!
//! - [`Grid`] - A fully populated 2-D array of 8-bit intensity samples
//! - [`border`] - Boundary rules that keep neighbor lookups in range
//! - [`ImageFormat`] - Encoded file formats understood by `interp2x-io`
//! - [`color`] - Color to luma conversion used when decoding color files

pub mod border;
pub mod error;
pub mod format;
pub mod grid;

pub use border::{clamp_coordinate, duplicate_last_if_odd};
pub use error::{Error, Result};
pub use format::ImageFormat;
pub use grid::Grid;

/// Color to grayscale conversion helpers.
///
/// Decoders hand RGB(A) samples to [`luma`](color::luma) so every
/// color file is reduced to a single intensity channel before it reaches
/// a [`Grid`].
pub mod color {
    /// Weight of the red channel, in 1/65536 units (0.299).
    pub const RED_WEIGHT: u32 = 19595;
    /// Weight of the green channel, in 1/65536 units (0.587).
    pub const GREEN_WEIGHT: u32 = 38470;
    /// Weight of the blue channel, in 1/65536 units (0.114).
    pub const BLUE_WEIGHT: u32 = 7471;

    /// ITU-R 601-2 luma transform: `L = R*0.299 + G*0.587 + B*0.114`.
    ///
    /// Computed in 16.16 fixed point with rounding; the weights sum to
    /// 65536, so white maps to 255 and black to 0.
    #[inline]
    pub fn luma(r: u8, g: u8, b: u8) -> u8 {
        let sum = RED_WEIGHT * r as u32 + GREEN_WEIGHT * g as u32 + BLUE_WEIGHT * b as u32;
        ((sum + 0x8000) >> 16) as u8
    }

    /// Convert a CMYK sample (as emitted by Adobe JPEG decoders) to luma.
    #[inline]
    pub fn luma_from_cmyk(c: u8, m: u8, y: u8, k: u8) -> u8 {
        let r = (c as u32 * k as u32 / 255) as u8;
        let g = (m as u32 * k as u32 / 255) as u8;
        let b = (y as u32 * k as u32 / 255) as u8;
        luma(r, g, b)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_luma_extremes() {
            assert_eq!(luma(0, 0, 0), 0);
            assert_eq!(luma(255, 255, 255), 255);
        }

        #[test]
        fn test_luma_gray_is_identity() {
            for v in 0..=255u8 {
                assert_eq!(luma(v, v, v), v);
            }
        }

        #[test]
        fn test_luma_primaries() {
            assert_eq!(luma(255, 0, 0), 76);
            assert_eq!(luma(0, 255, 0), 150);
            assert_eq!(luma(0, 0, 255), 29);
        }

        #[test]
        fn test_luma_from_cmyk() {
            assert_eq!(luma_from_cmyk(255, 255, 255, 255), 255);
            assert_eq!(luma_from_cmyk(255, 255, 255, 0), 0);
        }
    }
}
