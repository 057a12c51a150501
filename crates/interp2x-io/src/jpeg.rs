//! JPEG image format support
//!
//! Decoding uses the `jpeg-decoder` crate and encoding uses
//! `jpeg-encoder`. Color and CMYK files are reduced to luma on read;
//! writes are single-channel baseline JPEG.

use crate::{IoError, IoResult};
use interp2x_core::{Grid, color};
use jpeg_decoder::{Decoder, PixelFormat};
use jpeg_encoder::{ColorType, Encoder};
use log::debug;
use std::io::{Read, Write};

/// Default encoder quality (1-100)
pub const DEFAULT_QUALITY: u8 = 90;

/// Read a JPEG image as a grayscale grid.
///
/// # Arguments
/// * `reader` - A reader positioned at the JPEG SOI marker (`FF D8`)
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Grid> {
    let mut decoder = Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("missing JPEG image info".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;
    debug!("JPEG {}x{} {:?}", width, height, info.pixel_format);

    let data: Vec<u8> = match info.pixel_format {
        PixelFormat::L8 => pixels,
        PixelFormat::L16 => l16_to_gray(&pixels),
        PixelFormat::RGB24 => pixels
            .chunks_exact(3)
            .map(|px| color::luma(px[0], px[1], px[2]))
            .collect(),
        PixelFormat::CMYK32 => pixels
            .chunks_exact(4)
            .map(|px| color::luma_from_cmyk(px[0], px[1], px[2], px[3]))
            .collect(),
    };

    Ok(Grid::from_data(width, height, data)?)
}

/// Convert native-endian 16-bit luminance samples to 8 bits.
///
/// Lossless JPEG stores 2 to 16 bits per sample but the decoder does not
/// report the frame precision, so it is taken from the widest sample
/// present (at least 8 bits) and the range `[0, 2^bits - 1]` is rescaled
/// to `[0, 255]`, rounding to nearest.
fn l16_to_gray(pixels: &[u8]) -> Vec<u8> {
    let samples: Vec<u16> = pixels
        .chunks_exact(2)
        .map(|px| u16::from_ne_bytes([px[0], px[1]]))
        .collect();
    let max = samples.iter().copied().max().unwrap_or(0);
    let bits = (u16::BITS - max.leading_zeros()).max(8);
    let maxval = (1u32 << bits) - 1;

    samples
        .iter()
        .map(|&v| ((v as u32 * 255 + maxval / 2) / maxval) as u8)
        .collect()
}

/// Write a grid as a grayscale JPEG with the given quality (1-100).
///
/// JPEG is lossy, so reading the result back does not reproduce the
/// samples exactly.
///
/// # Errors
///
/// Returns [`IoError::EncodeError`] if either dimension exceeds 65535,
/// the largest size a JPEG frame header can describe.
pub fn write_jpeg<W: Write>(grid: &Grid, writer: W, quality: u8) -> IoResult<()> {
    let (width, height) = grid.dimensions();
    let (Ok(w), Ok(h)) = (u16::try_from(width), u16::try_from(height)) else {
        return Err(IoError::EncodeError(format!(
            "JPEG dimensions {}x{} exceed 65535",
            width, height
        )));
    };

    let encoder = Encoder::new(writer, quality.clamp(1, 100));
    encoder
        .encode(grid.data(), w, h, ColorType::Luma)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))
}
