//! BMP image format support
//!
//! Reads uncompressed Windows Bitmap files at 1, 4, 8, 24 and 32 bits per
//! pixel, reducing palette entries and BGR samples to luma. Writes 8-bit
//! palette images with an identity gray palette.

use crate::{IoError, IoResult};
use interp2x_core::{Grid, color};
use log::debug;
use std::io::{self, Read, Write};

/// BMP file header size
const BMP_FILE_HEADER_SIZE: usize = 14;

/// BMP info header size (BITMAPINFOHEADER)
const BMP_INFO_HEADER_SIZE: u32 = 40;

/// Size of the gray palette emitted by [`write_bmp`]
const GRAY_PALETTE_SIZE: usize = 256 * 4;

fn le_u16(buf: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([buf[offset], buf[offset + 1]])
}

fn le_u32(buf: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        buf[offset + 3],
    ])
}

/// Row size in bytes; BMP rows are padded to a 4-byte boundary.
fn row_stride(width: u32, bits_per_pixel: u16) -> usize {
    (width as usize * bits_per_pixel as usize).div_ceil(32) * 4
}

/// Discard `count` bytes without buffering them.
fn skip<R: Read>(reader: &mut R, count: usize) -> IoResult<()> {
    let skipped = io::copy(&mut reader.take(count as u64), &mut io::sink())?;
    if skipped < count as u64 {
        return Err(IoError::InvalidData(format!(
            "BMP ends {} bytes into a {} byte gap",
            skipped, count
        )));
    }
    Ok(())
}

/// Read a BMP image as a grayscale grid
pub fn read_bmp<R: Read>(mut reader: R) -> IoResult<Grid> {
    let mut file_header = [0u8; BMP_FILE_HEADER_SIZE];
    reader.read_exact(&mut file_header)?;

    if &file_header[0..2] != b"BM" {
        return Err(IoError::InvalidData("not a BMP file".to_string()));
    }
    let pixel_offset = le_u32(&file_header, 10) as usize;

    let mut info_header = [0u8; BMP_INFO_HEADER_SIZE as usize];
    reader.read_exact(&mut info_header)?;

    let header_size = le_u32(&info_header, 0);
    if header_size < BMP_INFO_HEADER_SIZE {
        return Err(IoError::InvalidData(format!(
            "unsupported BMP header size: {}",
            header_size
        )));
    }

    let width = le_u32(&info_header, 4) as i32;
    let height = le_u32(&info_header, 8) as i32;

    let planes = le_u16(&info_header, 12);
    if planes != 1 {
        return Err(IoError::InvalidData(format!(
            "unsupported number of planes: {}",
            planes
        )));
    }

    let bits_per_pixel = le_u16(&info_header, 14);
    let compression = le_u32(&info_header, 16);
    let colors_used = le_u32(&info_header, 32) as usize;

    // BI_RGB, or BI_BITFIELDS with the standard BGRA masks
    if compression != 0 && compression != 3 {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported BMP compression: {}",
            compression
        )));
    }
    if !matches!(bits_per_pixel, 1 | 4 | 8 | 24 | 32) {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported BMP bit depth: {}",
            bits_per_pixel
        )));
    }

    // only the height sign is meaningful (negative means top-down)
    if width <= 0 {
        return Err(IoError::InvalidData(format!("invalid BMP width: {}", width)));
    }
    let width = width.unsigned_abs();
    let top_down = height < 0;
    let height = height.unsigned_abs();
    debug!(
        "BMP {}x{} {} bpp{}",
        width,
        height,
        bits_per_pixel,
        if top_down { " top-down" } else { "" }
    );

    let mut consumed = BMP_FILE_HEADER_SIZE + BMP_INFO_HEADER_SIZE as usize;
    skip(&mut reader, header_size as usize - BMP_INFO_HEADER_SIZE as usize)?;
    consumed += header_size as usize - BMP_INFO_HEADER_SIZE as usize;

    // Palette entries are reduced to luma up front
    let palette: Vec<u8> = if bits_per_pixel <= 8 {
        let max_colors = 1usize << bits_per_pixel;
        let num_colors = if colors_used == 0 || colors_used > max_colors {
            max_colors
        } else {
            colors_used
        };
        let mut raw = vec![0u8; num_colors * 4];
        reader.read_exact(&mut raw)?;
        consumed += raw.len();
        raw.chunks_exact(4)
            .map(|bgrx| color::luma(bgrx[2], bgrx[1], bgrx[0]))
            .collect()
    } else {
        Vec::new()
    };

    if pixel_offset > consumed {
        skip(&mut reader, pixel_offset - consumed)?;
    }

    let mut grid = Grid::new(width, height)?;
    let lookup = |index: u8| palette.get(index as usize).copied().unwrap_or(0);

    let mut row_buffer = vec![0u8; row_stride(width, bits_per_pixel)];
    for row in 0..height {
        reader.read_exact(&mut row_buffer)?;

        let y = if top_down { row } else { height - 1 - row };
        let Some(dst) = grid.row_mut(y) else {
            break;
        };

        match bits_per_pixel {
            1 => {
                for (x, d) in dst.iter_mut().enumerate() {
                    let bit = (row_buffer[x / 8] >> (7 - x % 8)) & 1;
                    *d = lookup(bit);
                }
            }
            4 => {
                for (x, d) in dst.iter_mut().enumerate() {
                    let byte = row_buffer[x / 2];
                    let index = if x % 2 == 0 { byte >> 4 } else { byte & 0xF };
                    *d = lookup(index);
                }
            }
            8 => {
                for (d, &index) in dst.iter_mut().zip(&row_buffer) {
                    *d = lookup(index);
                }
            }
            _ => {
                let bytes = bits_per_pixel as usize / 8;
                for (d, bgr) in dst.iter_mut().zip(row_buffer.chunks_exact(bytes)) {
                    *d = color::luma(bgr[2], bgr[1], bgr[0]);
                }
            }
        }
    }

    Ok(grid)
}

/// Write a grid as an 8-bit BMP with a gray palette
pub fn write_bmp<W: Write>(grid: &Grid, mut writer: W) -> IoResult<()> {
    let (width, height) = grid.dimensions();
    let too_large = || IoError::EncodeError(format!("BMP dimensions {}x{} too large", width, height));

    let stride = row_stride(width, 8);
    let pixel_offset = BMP_FILE_HEADER_SIZE + BMP_INFO_HEADER_SIZE as usize + GRAY_PALETTE_SIZE;
    let pixel_data_size = stride
        .checked_mul(height as usize)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(too_large)?;
    let file_size = pixel_data_size
        .checked_add(pixel_offset as u32)
        .ok_or_else(too_large)?;
    let width_i32 = i32::try_from(width).map_err(|_| too_large())?;
    let height_i32 = i32::try_from(height).map_err(|_| too_large())?;

    // File header
    writer.write_all(b"BM")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(&[0u8; 4])?; // Reserved
    writer.write_all(&(pixel_offset as u32).to_le_bytes())?;

    // Info header
    writer.write_all(&BMP_INFO_HEADER_SIZE.to_le_bytes())?;
    writer.write_all(&width_i32.to_le_bytes())?;
    writer.write_all(&height_i32.to_le_bytes())?; // Bottom-up
    writer.write_all(&1u16.to_le_bytes())?; // Planes
    writer.write_all(&8u16.to_le_bytes())?;
    writer.write_all(&0u32.to_le_bytes())?; // Compression
    writer.write_all(&pixel_data_size.to_le_bytes())?;
    writer.write_all(&0i32.to_le_bytes())?; // X pixels per meter
    writer.write_all(&0i32.to_le_bytes())?; // Y pixels per meter
    writer.write_all(&256u32.to_le_bytes())?; // Colors used
    writer.write_all(&0u32.to_le_bytes())?; // Important colors

    for v in 0..=255u8 {
        writer.write_all(&[v, v, v, 0])?;
    }

    let mut row_buffer = vec![0u8; stride];
    for src in grid.rows().rev() {
        row_buffer[..src.len()].copy_from_slice(src);
        writer.write_all(&row_buffer)?;
    }

    Ok(())
}
