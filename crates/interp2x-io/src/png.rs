//! PNG image format support
//!
//! Any PNG color type is accepted on read: palette and sub-byte depths
//! are expanded, 16-bit samples are stripped to 8 bits, and color is
//! reduced to luma. Writes are always 8-bit grayscale.

use crate::{IoError, IoResult};
use interp2x_core::{Grid, color};
use log::debug;
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image as a grayscale grid
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Grid> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;
    let color_type = output_info.color_type;
    if output_info.bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unexpected PNG output depth: {:?}",
            output_info.bit_depth
        )));
    }

    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "PNG palette was not expanded".to_string(),
            ));
        }
    };
    debug!("PNG {}x{} {:?}", width, height, color_type);

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let mut grid = Grid::new(width, height)?;

    for (y, src_row) in data.chunks(bytes_per_row).take(height as usize).enumerate() {
        let Some(dst_row) = grid.row_mut(y as u32) else {
            break;
        };
        for (dst, px) in dst_row.iter_mut().zip(src_row.chunks_exact(samples)) {
            *dst = match samples {
                1 | 2 => px[0],
                _ => color::luma(px[0], px[1], px[2]),
            };
        }
    }

    Ok(grid)
}

/// Write a grid as an 8-bit grayscale PNG
pub fn write_png<W: Write>(grid: &Grid, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, grid.width(), grid.height());
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(grid.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_png_roundtrip_grayscale() {
        let data: Vec<u8> = (0..100).map(|i| (i * 2) as u8).collect();
        let grid = Grid::from_data(10, 10, data).unwrap();

        let mut buffer = Vec::new();
        write_png(&grid, &mut buffer).unwrap();
        let grid2 = read_png(Cursor::new(buffer)).unwrap();

        assert_eq!(grid2, grid);
    }

    #[test]
    fn test_png_read_rgb_as_luma() {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, 3, 1);
            encoder.set_color(ColorType::Rgb);
            encoder.set_depth(BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer
                .write_image_data(&[255, 0, 0, 0, 255, 0, 200, 200, 200])
                .unwrap();
        }

        let grid = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(grid.dimensions(), (3, 1));
        assert_eq!(grid.data(), &[76, 150, 200]);
    }

    #[test]
    fn test_png_read_16bit_gray() {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, 2, 1);
            encoder.set_color(ColorType::Grayscale);
            encoder.set_depth(BitDepth::Sixteen);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[0x12, 0x34, 0xAB, 0xCD]).unwrap();
        }

        let grid = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(grid.data(), &[0x12, 0xAB]);
    }

    #[test]
    fn test_png_read_garbage() {
        assert!(read_png(Cursor::new(vec![0u8; 16])).is_err());
    }
}
