//! PNM (Portable Any Map) format support
//!
//! Reads all six netpbm variants: PBM (P1/P4), PGM (P2/P5) and PPM
//! (P3/P6), ASCII and binary. Samples are rescaled from the file's
//! maxval to `[0, 255]` and PPM color is reduced to luma. Writes binary
//! PGM (P5).

use crate::{IoError, IoResult};
use interp2x_core::{Grid, color};
use log::debug;
use std::io::{Read, Write};

/// Byte cursor over a PNM stream
struct Parser<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Skip whitespace and `#` comments running to end of line
    fn skip_separators(&mut self) {
        while let Some(&b) = self.data.get(self.pos) {
            if b == b'#' {
                while let Some(&c) = self.data.get(self.pos) {
                    self.pos += 1;
                    if c == b'\n' || c == b'\r' {
                        break;
                    }
                }
            } else if b.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn next_u32(&mut self, what: &str) -> IoResult<u32> {
        self.skip_separators();
        let start = self.pos;
        while self.data.get(self.pos).is_some_and(u8::is_ascii_digit) {
            self.pos += 1;
        }
        std::str::from_utf8(&self.data[start..self.pos])
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| IoError::InvalidData(format!("invalid PNM {}", what)))
    }

    /// Next bit of an ASCII bitmap; digits may be packed without spaces
    fn next_bit(&mut self) -> IoResult<u8> {
        self.skip_separators();
        match self.data.get(self.pos) {
            Some(b'0') => {
                self.pos += 1;
                Ok(0)
            }
            Some(b'1') => {
                self.pos += 1;
                Ok(1)
            }
            _ => Err(IoError::InvalidData("invalid PBM sample".to_string())),
        }
    }

    fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos.min(self.data.len())..]
    }
}

/// Rescale a sample in `[0, maxval]` to `[0, 255]`, rounding to nearest.
fn rescale(value: u32, maxval: u32) -> u8 {
    if maxval == 255 {
        return value.min(255) as u8;
    }
    let v = value.min(maxval);
    ((v * 255 + maxval / 2) / maxval) as u8
}

/// PBM stores 1 as black
fn bit_to_gray(bit: u8) -> u8 {
    if bit == 0 { 255 } else { 0 }
}

/// Read a PNM image as a grayscale grid.
///
/// # Arguments
/// * `reader` - A reader positioned at the `P1`..`P6` magic
pub fn read_pnm<R: Read>(mut reader: R) -> IoResult<Grid> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    if bytes.len() < 2 || bytes[0] != b'P' || !(b'1'..=b'6').contains(&bytes[1]) {
        return Err(IoError::InvalidData("not a PNM file".to_string()));
    }
    let kind = bytes[1] - b'0';

    let mut parser = Parser::new(&bytes[2..]);
    let width = parser.next_u32("width")?;
    let height = parser.next_u32("height")?;
    let maxval = if kind == 1 || kind == 4 {
        1
    } else {
        parser.next_u32("maxval")?
    };
    if maxval == 0 || maxval > 65535 {
        return Err(IoError::InvalidData(format!(
            "invalid PNM maxval: {}",
            maxval
        )));
    }
    debug!("PNM P{} {}x{} maxval {}", kind, width, height, maxval);

    let mut grid = Grid::new(width, height)?;
    let count = grid.len();

    match kind {
        1 => {
            for d in grid.data_mut() {
                *d = bit_to_gray(parser.next_bit()?);
            }
        }
        2 => {
            for d in grid.data_mut() {
                *d = rescale(parser.next_u32("sample")?, maxval);
            }
        }
        3 => {
            for d in grid.data_mut() {
                let r = rescale(parser.next_u32("sample")?, maxval);
                let g = rescale(parser.next_u32("sample")?, maxval);
                let b = rescale(parser.next_u32("sample")?, maxval);
                *d = color::luma(r, g, b);
            }
        }
        _ => {
            // exactly one whitespace byte separates the header from raster data
            parser.pos += 1;
            let raster = parser.remaining();
            let sample_bytes = if maxval > 255 { 2 } else { 1 };
            let sample = |chunk: &[u8]| {
                let v = if sample_bytes == 2 {
                    u16::from_be_bytes([chunk[0], chunk[1]]) as u32
                } else {
                    chunk[0] as u32
                };
                rescale(v, maxval)
            };

            match kind {
                4 => {
                    let stride = (width as usize).div_ceil(8);
                    if raster.len() < stride * height as usize {
                        return Err(IoError::InvalidData("truncated PBM raster".to_string()));
                    }
                    let rows = grid.data_mut().chunks_exact_mut(width as usize);
                    for (dst, src) in rows.zip(raster.chunks(stride)) {
                        for (x, d) in dst.iter_mut().enumerate() {
                            *d = bit_to_gray((src[x / 8] >> (7 - x % 8)) & 1);
                        }
                    }
                }
                5 => {
                    if raster.len() < count * sample_bytes {
                        return Err(IoError::InvalidData("truncated PGM raster".to_string()));
                    }
                    let samples = raster.chunks_exact(sample_bytes);
                    for (d, chunk) in grid.data_mut().iter_mut().zip(samples) {
                        *d = sample(chunk);
                    }
                }
                _ => {
                    let px_bytes = 3 * sample_bytes;
                    if raster.len() < count * px_bytes {
                        return Err(IoError::InvalidData("truncated PPM raster".to_string()));
                    }
                    let pixels = raster.chunks_exact(px_bytes);
                    for (d, px) in grid.data_mut().iter_mut().zip(pixels) {
                        let (r, rest) = px.split_at(sample_bytes);
                        let (g, b) = rest.split_at(sample_bytes);
                        *d = color::luma(sample(r), sample(g), sample(b));
                    }
                }
            }
        }
    }

    Ok(grid)
}

/// Write a grid as binary PGM (P5, maxval 255)
pub fn write_pnm<W: Write>(grid: &Grid, mut writer: W) -> IoResult<()> {
    write!(writer, "P5\n{} {}\n255\n", grid.width(), grid.height())?;
    writer.write_all(grid.data())?;
    Ok(())
}
