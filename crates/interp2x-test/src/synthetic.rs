//! Deterministic synthetic grids for tests
//!
//! Every generator is a pure function of its arguments, so regression
//! outputs are reproducible without bundled image files.

use crate::TestResult;
use interp2x_core::Grid;

/// Grid where every sample equals `value`.
pub fn uniform(width: u32, height: u32, value: u8) -> TestResult<Grid> {
    Ok(Grid::new_with_value(width, height, value)?)
}

/// Diagonal gradient spanning the full `[0, 255]` range.
///
/// The top-left sample is 0 and the bottom-right sample is 255.
pub fn gradient(width: u32, height: u32) -> TestResult<Grid> {
    let span = (width as u64 + height as u64).saturating_sub(2).max(1);
    build(width, height, |x, y| {
        ((x as u64 + y as u64) * 255 / span) as u8
    })
}

/// Horizontal ramp: sample value equals `(x * step) mod 256`.
pub fn ramp(width: u32, height: u32, step: u8) -> TestResult<Grid> {
    build(width, height, |x, _| (x as u64 * step as u64 % 256) as u8)
}

/// Checkerboard of `cell x cell` squares alternating `lo` and `hi`.
pub fn checkerboard(width: u32, height: u32, cell: u32, lo: u8, hi: u8) -> TestResult<Grid> {
    let cell = cell.max(1);
    build(width, height, |x, y| {
        if ((x / cell) + (y / cell)) % 2 == 0 {
            lo
        } else {
            hi
        }
    })
}

/// Pseudo-random samples from a fixed-seed xorshift generator.
pub fn noise(width: u32, height: u32, seed: u32) -> TestResult<Grid> {
    let mut state = seed.max(1);
    build(width, height, |_, _| {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        (state >> 24) as u8
    })
}

fn build<F: FnMut(u32, u32) -> u8>(width: u32, height: u32, mut f: F) -> TestResult<Grid> {
    let mut grid = Grid::new(width, height)?;
    for y in 0..height {
        for x in 0..width {
            grid.set_pixel_unchecked(x, y, f(x, y));
        }
    }
    Ok(grid)
}
