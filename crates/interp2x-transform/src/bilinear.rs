//! Bilinear 2x resampling
//!
//! # Reduce
//!
//! The source is first padded to even dimensions by duplicating its last
//! row and/or column ([`Grid::pad_to_even`]), then every 2x2 block is
//! replaced by its mean. Sums are taken in `u32` and rounded half to
//! even, so a uniform image stays uniform and no source row or column is
//! dropped.
//!
//! # Amplify
//!
//! Each destination pixel `(i, j)` of the `2h x 2w` output maps to the
//! fractional source position `(i / 2, j / 2)` and is interpolated from
//! its four surrounding samples:
//!
//! ```text
//! row0 = clamp(floor(i / 2), 0, h - 2)     row1 = min(row0 + 1, h - 1)
//! col0 = clamp(floor(j / 2), 0, w - 2)     col1 = min(col0 + 1, w - 1)
//! dy = clamp(i / 2 - row0, 0, 1)           dx = clamp(j / 2 - col0, 0, 1)
//!
//! value = (1-dx)(1-dy) v00 + dx (1-dy) v10 + (1-dx) dy v01 + dx dy v11
//! ```
//!
//! where `v00 = src[row0, col0]`, `v10 = src[row0, col1]`,
//! `v01 = src[row1, col0]` and `v11 = src[row1, col1]`. Even destination
//! coordinates land exactly on source samples and reproduce them
//! unchanged.
//!
//! Only the last destination row and column need the offset cap. There
//! `row0 = h - 2` while the position is `h - 0.5`, so the unclamped offset
//! would be 1.5 and the formula would extrapolate past the edge. Capping it
//! at 1 makes the last row (and likewise the last column) a copy of the
//! source's last row instead.

use crate::resample::{Resampler, check_dimensions, clamp_round_u8, mean4_round_half_even};
use crate::{ScaleOp, TransformResult};
use interp2x_core::{Grid, clamp_coordinate};
use log::trace;

/// Bilinear resampler
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bilinear;

/// Neighbor indices and interpolation weight along one axis of the source.
#[derive(Debug, Clone, Copy, PartialEq)]
struct AxisSample {
    /// Lower neighbor index
    i0: u32,
    /// Upper neighbor index (equal to `i0` for a dimension of length 1)
    i1: u32,
    /// Weight of the upper neighbor, in `[0, 1]`
    frac: f64,
}

impl AxisSample {
    /// Map destination index `dst` onto a source axis of length `len`.
    fn new(dst: u32, len: u32) -> Self {
        let pos = dst as f64 / 2.0;
        let i0 = (pos.floor() as u32).min(len.saturating_sub(2));
        let i1 = clamp_coordinate(i0 + 1, len);
        let frac = (pos - i0 as f64).clamp(0.0, 1.0);
        AxisSample { i0, i1, frac }
    }
}

/// Precompute the axis samples for every destination index.
fn axis_table(dst_len: u32, src_len: u32) -> Vec<AxisSample> {
    (0..dst_len).map(|d| AxisSample::new(d, src_len)).collect()
}

impl Resampler for Bilinear {
    fn name(&self) -> &'static str {
        "bilinear"
    }

    fn reduce(&self, grid: &Grid) -> TransformResult<Grid> {
        check_dimensions(grid, ScaleOp::Reduce)?;
        let padded = grid.pad_to_even();
        let (pw, ph) = padded.dimensions();
        let (wd, hd) = (pw / 2, ph / 2);
        trace!(
            "bilinear reduce {}x{} (padded {}x{}) -> {}x{}",
            grid.width(),
            grid.height(),
            pw,
            ph,
            wd,
            hd
        );

        let mut data = Vec::with_capacity(wd as usize * hd as usize);
        let mut rows = padded.rows();
        while let (Some(upper), Some(lower)) = (rows.next(), rows.next()) {
            for (top, bottom) in upper.chunks_exact(2).zip(lower.chunks_exact(2)) {
                let sum = top[0] as u32 + top[1] as u32 + bottom[0] as u32 + bottom[1] as u32;
                data.push(mean4_round_half_even(sum));
            }
        }

        Ok(Grid::from_data(wd, hd, data)?)
    }

    fn amplify(&self, grid: &Grid) -> TransformResult<Grid> {
        check_dimensions(grid, ScaleOp::Amplify)?;
        let (ws, hs) = grid.dimensions();
        let (wd, hd) = (ws * 2, hs * 2);
        trace!("bilinear amplify {}x{} -> {}x{}", ws, hs, wd, hd);

        let cols = axis_table(wd, ws);
        let mut data = Vec::with_capacity(wd as usize * hd as usize);

        for yd in 0..hd {
            let r = AxisSample::new(yd, hs);
            let dy = r.frac;
            for c in &cols {
                let dx = c.frac;
                let v00 = grid.get_pixel_unchecked(c.i0, r.i0) as f64;
                let v10 = grid.get_pixel_unchecked(c.i1, r.i0) as f64;
                let v01 = grid.get_pixel_unchecked(c.i0, r.i1) as f64;
                let v11 = grid.get_pixel_unchecked(c.i1, r.i1) as f64;

                let value = (1.0 - dx) * (1.0 - dy) * v00
                    + dx * (1.0 - dy) * v10
                    + (1.0 - dx) * dy * v01
                    + dx * dy * v11;
                data.push(clamp_round_u8(value));
            }
        }

        Ok(Grid::from_data(wd, hd, data)?)
    }
}
