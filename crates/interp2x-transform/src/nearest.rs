//! Nearest-neighbor 2x resampling
//!
//! Values are copied verbatim, never blended:
//!
//! - `reduce` keeps the sample at every even `(row, col)`; a trailing odd
//!   row/column is discarded by the truncating halving.
//! - `amplify` replicates each source sample into a full 2x2 block.

use crate::resample::{Resampler, check_dimensions};
use crate::{ScaleOp, TransformResult};
use interp2x_core::Grid;
use log::trace;

/// Nearest-neighbor resampler
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NearestNeighbor;

impl Resampler for NearestNeighbor {
    fn name(&self) -> &'static str {
        "nearest-neighbor"
    }

    fn reduce(&self, grid: &Grid) -> TransformResult<Grid> {
        check_dimensions(grid, ScaleOp::Reduce)?;
        let (ws, hs) = grid.dimensions();
        let (wd, hd) = (ws / 2, hs / 2);
        trace!("nearest reduce {}x{} -> {}x{}", ws, hs, wd, hd);

        let mut data = Vec::with_capacity(wd as usize * hd as usize);
        for row in grid.rows().step_by(2).take(hd as usize) {
            data.extend(row.iter().step_by(2).take(wd as usize));
        }

        Ok(Grid::from_data(wd, hd, data)?)
    }

    fn amplify(&self, grid: &Grid) -> TransformResult<Grid> {
        check_dimensions(grid, ScaleOp::Amplify)?;
        let (ws, hs) = grid.dimensions();
        let (wd, hd) = (ws * 2, hs * 2);
        trace!("nearest amplify {}x{} -> {}x{}", ws, hs, wd, hd);

        let mut data = Vec::with_capacity(wd as usize * hd as usize);
        for row in grid.rows() {
            let start = data.len();
            for &val in row {
                data.push(val);
                data.push(val);
            }
            // Second destination row of each block is a copy of the first.
            data.extend_from_within(start..);
        }

        Ok(Grid::from_data(wd, hd, data)?)
    }
}
