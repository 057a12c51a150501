//! The resampler capability shared by both algorithms
//!
//! A [`Resampler`] halves ([`reduce`](Resampler::reduce)) or doubles
//! ([`amplify`](Resampler::amplify)) both dimensions of a [`Grid`].
//! Implementations are stateless; the same input always yields the same
//! output, and the source grid is only borrowed.

use crate::{ScaleOp, TransformError, TransformResult};
use interp2x_core::Grid;

/// A 2x resampling strategy
pub trait Resampler: Send + Sync {
    /// Short human-readable name, used in log output.
    fn name(&self) -> &'static str;

    /// Halve both dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidDimension`] when either dimension
    /// of `grid` is smaller than 2.
    fn reduce(&self, grid: &Grid) -> TransformResult<Grid>;

    /// Double both dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidDimension`] when a doubled
    /// dimension would not fit in `u32`.
    fn amplify(&self, grid: &Grid) -> TransformResult<Grid>;
}

/// Check the preconditions shared by every resampler for `op`.
///
/// `reduce` needs at least two rows and two columns; `amplify` needs the
/// doubled size to fit in `u32`.
pub(crate) fn check_dimensions(grid: &Grid, op: ScaleOp) -> TransformResult<()> {
    let (w, h) = grid.dimensions();
    let ok = match op {
        ScaleOp::Reduce => w >= 2 && h >= 2,
        ScaleOp::Amplify => w.checked_mul(2).is_some() && h.checked_mul(2).is_some(),
    };
    if ok {
        Ok(())
    } else {
        Err(TransformError::InvalidDimension {
            op,
            width: w,
            height: h,
        })
    }
}

/// Round a non-negative sum of four samples divided by 4, ties to even.
#[inline]
pub(crate) fn mean4_round_half_even(sum: u32) -> u8 {
    let q = sum / 4;
    let r = sum % 4;
    let q = if r > 2 || (r == 2 && q % 2 == 1) {
        q + 1
    } else {
        q
    };
    q.min(255) as u8
}

/// Round to the nearest integer (ties to even) and clamp to `[0, 255]`.
#[inline]
pub(crate) fn clamp_round_u8(value: f64) -> u8 {
    value.round_ties_even().clamp(0.0, 255.0) as u8
}
