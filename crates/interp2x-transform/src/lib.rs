//! interp2x-transform - 2x grayscale resampling
//!
//! This crate provides the resampling engine:
//!
//! - [`Resampler`] - the `reduce` / `amplify` capability
//! - [`NearestNeighbor`] - sample copying and 2x2 block replication
//! - [`Bilinear`] - 2x2 block means and fractional-position interpolation
//! - [`process`] - dispatch on a [`ScaleMethod`] and a [`ScaleOp`]
//!
//! Every operation borrows its source [`Grid`](interp2x_core::Grid) and
//! returns a new one. There is no shared state, so independent calls may
//! run on separate threads.

pub mod bilinear;
mod error;
pub mod nearest;
pub mod resample;
pub mod scale;

pub use bilinear::Bilinear;
pub use error::{TransformError, TransformResult};
pub use nearest::NearestNeighbor;
pub use resample::Resampler;
pub use scale::{ScaleMethod, ScaleOp, output_dimensions, process, resampler};
