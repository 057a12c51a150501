//! Operation dispatch
//!
//! Selects a [`Resampler`] from a [`ScaleMethod`] and runs the requested
//! [`ScaleOp`] on it. No algorithmic logic lives here.
//!
//! Both enumerations parse from and print as short lowercase names so
//! front ends can take them as text:
//!
//! | Text | Value |
//! |---|---|
//! | `nearest`, `nearest-neighbor`, `nn` | [`ScaleMethod::NearestNeighbor`] |
//! | `bilinear`, `linear` | [`ScaleMethod::Bilinear`] |
//! | `reduce`, `half`, `0.5x` | [`ScaleOp::Reduce`] |
//! | `amplify`, `double`, `2x` | [`ScaleOp::Amplify`] |

use crate::bilinear::Bilinear;
use crate::nearest::NearestNeighbor;
use crate::resample::Resampler;
use crate::{TransformError, TransformResult};
use interp2x_core::{Grid, duplicate_last_if_odd};
use log::debug;
use std::fmt;
use std::str::FromStr;

/// Resampling algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaleMethod {
    /// Copy the closest source sample
    NearestNeighbor,
    /// Weighted blend of the four closest source samples
    Bilinear,
}

/// Resampling direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaleOp {
    /// Halve both dimensions
    Reduce,
    /// Double both dimensions
    Amplify,
}

impl ScaleMethod {
    /// All methods, in display order.
    pub const ALL: [ScaleMethod; 2] = [ScaleMethod::NearestNeighbor, ScaleMethod::Bilinear];

    /// Canonical text name.
    pub fn as_str(self) -> &'static str {
        match self {
            ScaleMethod::NearestNeighbor => "nearest",
            ScaleMethod::Bilinear => "bilinear",
        }
    }
}

impl ScaleOp {
    /// All operations, in display order.
    pub const ALL: [ScaleOp; 2] = [ScaleOp::Reduce, ScaleOp::Amplify];

    /// Canonical text name.
    pub fn as_str(self) -> &'static str {
        match self {
            ScaleOp::Reduce => "reduce",
            ScaleOp::Amplify => "amplify",
        }
    }
}

impl fmt::Display for ScaleMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ScaleOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScaleMethod {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" | "nearest-neighbor" | "nearest_neighbor" | "nn" => {
                Ok(ScaleMethod::NearestNeighbor)
            }
            "bilinear" | "linear" => Ok(ScaleMethod::Bilinear),
            other => Err(TransformError::InvalidParameters(format!(
                "unknown resampling method '{}'",
                other
            ))),
        }
    }
}

impl FromStr for ScaleOp {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reduce" | "half" | "0.5x" => Ok(ScaleOp::Reduce),
            "amplify" | "double" | "2x" => Ok(ScaleOp::Amplify),
            other => Err(TransformError::InvalidParameters(format!(
                "unknown operation '{}'",
                other
            ))),
        }
    }
}

static NEAREST: NearestNeighbor = NearestNeighbor;
static BILINEAR: Bilinear = Bilinear;

/// Get the resampler implementing `method`.
pub fn resampler(method: ScaleMethod) -> &'static dyn Resampler {
    match method {
        ScaleMethod::NearestNeighbor => &NEAREST,
        ScaleMethod::Bilinear => &BILINEAR,
    }
}

/// Resample `grid` with `method` in direction `op`.
///
/// The source grid is only borrowed; a new grid is returned.
///
/// # Errors
///
/// Returns [`TransformError::InvalidDimension`] when `grid` does not meet
/// the preconditions of `op` (for `reduce`, both dimensions must be at
/// least 2).
///
/// # Examples
///
/// ```
/// use interp2x_core::Grid;
/// use interp2x_transform::{ScaleMethod, ScaleOp, process};
///
/// let grid = Grid::from_rows(&[[10u8, 20], [30, 40]]).unwrap();
/// let out = process(&grid, ScaleMethod::Bilinear, ScaleOp::Reduce).unwrap();
/// assert_eq!(out.data(), &[25]);
/// ```
pub fn process(grid: &Grid, method: ScaleMethod, op: ScaleOp) -> TransformResult<Grid> {
    let r = resampler(method);
    debug!(
        "{} {} on {}x{} grid",
        r.name(),
        op,
        grid.width(),
        grid.height()
    );
    match op {
        ScaleOp::Reduce => r.reduce(grid),
        ScaleOp::Amplify => r.amplify(grid),
    }
}

/// Size of the grid `process` returns for a `width x height` source.
///
/// Returns `None` when the source does not meet the preconditions of `op`.
/// Bilinear reduction pads odd dimensions before halving, so it rounds up
/// where nearest-neighbor reduction truncates.
pub fn output_dimensions(
    method: ScaleMethod,
    op: ScaleOp,
    width: u32,
    height: u32,
) -> Option<(u32, u32)> {
    if width == 0 || height == 0 {
        return None;
    }
    match op {
        ScaleOp::Amplify => Some((width.checked_mul(2)?, height.checked_mul(2)?)),
        ScaleOp::Reduce if width < 2 || height < 2 => None,
        ScaleOp::Reduce => match method {
            ScaleMethod::NearestNeighbor => Some((width / 2, height / 2)),
            ScaleMethod::Bilinear => Some((
                duplicate_last_if_odd(width).0 / 2,
                duplicate_last_if_odd(height).0 / 2,
            )),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_method() {
        assert_eq!(
            "nearest".parse::<ScaleMethod>().unwrap(),
            ScaleMethod::NearestNeighbor
        );
        assert_eq!("NN".parse::<ScaleMethod>().unwrap(), ScaleMethod::NearestNeighbor);
        assert_eq!(" Bilinear ".parse::<ScaleMethod>().unwrap(), ScaleMethod::Bilinear);
        assert!("bicubic".parse::<ScaleMethod>().is_err());
    }

    #[test]
    fn test_parse_op() {
        assert_eq!("reduce".parse::<ScaleOp>().unwrap(), ScaleOp::Reduce);
        assert_eq!("2x".parse::<ScaleOp>().unwrap(), ScaleOp::Amplify);
        assert!("rotate".parse::<ScaleOp>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for m in ScaleMethod::ALL {
            assert_eq!(m.to_string().parse::<ScaleMethod>().unwrap(), m);
        }
        for op in ScaleOp::ALL {
            assert_eq!(op.to_string().parse::<ScaleOp>().unwrap(), op);
        }
    }

    #[test]
    fn test_resampler_selection() {
        assert_eq!(resampler(ScaleMethod::NearestNeighbor).name(), "nearest-neighbor");
        assert_eq!(resampler(ScaleMethod::Bilinear).name(), "bilinear");
    }

    #[test]
    fn test_output_dimensions() {
        let nn = ScaleMethod::NearestNeighbor;
        let bl = ScaleMethod::Bilinear;
        assert_eq!(output_dimensions(nn, ScaleOp::Reduce, 5, 5), Some((2, 2)));
        assert_eq!(output_dimensions(bl, ScaleOp::Reduce, 5, 5), Some((3, 3)));
        assert_eq!(output_dimensions(bl, ScaleOp::Reduce, 4, 6), Some((2, 3)));
        assert_eq!(output_dimensions(bl, ScaleOp::Amplify, 3, 1), Some((6, 2)));
        assert_eq!(output_dimensions(bl, ScaleOp::Reduce, 1, 9), None);
        assert_eq!(output_dimensions(nn, ScaleOp::Amplify, u32::MAX, 1), None);
        assert_eq!(output_dimensions(nn, ScaleOp::Amplify, 0, 1), None);
    }

    #[test]
    fn test_output_dimensions_match_process() {
        let grid = Grid::new_with_value(7, 4, 3).unwrap();
        for method in ScaleMethod::ALL {
            for op in ScaleOp::ALL {
                let out = process(&grid, method, op).unwrap();
                assert_eq!(
                    Some(out.dimensions()),
                    output_dimensions(method, op, grid.width(), grid.height()),
                    "{} {}",
                    method,
                    op
                );
            }
        }
    }

    #[test]
    fn test_process_rejects_thin_reduce() {
        let grid = Grid::new(1, 1).unwrap();
        for method in ScaleMethod::ALL {
            assert!(matches!(
                process(&grid, method, ScaleOp::Reduce),
                Err(TransformError::InvalidDimension { .. })
            ));
            assert!(process(&grid, method, ScaleOp::Amplify).is_ok());
        }
    }
}
