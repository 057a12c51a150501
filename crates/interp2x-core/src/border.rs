//! Boundary rules for neighbor lookups
//!
//! Every resampling algorithm reads neighbors of a computed source
//! coordinate. These helpers turn a candidate coordinate that may fall
//! past the last row or column into an in-range one, so no algorithm
//! indexes outside a [`Grid`]:
//!
//! - [`clamp_coordinate`] - pin a coordinate to the last valid index
//! - [`duplicate_last_if_odd`] - size of a dimension after edge duplication
//! - [`Grid::pad_to_even`] - materialize that duplication for 2x2 blocks

use crate::grid::Grid;

/// Clamp `idx` to the last valid index of a dimension of length `limit`.
///
/// Returns `min(idx, limit - 1)`. A `limit` of 0 never occurs for a
/// valid grid; it clamps to 0.
///
/// # Examples
///
/// ```
/// use interp2x_core::clamp_coordinate;
///
/// assert_eq!(clamp_coordinate(3, 5), 3);
/// assert_eq!(clamp_coordinate(5, 5), 4);
/// assert_eq!(clamp_coordinate(99, 5), 4);
/// ```
#[inline]
pub fn clamp_coordinate(idx: u32, limit: u32) -> u32 {
    idx.min(limit.saturating_sub(1))
}

/// Size of a dimension after duplicating its last row/column when odd.
///
/// Returns `(padded_dimension, padding_applied)`.
///
/// # Examples
///
/// ```
/// use interp2x_core::duplicate_last_if_odd;
///
/// assert_eq!(duplicate_last_if_odd(5), (6, true));
/// assert_eq!(duplicate_last_if_odd(4), (4, false));
/// ```
#[inline]
pub fn duplicate_last_if_odd(dimension: u32) -> (u32, bool) {
    if dimension % 2 == 1 {
        (dimension + 1, true)
    } else {
        (dimension, false)
    }
}

impl Grid {
    /// Pad the grid to even dimensions by duplicating the last column
    /// and/or last row.
    ///
    /// Every source sample survives; the duplicated edge only completes
    /// the final 2x2 blocks. A grid that is already even is returned as
    /// an identical copy.
    ///
    /// # Examples
    ///
    /// ```
    /// use interp2x_core::Grid;
    ///
    /// let grid = Grid::from_rows(&[[1u8, 2, 3]]).unwrap();
    /// let padded = grid.pad_to_even();
    /// assert_eq!(padded.dimensions(), (4, 2));
    /// assert_eq!(padded.data(), &[1, 2, 3, 3, 1, 2, 3, 3]);
    /// ```
    pub fn pad_to_even(&self) -> Grid {
        let (w, h) = self.dimensions();
        let (pw, pad_x) = duplicate_last_if_odd(w);
        let (ph, pad_y) = duplicate_last_if_odd(h);
        if !pad_x && !pad_y {
            return self.clone();
        }

        let mut data = Vec::with_capacity(pw as usize * ph as usize);
        for y in 0..ph {
            if let Some(row) = self.row(clamp_coordinate(y, h)) {
                data.extend_from_slice(row);
                if pad_x {
                    data.push(row[row.len() - 1]);
                }
            }
        }

        Grid {
            width: pw,
            height: ph,
            data,
        }
    }
}
