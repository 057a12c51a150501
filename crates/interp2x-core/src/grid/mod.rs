//! Grid - Fully populated 8-bit grayscale sample array
//!
//! `Grid` is the only data entity in interp2x. It holds one `u8` per
//! pixel, so every stored intensity is inside `[0, 255]` by construction.
//!
//! # Memory Layout
//!
//! Data is stored in row-major order with no padding. The sample at
//! `(row, col)` is pixel `(x = col, y = row)` at index `y * width + x`.
//!
//! # Ownership model
//!
//! Resamplers take `&Grid` and return a freshly allocated `Grid`; a source
//! grid is never modified by an operation. Mutating accessors exist only
//! so that producers (decoders, resamplers) can fill a new grid.
//!
//! # Examples
//!
//! ```
//! use interp2x_core::Grid;
//!
//! let grid = Grid::from_rows(&[[10u8, 20], [30, 40]]).unwrap();
//! assert_eq!(grid.dimensions(), (2, 2));
//! assert_eq!(grid.get_pixel(1, 0), Some(20));
//! assert_eq!(grid.get_pixel(0, 1), Some(30));
//! ```

mod access;

use crate::error::{Error, Result};

/// 8-bit grayscale image
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Width in pixels
    pub(crate) width: u32,
    /// Height in pixels
    pub(crate) height: u32,
    /// Sample data (row-major, no padding)
    pub(crate) data: Vec<u8>,
}

impl Grid {
    /// Create a new grid with all samples set to zero
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_with_value(width, height, 0)
    }

    /// Create a new grid with all samples set to `value`
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use interp2x_core::Grid;
    ///
    /// let grid = Grid::new_with_value(4, 3, 128).unwrap();
    /// assert!(grid.data().iter().all(|&v| v == 128));
    /// ```
    pub fn new_with_value(width: u32, height: u32, value: u8) -> Result<Self> {
        let size = checked_area(width, height)?;
        Ok(Grid {
            width,
            height,
            data: vec![value; size],
        })
    }

    /// Create a grid from raw row-major data
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or data length doesn't match.
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected_size = checked_area(width, height)?;
        if data.len() != expected_size {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{} = {}",
                data.len(),
                width,
                height,
                expected_size
            )));
        }

        Ok(Grid {
            width,
            height,
            data,
        })
    }

    /// Create a grid from a slice of rows
    ///
    /// All rows must have the same, non-zero length.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` for an empty input and
    /// `Error::InvalidParameter` for ragged rows.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let height = u32::try_from(rows.len()).map_err(|_| Error::InvalidDimension {
            width: 0,
            height: u32::MAX,
        })?;
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let width = u32::try_from(width).map_err(|_| Error::InvalidDimension {
            width: u32::MAX,
            height,
        })?;

        let mut data = Vec::with_capacity(checked_area(width, height)?);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width as usize {
                return Err(Error::InvalidParameter(format!(
                    "row {} has length {}, expected {}",
                    y,
                    row.len(),
                    width
                )));
            }
            data.extend_from_slice(row);
        }

        Ok(Grid {
            width,
            height,
            data,
        })
    }

    /// Get the grid width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the grid height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the grid dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of samples
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: a grid cannot be constructed without samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the raw sample data (row-major)
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get mutable access to the raw sample data
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the grid and return its sample buffer
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.width as usize)
    }
}

/// Number of samples in a `width x height` grid, rejecting empty or
/// unaddressable sizes.
fn checked_area(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(Error::InvalidDimension { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(100, 200).unwrap();
        assert_eq!(grid.width(), 100);
        assert_eq!(grid.height(), 200);
        assert_eq!(grid.dimensions(), (100, 200));
        assert_eq!(grid.len(), 20_000);
        assert!(grid.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_grid_invalid_dimensions() {
        assert!(matches!(
            Grid::new(0, 100),
            Err(Error::InvalidDimension {
                width: 0,
                height: 100
            })
        ));
        assert!(Grid::new(100, 0).is_err());
        assert!(Grid::new(0, 0).is_err());
    }

    #[test]
    fn test_grid_from_data() {
        let grid = Grid::from_data(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(grid.get_pixel(0, 0), Some(1));
        assert_eq!(grid.get_pixel(2, 0), Some(3));
        assert_eq!(grid.get_pixel(0, 1), Some(4));
        assert_eq!(grid.get_pixel(2, 1), Some(6));
    }

    #[test]
    fn test_grid_from_data_wrong_size() {
        assert!(matches!(
            Grid::from_data(3, 2, vec![1, 2, 3]),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_grid_from_rows() {
        let grid = Grid::from_rows(&[[10u8, 20], [30, 40]]).unwrap();
        assert_eq!(grid.dimensions(), (2, 2));
        assert_eq!(grid.data(), &[10, 20, 30, 40]);
    }

    #[test]
    fn test_grid_from_rows_ragged() {
        let rows: [&[u8]; 2] = [&[1, 2, 3], &[4, 5]];
        assert!(Grid::from_rows(&rows).is_err());
    }

    #[test]
    fn test_grid_from_rows_empty() {
        let rows: [&[u8]; 0] = [];
        assert!(matches!(
            Grid::from_rows(&rows),
            Err(Error::InvalidDimension { .. })
        ));
        let rows: [&[u8]; 2] = [&[], &[]];
        assert!(Grid::from_rows(&rows).is_err());
    }

    #[test]
    fn test_grid_rows_iter() {
        let grid = Grid::from_rows(&[[1u8, 2, 3], [4, 5, 6]]).unwrap();
        let rows: Vec<&[u8]> = grid.rows().collect();
        assert_eq!(rows, vec![&[1u8, 2, 3][..], &[4, 5, 6][..]]);
    }

    #[test]
    fn test_grid_equality() {
        let a = Grid::from_rows(&[[1u8, 2]]).unwrap();
        let b = Grid::from_data(2, 1, vec![1, 2]).unwrap();
        let c = Grid::from_data(1, 2, vec![1, 2]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
