//! Sample access functions
//!
//! Low-level functions for getting and setting individual samples and
//! whole rows. Coordinates are `(x, y)` = `(col, row)`.

use super::Grid;
use crate::error::{Error, Result};

impl Grid {
    #[inline]
    fn index_of(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Get a sample at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[self.index_of(x, y)])
    }

    /// Get a sample without bounds checking against the grid shape.
    ///
    /// # Panics
    ///
    /// Panics if the computed index falls outside the sample buffer.
    /// Callers clamp coordinates with [`crate::border`] first.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u8 {
        self.data[self.index_of(x, y)]
    }

    /// Set a sample at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: self.index_of(x, y),
                len: self.data.len(),
            });
        }
        let idx = self.index_of(x, y);
        self.data[idx] = val;
        Ok(())
    }

    /// Set a sample without bounds checking against the grid shape.
    ///
    /// # Panics
    ///
    /// Panics if the computed index falls outside the sample buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u8) {
        let idx = self.index_of(x, y);
        self.data[idx] = val;
    }

    /// Get row `y` as a slice.
    ///
    /// Returns `None` if `y` is out of bounds.
    #[inline]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = self.index_of(0, y);
        Some(&self.data[start..start + self.width as usize])
    }

    /// Get row `y` as a mutable slice.
    ///
    /// Returns `None` if `y` is out of bounds.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> Option<&mut [u8]> {
        if y >= self.height {
            return None;
        }
        let start = self.index_of(0, y);
        let end = start + self.width as usize;
        Some(&mut self.data[start..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_access() {
        let mut grid = Grid::new(10, 10).unwrap();
        grid.set_pixel(5, 5, 200).unwrap();
        assert_eq!(grid.get_pixel(5, 5), Some(200));
        assert_eq!(grid.get_pixel_unchecked(5, 5), 200);

        grid.set_pixel_unchecked(0, 9, 7);
        assert_eq!(grid.get_pixel(0, 9), Some(7));
    }

    #[test]
    fn test_pixel_out_of_bounds() {
        let mut grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.get_pixel(4, 0), None);
        assert_eq!(grid.get_pixel(0, 3), None);
        assert!(matches!(
            grid.set_pixel(4, 0, 1),
            Err(Error::IndexOutOfBounds { index: 4, len: 12 })
        ));
        assert!(grid.set_pixel(0, 3, 1).is_err());
    }

    #[test]
    fn test_row_access() {
        let mut grid = Grid::from_data(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(grid.row(0), Some(&[1u8, 2, 3][..]));
        assert_eq!(grid.row(1), Some(&[4u8, 5, 6][..]));
        assert_eq!(grid.row(2), None);

        grid.row_mut(1).unwrap().copy_from_slice(&[9, 9, 9]);
        assert_eq!(grid.data(), &[1, 2, 3, 9, 9, 9]);
        assert!(grid.row_mut(2).is_none());
    }
}
