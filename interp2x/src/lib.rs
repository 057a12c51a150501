//! interp2x - 2x grayscale image resampling
//!
//! Halves ("reduce") or doubles ("amplify") both dimensions of an 8-bit
//! grayscale image with one of two methods:
//!
//! - **Nearest-neighbor**: reduce keeps every other sample, amplify
//!   replicates each sample into a 2x2 block
//! - **Bilinear**: reduce averages 2x2 blocks (padding odd edges), amplify
//!   interpolates from the four nearest samples
//!
//! # Example
//!
//! ```
//! use interp2x::Grid;
//! use interp2x::transform::{ScaleMethod, ScaleOp, process};
//!
//! let grid = Grid::from_rows(&[[10u8, 20], [30, 40]]).unwrap();
//! let up = process(&grid, ScaleMethod::NearestNeighbor, ScaleOp::Amplify).unwrap();
//! assert_eq!(up.dimensions(), (4, 4));
//! assert_eq!(up.get_pixel(3, 0), Some(20));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use interp2x_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use interp2x_io as io;
pub use interp2x_transform as transform;
