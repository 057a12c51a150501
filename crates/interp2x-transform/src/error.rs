//! Error types for interp2x-transform

use crate::scale::ScaleOp;
use thiserror::Error;

/// Errors that can occur during resampling
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] interp2x_core::Error),

    /// Grid too small (or too large) for the requested operation
    #[error("invalid dimension for {op}: {width}x{height}")]
    InvalidDimension {
        /// Operation that was requested
        op: ScaleOp,
        /// Source width
        width: u32,
        /// Source height
        height: u32,
    },

    /// Unrecognized method or operation name
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
