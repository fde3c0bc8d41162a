//! Error types for oklab-core
//!
//! Color conversions themselves never fail; only the pixel buffer helpers
//! report errors.

use thiserror::Error;

/// Result type for oklab-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in oklab-core operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Byte buffer does not hold a whole number of RGBA8 pixels
    #[error("Buffer is not a whole number of RGBA8 pixels: {len} bytes")]
    PartialPixel { len: usize },

    /// Buffer size mismatch
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },
}
