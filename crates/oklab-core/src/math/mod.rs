//! Mathematical operations for the Oklab transform chain
//!
//! This module provides the scalar building blocks:
//! - sRGB gamma encode/decode
//! - 3x3 matrices, including the four fixed Oklab matrices
//! - Signed cube root and channel clamping

pub mod gamma;
pub mod matrix;

pub use gamma::{linear_to_srgb, srgb_to_linear};
pub use matrix::{LINEAR_SRGB_TO_LMS, LMS_TO_LINEAR_SRGB, LMS_TO_OKLAB, Matrix3x3, OKLAB_TO_LMS};

/// Real cube root, negative for negative input
///
/// `f64::cbrt` is already sign-preserving; `powf(1.0 / 3.0)` would return
/// NaN for negative bases.
#[inline]
pub fn cbrt(x: f64) -> f64 {
    x.cbrt()
}

/// Cube by multiplication, sign-preserving
#[inline]
pub fn cube(x: f64) -> f64 {
    x * x * x
}

/// Clamp a channel to [0, 1]; NaN maps to 0
#[inline]
pub fn clamp_unit(x: f64) -> f64 {
    if x > 1.0 {
        1.0
    } else if x >= 0.0 {
        x
    } else {
        0.0
    }
}
