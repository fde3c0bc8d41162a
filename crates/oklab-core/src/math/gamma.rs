//! sRGB transfer function
//!
//! Piecewise IEC 61966-2-1 curve: a linear segment near black and a 2.4
//! power segment above it. Evaluated in f64; f32 is not precise enough for
//! exact 8-bit round trips through Oklab.

/// Encoded threshold below which the linear segment applies
pub const SRGB_DECODE_THRESHOLD: f64 = 0.04045;

/// Linear-light threshold below which the linear segment applies
pub const SRGB_ENCODE_THRESHOLD: f64 = 0.0031308;

/// sRGB gamma decode (encoded → linear)
///
/// Converts an sRGB-encoded channel in [0, 1] to linear light.
#[inline]
pub fn srgb_to_linear(encoded: f64) -> f64 {
    if encoded >= SRGB_DECODE_THRESHOLD {
        ((encoded + 0.055) / 1.055).powf(2.4)
    } else {
        encoded / 12.92
    }
}

/// sRGB gamma encode (linear → encoded)
///
/// Converts a linear-light channel to sRGB encoding. Input outside [0, 1]
/// is not clamped here; values below the threshold (negative included) stay
/// on the linear segment.
#[inline]
pub fn linear_to_srgb(linear: f64) -> f64 {
    if linear >= SRGB_ENCODE_THRESHOLD {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * linear
    }
}
