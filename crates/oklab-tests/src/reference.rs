//! Reference implementation wrappers
//!
//! The `palette` crate implements Oklab with the same published matrices,
//! so it serves as an independent check of the forward transform.

use palette::{FromColor, LinSrgb, Oklab, Oklch, Srgb};

/// Oklab of an 8-bit sRGB color according to `palette`, as [l, a, b]
pub fn palette_oklab(rgb: [u8; 3]) -> [f64; 3] {
    let srgb: Srgb<f64> = Srgb::new(rgb[0], rgb[1], rgb[2]).into_format();
    let lab = Oklab::<f64>::from_color(srgb.into_linear::<f64>());
    [lab.l, lab.a, lab.b]
}

/// Oklab of a linear sRGB color according to `palette`
pub fn palette_oklab_linear(rgb: [f64; 3]) -> [f64; 3] {
    let lab = Oklab::<f64>::from_color(LinSrgb::new(rgb[0], rgb[1], rgb[2]));
    [lab.l, lab.a, lab.b]
}

/// Oklch of an 8-bit sRGB color according to `palette`, as [l, c, h]
///
/// Hue is in radians, normalized to (-π, π].
pub fn palette_oklch(rgb: [u8; 3]) -> [f64; 3] {
    let srgb: Srgb<f64> = Srgb::new(rgb[0], rgb[1], rgb[2]).into_format();
    let lch = Oklch::<f64>::from_color(srgb.into_linear::<f64>());
    [lch.l, lch.chroma, lch.hue.into_radians()]
}

/// Smallest absolute difference between two angles in radians
pub fn angle_diff(a: f64, b: f64) -> f64 {
    use std::f64::consts::{PI, TAU};
    let d = (a - b).rem_euclid(TAU);
    if d > PI { TAU - d } else { d }
}
