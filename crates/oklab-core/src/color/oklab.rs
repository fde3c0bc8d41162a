//! Oklab Color Space
//!
//! Oklab is a perceptual color space built on an LMS cone model with a cube
//! root nonlinearity. Equal Euclidean distances approximate equal perceived
//! differences, which makes it the space to blend and compare colors in.
//!
//! - L: Perceived lightness (0 = black, 1 = white)
//! - a: Green-red axis (negative = green, positive = red)
//! - b: Blue-yellow axis (negative = blue, positive = yellow)
//!
//! Reference: <https://bottosson.github.io/posts/oklab/>

use std::ops::RangeInclusive;

use crate::color::{Oklch, Rgba16};
use crate::math::{
    LINEAR_SRGB_TO_LMS, LMS_TO_LINEAR_SRGB, LMS_TO_OKLAB, OKLAB_TO_LMS, cbrt, clamp_unit, cube,
    linear_to_srgb, srgb_to_linear,
};
use crate::model::Color;

/// Oklab color coordinates
///
/// Components are not clamped. Values outside the ranges below are valid
/// and describe colors outside the sRGB gamut; they clip when encoded back
/// to RGB.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Oklab {
    /// Perceived lightness
    pub l: f64,
    /// How green/red the color is
    pub a: f64,
    /// How blue/yellow the color is
    pub b: f64,
}

impl Oklab {
    /// L over all 8-bit sRGB colors
    pub const L_RANGE: RangeInclusive<f64> = 0.0..=1.0;
    /// a over all 8-bit sRGB colors
    pub const A_RANGE: RangeInclusive<f64> = -0.233888..=0.276216;
    /// b over all 8-bit sRGB colors
    pub const B_RANGE: RangeInclusive<f64> = -0.311528..=0.198570;

    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 0.0, 0.0);

    /// Create a new Oklab color
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Create Oklab from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }

    /// Convert from linear sRGB
    pub fn from_linear_srgb(r: f64, g: f64, b: f64) -> Self {
        let [l, m, s] = LINEAR_SRGB_TO_LMS.multiply_vec([r, g, b]);
        Self::from_array(LMS_TO_OKLAB.multiply_vec([cbrt(l), cbrt(m), cbrt(s)]))
    }

    /// Convert from gamma-encoded sRGB fractions in [0, 1]
    pub fn from_srgb(r: f64, g: f64, b: f64) -> Self {
        Self::from_linear_srgb(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b))
    }

    /// Convert any color through its premultiplied 16-bit RGBA form
    ///
    /// A fully transparent color converts to black.
    pub fn from_color<C: Color + ?Sized>(color: &C) -> Self {
        let [r, g, b] = color.rgba16().unpremultiplied();
        Self::from_srgb(r, g, b)
    }

    /// Convert to linear sRGB, unclamped
    pub fn linear_srgb(&self) -> [f64; 3] {
        let [l, m, s] = OKLAB_TO_LMS.multiply_vec(self.to_array());
        LMS_TO_LINEAR_SRGB.multiply_vec([cube(l), cube(m), cube(s)])
    }

    /// Convert to gamma-encoded sRGB, unclamped
    pub fn srgb(&self) -> [f64; 3] {
        self.linear_srgb().map(linear_to_srgb)
    }

    /// Convert to opaque 16-bit RGBA
    ///
    /// Out-of-gamut channels are clamped to [0, 1], then scaled by 0xffff
    /// and truncated.
    pub fn to_rgba16(&self) -> Rgba16 {
        let [r, g, b] = self.srgb().map(|c| (0xffff as f64 * clamp_unit(c)) as u16);
        Rgba16::opaque(r, g, b)
    }

    /// Convert to polar form
    #[inline]
    pub fn to_oklch(&self) -> Oklch {
        Oklch::new(self.l, self.chroma(), self.hue())
    }

    /// Get chroma (distance from the neutral axis)
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.a.hypot(self.b)
    }

    /// Get hue angle in radians, in [-π, π]; 0 for neutral colors
    #[inline]
    pub fn hue(&self) -> f64 {
        self.b.atan2(self.a)
    }

    /// Whether the color lies inside the sRGB gamut
    ///
    /// Allows 1e-9 of slack so that round-tripped in-gamut colors still pass.
    pub fn is_in_srgb_gamut(&self) -> bool {
        const SLACK: f64 = 1e-9;
        self.linear_srgb()
            .iter()
            .all(|&c| (-SLACK..=1.0 + SLACK).contains(&c))
    }

    /// Squared Euclidean distance
    #[inline]
    pub fn distance_squared(&self, other: &Self) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        dl * dl + da * da + db * db
    }

    /// Euclidean distance, the Oklab perceptual difference
    #[inline]
    pub fn distance(&self, other: &Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Component-wise linear interpolation; `t = 0` is `self`, `t = 1` is `other`
    #[inline]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self::new(
            self.l + (other.l - self.l) * t,
            self.a + (other.a - self.a) * t,
            self.b + (other.b - self.b) * t,
        )
    }

    /// Check if approximately equal to another Oklab color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

impl Color for Oklab {
    #[inline]
    fn rgba16(&self) -> Rgba16 {
        self.to_rgba16()
    }
}

impl From<Oklch> for Oklab {
    fn from(lch: Oklch) -> Self {
        lch.to_oklab()
    }
}

impl From<[f64; 3]> for Oklab {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Oklab> for [f64; 3] {
    fn from(lab: Oklab) -> Self {
        lab.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Nrgba8, Rgba8};

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_pink_to_oklab() {
        let lab = Oklab::from_color(&Nrgba8::opaque(0xff, 0xdf, 0xe7));
        assert!((lab.l - 0.93).abs() < 0.005, "L = {}", lab.l);
        assert!((lab.a - 0.04).abs() < 0.005, "a = {}", lab.a);
        assert!((lab.b - 0.00).abs() < 0.005, "b = {}", lab.b);
    }

    #[test]
    fn test_oklab_to_pink() {
        let lab = Oklab::new(0.9322421414586456, 0.03673270292094283, 0.0006123556644819055);
        let rgb = Nrgba8::from_color(&lab);
        assert_eq!(rgb, Nrgba8::opaque(0xff, 0xdf, 0xe7));
    }

    #[test]
    fn test_white_and_black() {
        let white = Oklab::from_srgb(1.0, 1.0, 1.0);
        assert!(white.approx_eq(&Oklab::WHITE, 1e-6), "{:?}", white);

        let black = Oklab::from_srgb(0.0, 0.0, 0.0);
        assert_eq!(black, Oklab::BLACK);
    }

    #[test]
    fn test_neutral_has_no_chroma() {
        for v in [0.1, 0.5, 0.9] {
            let gray = Oklab::from_srgb(v, v, v);
            assert!(gray.a.abs() < 1e-6, "gray {} a = {}", v, gray.a);
            assert!(gray.b.abs() < 1e-6, "gray {} b = {}", v, gray.b);
        }
    }

    #[test]
    fn test_linear_roundtrip() {
        let original = [0.2, 0.5, 0.8];
        let lab = Oklab::from_linear_srgb(original[0], original[1], original[2]);
        let back = lab.linear_srgb();
        for i in 0..3 {
            assert!(
                (original[i] - back[i]).abs() < 1e-6,
                "channel {}: {} vs {}",
                i,
                original[i],
                back[i]
            );
        }
    }

    #[test]
    fn test_out_of_gamut_clamps_high() {
        let rgba = Oklab::new(2.0, 0.0, 0.0).to_rgba16();
        assert_eq!(rgba, Rgba16::new(0xffff, 0xffff, 0xffff, 0xffff));
    }

    #[test]
    fn test_out_of_gamut_clamps_low() {
        let rgba = Oklab::new(-1.0, 0.0, 0.0).to_rgba16();
        assert_eq!(rgba, Rgba16::new(0, 0, 0, 0xffff));

        // Strong green-red push drives some channel negative
        let lab = Oklab::new(0.5, 0.5, 0.0);
        assert!(!lab.is_in_srgb_gamut());
        let rgba = lab.to_rgba16();
        assert_eq!(rgba.a, 0xffff);
        assert!(rgba.g == 0 || rgba.b == 0, "{:?}", rgba);
    }

    #[test]
    fn test_negative_lms_does_not_nan() {
        let lab = Oklab::from_linear_srgb(-0.5, 0.0, 0.0);
        assert!(lab.l.is_finite() && lab.a.is_finite() && lab.b.is_finite());
    }

    #[test]
    fn test_zero_alpha_is_black() {
        let lab = Oklab::from_color(&Rgba8::new(0, 0, 0, 0));
        assert_eq!(lab, Oklab::BLACK);

        let lab = Oklab::from_color(&Rgba16::TRANSPARENT);
        assert!(!lab.l.is_nan() && !lab.a.is_nan() && !lab.b.is_nan());
    }

    #[test]
    fn test_premultiplied_input_is_unpremultiplied() {
        let opaque = Oklab::from_color(&Nrgba8::opaque(0xff, 0x00, 0x00));
        let half = Oklab::from_color(&Rgba16::new(0x8000, 0, 0, 0x8000));
        assert!(opaque.approx_eq(&half, EPSILON), "{:?} vs {:?}", opaque, half);
    }

    #[test]
    fn test_in_gamut() {
        assert!(Oklab::WHITE.is_in_srgb_gamut());
        assert!(Oklab::BLACK.is_in_srgb_gamut());
        assert!(Oklab::from_srgb(0.3, 0.6, 0.9).is_in_srgb_gamut());
        assert!(!Oklab::new(1.5, 0.0, 0.0).is_in_srgb_gamut());
    }

    #[test]
    fn test_chroma_and_hue() {
        let lab = Oklab::new(0.5, 0.03, 0.04);
        assert!((lab.chroma() - 0.05).abs() < EPSILON);
        assert!((lab.hue() - 0.04f64.atan2(0.03)).abs() < EPSILON);
        assert_eq!(Oklab::new(0.5, 0.0, 0.0).hue(), 0.0);
    }

    #[test]
    fn test_distance() {
        let gray = Oklab::new(0.5, 0.0, 0.0);
        assert!((gray.distance(&Oklab::BLACK) - gray.distance(&Oklab::WHITE)).abs() < EPSILON);
        assert!((Oklab::new(0.0, 0.3, 0.4).distance(&Oklab::BLACK) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_lerp() {
        let mid = Oklab::BLACK.lerp(&Oklab::WHITE, 0.5);
        assert!(mid.approx_eq(&Oklab::new(0.5, 0.0, 0.0), EPSILON));
        assert_eq!(Oklab::BLACK.lerp(&Oklab::WHITE, 0.0), Oklab::BLACK);
        assert_eq!(Oklab::BLACK.lerp(&Oklab::WHITE, 1.0), Oklab::WHITE);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_json() {
        let lab = Oklab::new(0.5, -0.125, 0.25);
        let json = serde_json::to_string(&lab).unwrap();
        assert_eq!(json, r#"{"l":0.5,"a":-0.125,"b":0.25}"#);
        assert_eq!(serde_json::from_str::<Oklab>(&json).unwrap(), lab);
    }

    #[test]
    fn test_array_conversion() {
        let lab: Oklab = [0.1, 0.2, 0.3].into();
        let arr: [f64; 3] = lab.into();
        assert_eq!(arr, [0.1, 0.2, 0.3]);
    }
}
