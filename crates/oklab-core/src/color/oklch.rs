//! Oklch, the polar form of Oklab
//!
//! - L: Perceived lightness, same as Oklab
//! - C: Chroma, distance from the neutral axis
//! - H: Hue angle in radians, in [-π, π]

use std::f64::consts::{PI, TAU};
use std::ops::RangeInclusive;

use crate::color::{Oklab, Rgba16};
use crate::model::Color;

/// Oklch color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Oklch {
    /// Perceived lightness
    pub l: f64,
    /// Chroma
    pub c: f64,
    /// Hue in radians
    pub h: f64,
}

impl Oklch {
    /// C over all 8-bit sRGB colors
    pub const C_RANGE: RangeInclusive<f64> = 0.0..=0.322491;
    /// Range of `atan2`
    pub const H_RANGE: RangeInclusive<f64> = -PI..=PI;

    #[inline]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.c, self.h]
    }

    /// Convert any color through Oklab
    pub fn from_color<C: Color + ?Sized>(color: &C) -> Self {
        Oklab::from_color(color).to_oklch()
    }

    /// Convert to cartesian Oklab
    #[inline]
    pub fn to_oklab(&self) -> Oklab {
        let (sin, cos) = self.h.sin_cos();
        Oklab::new(self.l, self.c * cos, self.c * sin)
    }

    /// Convert to opaque 16-bit RGBA via Oklab
    pub fn to_rgba16(&self) -> Rgba16 {
        self.to_oklab().to_rgba16()
    }

    /// Hue in degrees, in [0, 360)
    pub fn hue_degrees(&self) -> f64 {
        let h = self.h.to_degrees().rem_euclid(360.0);
        // rem_euclid can round up to exactly 360 for tiny negative input
        if h >= 360.0 { 0.0 } else { h }
    }

    /// Interpolate lightness and chroma linearly and hue along the shorter arc
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        let mut dh = (other.h - self.h).rem_euclid(TAU);
        if dh > PI {
            dh -= TAU;
        }
        Self::new(
            self.l + (other.l - self.l) * t,
            self.c + (other.c - self.c) * t,
            self.h + dh * t,
        )
    }

    /// Check if approximately equal to another Oklch color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.c - other.c).abs() < epsilon
            && (self.h - other.h).abs() < epsilon
    }
}

impl Color for Oklch {
    #[inline]
    fn rgba16(&self) -> Rgba16 {
        self.to_rgba16()
    }
}

impl From<Oklab> for Oklch {
    fn from(lab: Oklab) -> Self {
        lab.to_oklch()
    }
}
