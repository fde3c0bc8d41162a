//! RGB Color Primitives
//!
//! Integer RGBA representations that take part in the color contract.
//! [`Rgba16`] is the interchange type: 16 bits per channel with color
//! premultiplied by alpha. The 8-bit and non-premultiplied variants convert
//! to and from it with the usual `x * 0x101` widening and `>> 8` narrowing.

use bytemuck::{Pod, Zeroable};

use crate::model::Color;

const MAX16: u32 = 0xffff;

/// 16-bit RGBA, alpha-premultiplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Rgba16 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl Rgba16 {
    /// Create a new premultiplied color
    #[inline]
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from three channels
    #[inline]
    pub const fn opaque(r: u16, g: u16, b: u16) -> Self {
        Self::new(r, g, b, 0xffff)
    }

    /// Fully transparent black
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Convert to an array [r, g, b, a]
    #[inline]
    pub const fn to_array(self) -> [u16; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Read any color back as premultiplied 16-bit RGBA
    #[inline]
    pub fn from_color<C: Color + ?Sized>(color: &C) -> Self {
        color.rgba16()
    }

    /// Un-premultiplied channels as fractions in [0, 1]
    ///
    /// Zero alpha yields `[0.0; 3]` rather than dividing by zero.
    #[inline]
    pub fn unpremultiplied(self) -> [f64; 3] {
        if self.a == 0 {
            return [0.0; 3];
        }
        let a = self.a as f64;
        [self.r as f64 / a, self.g as f64 / a, self.b as f64 / a]
    }
}

/// 16-bit RGBA, not premultiplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Nrgba16 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl Nrgba16 {
    #[inline]
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Convert any color, undoing alpha premultiplication
    pub fn from_color<C: Color + ?Sized>(color: &C) -> Self {
        let Rgba16 { r, g, b, a } = color.rgba16();
        match a {
            0xffff => Self::new(r, g, b, a),
            0 => Self::default(),
            _ => {
                let a32 = a as u32;
                Self::new(
                    unpremultiply(r, a32) as u16,
                    unpremultiply(g, a32) as u16,
                    unpremultiply(b, a32) as u16,
                    a,
                )
            }
        }
    }
}

/// 8-bit RGBA, alpha-premultiplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert any color, keeping alpha premultiplied
    pub fn from_color<C: Color + ?Sized>(color: &C) -> Self {
        let Rgba16 { r, g, b, a } = color.rgba16();
        Self::new((r >> 8) as u8, (g >> 8) as u8, (b >> 8) as u8, (a >> 8) as u8)
    }
}

/// 8-bit RGBA, not premultiplied
///
/// This is the layout of ordinary RGBA8 pixel buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Nrgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Nrgba8 {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from three channels
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xff)
    }

    /// Convert to an array [r, g, b]
    #[inline]
    pub const fn rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert any color, undoing alpha premultiplication
    ///
    /// Channels are truncated to 8 bits by shifting, never rounded.
    pub fn from_color<C: Color + ?Sized>(color: &C) -> Self {
        let Rgba16 { r, g, b, a } = color.rgba16();
        match a {
            0xffff => Self::new((r >> 8) as u8, (g >> 8) as u8, (b >> 8) as u8, 0xff),
            0 => Self::default(),
            _ => {
                let a32 = a as u32;
                Self::new(
                    (unpremultiply(r, a32) >> 8) as u8,
                    (unpremultiply(g, a32) >> 8) as u8,
                    (unpremultiply(b, a32) >> 8) as u8,
                    (a >> 8) as u8,
                )
            }
        }
    }
}

impl From<[u8; 3]> for Nrgba8 {
    fn from(arr: [u8; 3]) -> Self {
        Self::opaque(arr[0], arr[1], arr[2])
    }
}

impl From<[u8; 4]> for Nrgba8 {
    fn from(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

impl From<Nrgba8> for [u8; 4] {
    fn from(c: Nrgba8) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

/// Widen an 8-bit channel to 16 bits (0xab → 0xabab)
#[inline]
const fn widen(x: u8) -> u32 {
    x as u32 * 0x101
}

/// `x * a / 0xffff`; result never exceeds `a`
#[inline]
const fn premultiply(x: u32, a: u32) -> u32 {
    x * a / MAX16
}

/// `x * 0xffff / a`, saturated for malformed input where `x > a`
#[inline]
fn unpremultiply(x: u16, a: u32) -> u32 {
    (x as u32 * MAX16 / a).min(MAX16)
}

impl Color for Rgba16 {
    #[inline]
    fn rgba16(&self) -> Rgba16 {
        *self
    }
}

impl Color for Nrgba16 {
    fn rgba16(&self) -> Rgba16 {
        let a = self.a as u32;
        Rgba16::new(
            premultiply(self.r as u32, a) as u16,
            premultiply(self.g as u32, a) as u16,
            premultiply(self.b as u32, a) as u16,
            self.a,
        )
    }
}

impl Color for Rgba8 {
    #[inline]
    fn rgba16(&self) -> Rgba16 {
        Rgba16::new(
            widen(self.r) as u16,
            widen(self.g) as u16,
            widen(self.b) as u16,
            widen(self.a) as u16,
        )
    }
}

impl Color for Nrgba8 {
    fn rgba16(&self) -> Rgba16 {
        let a = widen(self.a);
        Rgba16::new(
            premultiply(widen(self.r), a) as u16,
            premultiply(widen(self.g), a) as u16,
            premultiply(widen(self.b), a) as u16,
            a as u16,
        )
    }
}
