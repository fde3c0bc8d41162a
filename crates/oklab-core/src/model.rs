//! Color models
//!
//! A [`Color`] is anything that can report itself as premultiplied 16-bit
//! RGBA. A [`ColorModel`] converts any such color into its own concrete
//! representation. The models here are zero-sized and stateless, so the
//! `*_MODEL` constants can be shared freely across threads.
//!
//! ```
//! use oklab_core::{ColorModel, Nrgba8, NRGBA8_MODEL, OKLCH_MODEL};
//!
//! let teal = Nrgba8::opaque(0x00, 0x80, 0x80);
//! let lch = OKLCH_MODEL.convert(&teal);
//! assert_eq!(NRGBA8_MODEL.convert(&lch), teal);
//! ```

use crate::color::{Nrgba8, Oklab, Oklch, Rgba16};

/// A color that can be read as 16-bit RGBA
pub trait Color {
    /// Premultiplied 16-bit RGBA; alpha 0xffff is opaque
    fn rgba16(&self) -> Rgba16;
}

impl<T: Color + ?Sized> Color for &T {
    #[inline]
    fn rgba16(&self) -> Rgba16 {
        (**self).rgba16()
    }
}

/// Converts arbitrary colors into one representation
pub trait ColorModel {
    type Output: Color;

    fn convert<C: Color + ?Sized>(&self, color: &C) -> Self::Output;
}

/// Model producing [`Oklab`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OklabModel;

/// Model producing [`Oklch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OklchModel;

/// Model producing non-premultiplied [`Nrgba8`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Nrgba8Model;

/// Model producing premultiplied [`Rgba16`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba16Model;

pub const OKLAB_MODEL: OklabModel = OklabModel;
pub const OKLCH_MODEL: OklchModel = OklchModel;
pub const NRGBA8_MODEL: Nrgba8Model = Nrgba8Model;
pub const RGBA16_MODEL: Rgba16Model = Rgba16Model;

impl ColorModel for OklabModel {
    type Output = Oklab;

    #[inline]
    fn convert<C: Color + ?Sized>(&self, color: &C) -> Oklab {
        Oklab::from_color(color)
    }
}

impl ColorModel for OklchModel {
    type Output = Oklch;

    #[inline]
    fn convert<C: Color + ?Sized>(&self, color: &C) -> Oklch {
        Oklch::from_color(color)
    }
}

impl ColorModel for Nrgba8Model {
    type Output = Nrgba8;

    #[inline]
    fn convert<C: Color + ?Sized>(&self, color: &C) -> Nrgba8 {
        Nrgba8::from_color(color)
    }
}

impl ColorModel for Rgba16Model {
    type Output = Rgba16;

    #[inline]
    fn convert<C: Color + ?Sized>(&self, color: &C) -> Rgba16 {
        color.rgba16()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba8;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_models_are_send_sync() {
        assert_send_sync::<OklabModel>();
        assert_send_sync::<OklchModel>();
        assert_send_sync::<Oklab>();
        assert_send_sync::<Oklch>();
    }

    #[test]
    fn test_models_are_zero_sized() {
        assert_eq!(std::mem::size_of::<OklabModel>(), 0);
        assert_eq!(std::mem::size_of::<OklchModel>(), 0);
    }

    #[test]
    fn test_oklab_model_pink() {
        let lab = OKLAB_MODEL.convert(&Nrgba8::opaque(0xff, 0xdf, 0xe7));
        assert!((lab.l - 0.93).abs() < 0.005);
        assert_eq!(NRGBA8_MODEL.convert(&lab), Nrgba8::opaque(0xff, 0xdf, 0xe7));
    }

    #[test]
    fn test_oklch_model_matches_oklab_model() {
        let c = Rgba8::new(12, 200, 99, 0xff);
        let lab = OKLAB_MODEL.convert(&c);
        let lch = OKLCH_MODEL.convert(&c);
        assert_eq!(lab.to_oklch(), lch);
        assert_eq!(lab.rgba16(), lch.to_oklab().rgba16());
    }

    #[test]
    fn test_oklab_output_is_opaque() {
        let lab = OKLAB_MODEL.convert(&Rgba8::new(0x40, 0x20, 0x10, 0x80));
        assert_eq!(RGBA16_MODEL.convert(&lab).a, 0xffff);
    }

    #[test]
    fn test_zero_alpha_converts_to_black() {
        let lab = OKLAB_MODEL.convert(&Rgba16::TRANSPARENT);
        assert_eq!(lab, Oklab::BLACK);
        let lch = OKLCH_MODEL.convert(&Rgba16::TRANSPARENT);
        assert_eq!(lch, Oklch::default());
    }

    #[test]
    fn test_trait_object_input() {
        let colors: Vec<Box<dyn Color>> = vec![
            Box::new(Nrgba8::opaque(1, 2, 3)),
            Box::new(Oklab::new(0.5, 0.0, 0.0)),
        ];
        for c in &colors {
            let lab = OKLAB_MODEL.convert(c.as_ref());
            assert!(lab.l.is_finite());
        }
    }

    #[test]
    fn test_concurrent_use() {
        let handles: Vec<_> = (0..4u8)
            .map(|i| {
                std::thread::spawn(move || {
                    let c = Nrgba8::opaque(i * 60, 255 - i * 60, 128);
                    NRGBA8_MODEL.convert(&OKLAB_MODEL.convert(&c)) == c
                })
            })
            .collect();
        for h in handles {
            assert!(h.join().unwrap());
        }
    }
}
