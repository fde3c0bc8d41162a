//! # oklab - Oklab and Oklch for sRGB pipelines
//!
//! Converts colors between gamma-encoded sRGB and the Oklab / Oklch
//! perceptual color spaces described by Björn Ottosson.
//!
//! ## Conversion chain
//!
//! ```text
//! Rgba16 ──unpremultiply──► sRGB ──degamma──► linear sRGB ──LMS, cbrt──► Oklab ──polar──► Oklch
//! ```
//!
//! The reverse path cubes, re-encodes gamma, clamps to [0, 1] and truncates
//! to 16 bits per channel. Every conversion is total: no finite input produces
//! an error, a panic or a NaN.
//!
//! ## Quick Start
//!
//! ```
//! use oklab_core::{ColorModel, Nrgba8, OKLAB_MODEL};
//!
//! let pink = Nrgba8::new(0xff, 0xdf, 0xe7, 0xff);
//! let lab = OKLAB_MODEL.convert(&pink);
//! assert!((lab.l - 0.93).abs() < 0.005);
//!
//! // Back to 8-bit
//! let back = Nrgba8::from_color(&lab);
//! assert_eq!(back, pink);
//! ```

pub mod buffer;
pub mod color;
pub mod error;
pub mod math;
pub mod model;

pub use buffer::{oklab_from_rgba8, oklab_to_rgba8, oklch_from_rgba8, oklch_to_rgba8};
pub use color::{Nrgba8, Nrgba16, Oklab, Oklch, Rgba8, Rgba16};
pub use error::{Error, Result};
pub use math::{linear_to_srgb, srgb_to_linear};
pub use model::{
    Color, ColorModel, NRGBA8_MODEL, Nrgba8Model, OKLAB_MODEL, OKLCH_MODEL, OklabModel,
    OklchModel, RGBA16_MODEL, Rgba16Model,
};

/// Version of oklab-core
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
