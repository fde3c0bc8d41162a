//! Color space types and conversions
//!
//! This module provides:
//! - Integer RGBA primitives (8/16-bit, premultiplied or not)
//! - Oklab color space
//! - Oklch, the polar form of Oklab

pub mod oklab;
pub mod oklch;
pub mod rgb;

pub use oklab::Oklab;
pub use oklch::Oklch;
pub use rgb::{Nrgba8, Nrgba16, Rgba8, Rgba16};
