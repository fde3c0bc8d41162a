//! RGBA8 pixel buffer conversions
//!
//! Interop with image pipelines that hand over raw, non-premultiplied RGBA8
//! bytes. Pixels are converted one at a time through the same scalar path
//! as [`Oklab::from_color`] and [`Nrgba8::from_color`].

use tracing::debug;

use crate::color::{Nrgba8, Oklab, Oklch};
use crate::{Error, Result};

/// View a byte buffer as RGBA8 pixels
fn as_pixels(rgba: &[u8]) -> Result<&[Nrgba8]> {
    bytemuck::try_cast_slice(rgba).map_err(|_| Error::PartialPixel { len: rgba.len() })
}

fn as_pixels_mut(rgba: &mut [u8]) -> Result<&mut [Nrgba8]> {
    let len = rgba.len();
    bytemuck::try_cast_slice_mut(rgba).map_err(|_| Error::PartialPixel { len })
}

/// Convert RGBA8 bytes to Oklab, one value per pixel
pub fn oklab_from_rgba8(rgba: &[u8]) -> Result<Vec<Oklab>> {
    let pixels = as_pixels(rgba)?;
    debug!(pixels = pixels.len(), "rgba8 -> oklab");
    Ok(pixels.iter().map(Oklab::from_color).collect())
}

/// Convert RGBA8 bytes to Oklch, one value per pixel
pub fn oklch_from_rgba8(rgba: &[u8]) -> Result<Vec<Oklch>> {
    let pixels = as_pixels(rgba)?;
    debug!(pixels = pixels.len(), "rgba8 -> oklch");
    Ok(pixels.iter().map(Oklch::from_color).collect())
}

/// Write Oklab values as opaque RGBA8 bytes
///
/// `dst` must hold exactly four bytes per color.
pub fn oklab_to_rgba8(colors: &[Oklab], dst: &mut [u8]) -> Result<()> {
    write_rgba8(colors, dst, "oklab -> rgba8")
}

/// Write Oklch values as opaque RGBA8 bytes
pub fn oklch_to_rgba8(colors: &[Oklch], dst: &mut [u8]) -> Result<()> {
    write_rgba8(colors, dst, "oklch -> rgba8")
}

fn write_rgba8<C: crate::Color>(colors: &[C], dst: &mut [u8], what: &'static str) -> Result<()> {
    let expected = colors.len() * 4;
    if dst.len() != expected {
        return Err(Error::BufferSize {
            expected,
            actual: dst.len(),
        });
    }
    let pixels = as_pixels_mut(dst)?;
    debug!(pixels = pixels.len(), "{}", what);
    for (color, px) in colors.iter().zip(pixels.iter_mut()) {
        *px = Nrgba8::from_color(color);
    }
    Ok(())
}
