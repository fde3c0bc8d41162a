//! Test sample generation
//!
//! Opaque 8-bit RGB triples drawn from the sRGB cube.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Number of colors in the 8-bit RGB cube
pub const CUBE_SIZE: u32 = 1 << 24;

/// Sample pattern types
#[derive(Debug, Clone, Copy)]
pub enum SamplePattern {
    /// RGB color cube corners (8 colors)
    CubeCorners,
    /// All 256 neutral grays
    GrayRamp,
    /// Each primary and secondary ramped 0-255
    PrimaryRamps,
    /// `count` random colors with seed
    Random { seed: u64, count: usize },
    /// Every 8-bit color, 16,777,216 of them
    Exhaustive,
}

/// The `index`-th color of the cube in r-major order
#[inline]
pub fn cube_color(index: u32) -> [u8; 3] {
    [(index >> 16) as u8, (index >> 8) as u8, index as u8]
}

/// Generate samples for a pattern
pub fn generate_samples(pattern: SamplePattern) -> Vec<[u8; 3]> {
    match pattern {
        SamplePattern::CubeCorners => vec![
            [0, 0, 0],
            [255, 0, 0],
            [0, 255, 0],
            [0, 0, 255],
            [255, 255, 0],
            [255, 0, 255],
            [0, 255, 255],
            [255, 255, 255],
        ],
        SamplePattern::GrayRamp => (0..=255u8).map(|v| [v, v, v]).collect(),
        SamplePattern::PrimaryRamps => {
            let masks: [[bool; 3]; 6] = [
                [true, false, false],
                [false, true, false],
                [false, false, true],
                [true, true, false],
                [true, false, true],
                [false, true, true],
            ];
            masks
                .iter()
                .flat_map(|mask| {
                    (0..=255u8).map(move |v| mask.map(|on| if on { v } else { 0 }))
                })
                .collect()
        }
        SamplePattern::Random { seed, count } => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| {
                    let mut rgb = [0u8; 3];
                    rng.fill_bytes(&mut rgb);
                    rgb
                })
                .collect()
        }
        SamplePattern::Exhaustive => (0..CUBE_SIZE).map(cube_color).collect(),
    }
}
