//! Round-trip runners
//!
//! Converts 8-bit RGB into Oklab or Oklch and back through the color models,
//! collecting mismatches and observed component ranges. Sweeps run in
//! parallel with rayon.

use std::fmt;

use anyhow::{Context, Result, ensure};
use oklab_core::{ColorModel, NRGBA8_MODEL, Nrgba8, OKLAB_MODEL, OKLCH_MODEL};
use rayon::prelude::*;
use tracing::{info, warn};

use crate::accuracy::ComponentRanges;
use crate::patterns::{CUBE_SIZE, cube_color};

/// Mismatches kept verbatim in a report; the rest are only counted
const MAX_RECORDED: usize = 16;

/// Perceptual space under test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Space {
    Oklab,
    Oklch,
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Space::Oklab => write!(f, "oklab"),
            Space::Oklch => write!(f, "oklch"),
        }
    }
}

/// Outcome of a round-trip sweep
#[derive(Debug, Clone)]
pub struct RoundTripReport {
    pub space: Space,
    /// Number of colors checked
    pub checked: usize,
    /// Number of colors that did not come back unchanged
    pub mismatch_count: usize,
    /// First few mismatches as (original, returned)
    pub mismatches: Vec<([u8; 3], [u8; 3])>,
    /// Observed [L, a, b] or [L, C, H]
    pub ranges: ComponentRanges,
}

impl RoundTripReport {
    fn empty(space: Space) -> Self {
        Self {
            space,
            checked: 0,
            mismatch_count: 0,
            mismatches: Vec::new(),
            ranges: ComponentRanges::default(),
        }
    }

    fn record(mut self, rgb: [u8; 3]) -> Self {
        let start = Nrgba8::from(rgb);
        let (components, back) = match self.space {
            Space::Oklab => {
                let lab = OKLAB_MODEL.convert(&start);
                (lab.to_array(), NRGBA8_MODEL.convert(&lab))
            }
            Space::Oklch => {
                let lch = OKLCH_MODEL.convert(&start);
                (lch.to_array(), NRGBA8_MODEL.convert(&lch))
            }
        };

        self.checked += 1;
        self.ranges.add(components);
        if back != start {
            self.mismatch_count += 1;
            if self.mismatches.len() < MAX_RECORDED {
                self.mismatches.push((rgb, back.rgb()));
            }
        }
        self
    }

    fn merge(mut self, other: Self) -> Self {
        self.checked += other.checked;
        self.mismatch_count += other.mismatch_count;
        let room = MAX_RECORDED.saturating_sub(self.mismatches.len());
        self.mismatches.extend(other.mismatches.into_iter().take(room));
        self.ranges = self.ranges.merge(other.ranges);
        self
    }

    /// Log the observed ranges, and mismatches if any
    pub fn log(&self) {
        let [c0, c1, c2] = &self.ranges.ranges;
        let (n1, n2) = match self.space {
            Space::Oklab => ("A", "B"),
            Space::Oklch => ("C", "H"),
        };
        info!(space = %self.space, checked = self.checked, "L: {}", c0);
        info!(space = %self.space, "{}: {}", n1, c1);
        info!(space = %self.space, "{}: {}", n2, c2);
        for (start, back) in &self.mismatches {
            warn!(space = %self.space, "rgb({:?}) came back as {:?}", start, back);
        }
    }

    /// Fail unless every color came back unchanged
    pub fn ensure_lossless(&self) -> Result<()> {
        ensure!(
            self.mismatch_count == 0,
            "{} of {} colors changed in an rgb -> {} -> rgb round trip, first: {:?}",
            self.mismatch_count,
            self.checked,
            self.space,
            self.mismatches.first()
        );
        Ok(())
    }
}

/// Round-trip every sample through `space`
pub fn roundtrip(space: Space, samples: &[[u8; 3]]) -> RoundTripReport {
    samples
        .par_iter()
        .fold(|| RoundTripReport::empty(space), |r, &rgb| r.record(rgb))
        .reduce(|| RoundTripReport::empty(space), RoundTripReport::merge)
}

/// Round-trip the whole 8-bit cube without materializing it
pub fn roundtrip_cube(space: Space) -> RoundTripReport {
    (0..CUBE_SIZE)
        .into_par_iter()
        .fold(
            || RoundTripReport::empty(space),
            |r, i| r.record(cube_color(i)),
        )
        .reduce(|| RoundTripReport::empty(space), RoundTripReport::merge)
}

/// Round-trip opaque RGB samples through the RGBA8 buffer API
pub fn buffer_roundtrip(space: Space, samples: &[[u8; 3]]) -> Result<()> {
    let src: Vec<u8> = samples
        .iter()
        .flat_map(|&rgb| <[u8; 4]>::from(Nrgba8::from(rgb)))
        .collect();
    let mut dst = vec![0u8; src.len()];

    match space {
        Space::Oklab => {
            let labs = oklab_core::oklab_from_rgba8(&src).context("rgba8 -> oklab")?;
            oklab_core::oklab_to_rgba8(&labs, &mut dst).context("oklab -> rgba8")?;
        }
        Space::Oklch => {
            let lchs = oklab_core::oklch_from_rgba8(&src).context("rgba8 -> oklch")?;
            oklab_core::oklch_to_rgba8(&lchs, &mut dst).context("oklch -> rgba8")?;
        }
    }

    if let Some(i) = src.iter().zip(&dst).position(|(a, b)| a != b) {
        let px = i / 4;
        anyhow::bail!(
            "{} buffer round trip changed pixel {}: {:?} -> {:?}",
            space,
            px,
            &src[px * 4..px * 4 + 4],
            &dst[px * 4..px * 4 + 4]
        );
    }
    Ok(())
}
