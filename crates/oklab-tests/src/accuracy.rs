//! Observed component ranges
//!
//! Min/max trackers that can be merged, so sweeps can fold per thread and
//! reduce at the end.

use std::fmt;
use std::ops::RangeInclusive;

/// Min/max of one component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeStats {
    pub min: f64,
    pub max: f64,
    /// Number of samples
    pub count: usize,
}

impl Default for RangeStats {
    fn default() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            count: 0,
        }
    }
}

impl RangeStats {
    /// Record one sample
    #[inline]
    pub fn add(&mut self, v: f64) {
        self.min = self.min.min(v);
        self.max = self.max.max(v);
        self.count += 1;
    }

    /// Combine two trackers
    pub fn merge(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
            count: self.count + other.count,
        }
    }

    /// Check that every sample fell within `bounds`, widened by `tolerance`
    pub fn within(&self, bounds: &RangeInclusive<f64>, tolerance: f64) -> bool {
        self.min >= bounds.start() - tolerance && self.max <= bounds.end() + tolerance
    }
}

impl fmt::Display for RangeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}–{:.6}", self.min, self.max)
    }
}

/// Ranges of all three components of an Oklab or Oklch sweep
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ComponentRanges {
    pub ranges: [RangeStats; 3],
}

impl ComponentRanges {
    #[inline]
    pub fn add(&mut self, values: [f64; 3]) {
        for (stats, v) in self.ranges.iter_mut().zip(values) {
            stats.add(v);
        }
    }

    pub fn merge(self, other: Self) -> Self {
        let [a0, a1, a2] = self.ranges;
        let [b0, b1, b2] = other.ranges;
        Self {
            ranges: [a0.merge(b0), a1.merge(b1), a2.merge(b2)],
        }
    }
}
