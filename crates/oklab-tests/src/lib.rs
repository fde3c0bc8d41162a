//! # oklab-tests
//!
//! Verification harness for oklab-core.
//!
//! This crate provides:
//! - Sample generators over the 8-bit sRGB cube (seeded random, corners,
//!   gray ramp, and the full 16,777,216-color cube)
//! - Round-trip runners that check RGB → Oklab/Oklch → RGB is lossless
//! - Observed component ranges
//! - Parity against the `palette` crate's Oklab implementation
//!
//! ## Test Categories
//!
//! 1. **Round trip**: sampled by default, exhaustive with `--ignored`
//! 2. **Ranges**: observed L/a/b and C/H bounds
//! 3. **Reference parity**: agreement with `palette`
//! 4. **Scenarios**: literal values and edge cases

pub mod accuracy;
pub mod parity;
pub mod patterns;
pub mod reference;

pub use accuracy::{ComponentRanges, RangeStats};
pub use parity::{RoundTripReport, Space, buffer_roundtrip, roundtrip, roundtrip_cube};
pub use patterns::{SamplePattern, generate_samples};

/// Install a `tracing` subscriber for test output
///
/// Honors `RUST_LOG`, defaulting to `info`. Safe to call from every test.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}
