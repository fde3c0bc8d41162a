//! Observed component ranges and polar idempotence

use oklab_core::{Oklab, Oklch};
use oklab_tests::parity::roundtrip_cube;
use oklab_tests::{RoundTripReport, SamplePattern, Space, generate_samples, init_logging, roundtrip};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Slack on the published bounds, which are printed to six decimals
const BOUND_TOLERANCE: f64 = 1e-6;

fn sampled(space: Space) -> RoundTripReport {
    let mut samples = generate_samples(SamplePattern::Random {
        seed: 1234,
        count: 50_000,
    });
    samples.extend(generate_samples(SamplePattern::CubeCorners));
    samples.extend(generate_samples(SamplePattern::PrimaryRamps));
    roundtrip(space, &samples)
}

fn assert_oklab_ranges(report: &RoundTripReport) {
    let [l, a, b] = &report.ranges.ranges;
    assert!(l.within(&Oklab::L_RANGE, BOUND_TOLERANCE), "L: {}", l);
    assert!(a.within(&Oklab::A_RANGE, BOUND_TOLERANCE), "A: {}", a);
    assert!(b.within(&Oklab::B_RANGE, BOUND_TOLERANCE), "B: {}", b);
}

fn assert_oklch_ranges(report: &RoundTripReport) {
    let [l, c, h] = &report.ranges.ranges;
    assert!(l.within(&Oklab::L_RANGE, BOUND_TOLERANCE), "L: {}", l);
    assert!(c.within(&Oklch::C_RANGE, BOUND_TOLERANCE), "C: {}", c);
    assert!(h.within(&Oklch::H_RANGE, 0.0), "H: {}", h);
    assert!(c.min >= 0.0, "negative chroma {}", c.min);
}

#[test]
fn test_oklab_sampled_ranges() {
    init_logging();
    let report = sampled(Space::Oklab);
    report.log();
    assert_oklab_ranges(&report);
}

#[test]
fn test_oklch_sampled_ranges() {
    init_logging();
    let report = sampled(Space::Oklch);
    report.log();
    assert_oklch_ranges(&report);
}

#[test]
fn test_extremes_reach_published_bounds() {
    // Green, blue and yellow are the a/b extremes; max a lies off the ramps
    // near magenta
    let report = sampled(Space::Oklab);
    let [_, a, b] = &report.ranges.ranges;
    assert!((a.min - Oklab::A_RANGE.start()).abs() < 1e-5, "min A {}", a.min);
    assert!(a.max > 0.27, "max A {}", a.max);
    assert!((b.min - Oklab::B_RANGE.start()).abs() < 1e-5, "min B {}", b.min);
    assert!((b.max - Oklab::B_RANGE.end()).abs() < 1e-5, "max B {}", b.max);
}

#[test]
fn test_polar_idempotence() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    for _ in 0..100_000 {
        let lab = Oklab::new(
            rng.gen_range(-0.5..1.5),
            rng.gen_range(-0.5..0.5),
            rng.gen_range(-0.5..0.5),
        );
        let back = lab.to_oklch().to_oklab();
        assert!(lab.approx_eq(&back, 1e-9), "{:?} -> {:?}", lab, back);
    }
}

#[test]
#[ignore = "exhaustive: 16.7M colors, run with --ignored"]
fn test_oklab_exhaustive_ranges() {
    init_logging();
    let report = roundtrip_cube(Space::Oklab);
    report.log();
    assert_oklab_ranges(&report);
}

#[test]
#[ignore = "exhaustive: 16.7M colors, run with --ignored"]
fn test_oklch_exhaustive_ranges() {
    init_logging();
    let report = roundtrip_cube(Space::Oklch);
    report.log();
    assert_oklch_ranges(&report);
}
