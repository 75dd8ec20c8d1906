//! Common test utilities for integration tests
//!
//! This module provides:
//! - Floating point comparison helpers
//! - Unit catalog walkers so tests cover every token of every kind
//! - Representative values used across round-trip tests

#![allow(dead_code)]

use optoconv_core::QuantityKind;

/// Relative tolerance for chained conversions.
/// A handful of multiplications loses a few ulps; 1e-9 leaves ample margin.
pub const ROUND_TRIP_TOLERANCE: f64 = 1e-9;

/// Values spanning the magnitudes seen in optics work.
pub const REPRESENTATIVE_VALUES: [f64; 4] = [0.1, 1.0, 100.0, 1e6];

/// Visible to near-infrared laser lines (nm).
pub const LASER_LINES_NM: [f64; 5] = [400.0, 500.0, 600.0, 700.0, 800.0];

/// Relative error of `got` against `want`, absolute when `want` is zero
pub fn relative_error(got: f64, want: f64) -> f64 {
    if want == 0.0 {
        got.abs()
    } else {
        ((got - want) / want).abs()
    }
}

/// Assert `got` is within `ROUND_TRIP_TOLERANCE` of `want`
#[track_caller]
pub fn assert_close(got: f64, want: f64) {
    assert!(
        relative_error(got, want) < ROUND_TRIP_TOLERANCE,
        "expected {want}, got {got} (relative error {})",
        relative_error(got, want)
    );
}

/// Every unit token of `kind`, rendered as the caller would type it
pub fn tokens(kind: QuantityKind) -> Vec<String> {
    kind.units().map(|symbol| symbol.to_string()).collect()
}

/// Every ordered pair of distinct tokens of `kind`
pub fn token_pairs(kind: QuantityKind) -> Vec<(String, String)> {
    let tokens = tokens(kind);
    let mut pairs = Vec::new();
    for from in &tokens {
        for to in &tokens {
            if from != to {
                pairs.push((from.clone(), to.clone()));
            }
        }
    }
    pairs
}
