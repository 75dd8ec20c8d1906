//! Metric Prefixes and Area Denominators
//!
//! Building blocks for the per-area unit tables (fluence and intensity).
//! A per-area token such as `TW/cm2` is the concatenation
//! `{prefix}{numerator}/{area}`; its scale factor relative to the SI base
//! (`W/m2`) is `prefix_factor * area_factor`.
//!
//! Area factors are "per area" factors: dividing by one square centimetre is
//! the same as multiplying by 1e4 per square metre.

use crate::units::Unit;

/// SI prefixes offered on per-area numerators, largest first.
///
/// The empty prefix must be present and have factor exactly 1.0, otherwise
/// the base unit of the table would not be exact.
pub const SI_PREFIXES: &[Unit] = &[
    Unit::new("P", 1e15),
    Unit::new("T", 1e12),
    Unit::new("G", 1e9),
    Unit::new("M", 1e6),
    Unit::new("k", 1e3),
    Unit::new("", 1.0),
    Unit::new("m", 1e-3),
    Unit::new("u", 1e-6),
    Unit::new("n", 1e-9),
    Unit::new("p", 1e-12),
];

/// Area denominators and their per-square-metre factors.
pub const AREA_DENOMINATORS: &[Unit] = &[
    Unit::new("m2", 1.0),
    Unit::new("cm2", 1e4),
    Unit::new("mm2", 1e6),
    Unit::new("um2", 1e12),
];
