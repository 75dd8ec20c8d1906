//! Property-based tests for optoconv-core using proptest.
//!
//! Covers: same-quantity round trips across random unit pairs, shape
//! preservation, and inverse pairs of every cross-quantity relation.

mod common;

use optoconv_core::{ConversionEngine, QuantityKind};
use proptest::prelude::*;

use common::{relative_error, tokens, ROUND_TRIP_TOLERANCE};

fn kind() -> impl Strategy<Value = QuantityKind> {
    prop::sample::select(QuantityKind::ALL.to_vec())
}

/// A kind together with two of its unit tokens
fn kind_and_units() -> impl Strategy<Value = (QuantityKind, String, String)> {
    kind().prop_flat_map(|kind| {
        let units = tokens(kind);
        (
            Just(kind),
            prop::sample::select(units.clone()),
            prop::sample::select(units),
        )
    })
}

/// Positive magnitudes from 1e-6 to 1e9
fn magnitude() -> impl Strategy<Value = f64> {
    (-6.0f64..9.0).prop_map(|exp| 10f64.powf(exp))
}

// ── Same-quantity conversion ─────────────────────────────────────────

proptest! {
    /// Converting there and back returns the input.
    #[test]
    fn round_trip((kind, from, to) in kind_and_units(), value in magnitude()) {
        let engine = ConversionEngine::new();
        let there = engine.convert(value, kind, &from, &to).unwrap();
        let back = engine.convert(there, kind, &to, &from).unwrap();
        prop_assert!(relative_error(back, value) < ROUND_TRIP_TOLERANCE,
            "{} {} {} -> {} came back as {}", kind, value, from, to, back);
    }

    /// Same unit on both sides is bit-exact.
    #[test]
    fn identity((kind, unit, _) in kind_and_units(), value in any::<f64>()) {
        let engine = ConversionEngine::new();
        let out = engine.convert(value, kind, &unit, &unit).unwrap();
        prop_assert_eq!(out.to_bits(), value.to_bits());
    }

    /// Output length and element order match the input.
    #[test]
    fn shape_is_preserved(
        (kind, from, to) in kind_and_units(),
        values in prop::collection::vec(magnitude(), 0..32),
    ) {
        let engine = ConversionEngine::new();
        let out = engine.convert(values.clone(), kind, &from, &to).unwrap();
        prop_assert_eq!(out.len(), values.len());
        for (value, converted) in values.iter().zip(&out) {
            let single = engine.convert(*value, kind, &from, &to).unwrap();
            prop_assert_eq!(*converted, single);
        }
    }

    /// Conversion preserves ordering.
    #[test]
    fn conversion_is_monotone((kind, from, to) in kind_and_units(), a in magnitude(), b in magnitude()) {
        prop_assume!(a < b);
        let engine = ConversionEngine::new();
        let ca = engine.convert(a, kind, &from, &to).unwrap();
        let cb = engine.convert(b, kind, &from, &to).unwrap();
        prop_assert!(ca <= cb);
    }
}

// ── Cross-quantity inverses ──────────────────────────────────────────

proptest! {
    /// wavelength -> frequency -> wavelength
    #[test]
    fn wavelength_frequency_inverse(nm in 100.0f64..20_000.0) {
        let engine = ConversionEngine::new();
        let thz = engine.wavelength_to_frequency(nm, "nm", "THz").unwrap();
        let back = engine.frequency_to_wavelength(thz, "THz", "nm").unwrap();
        prop_assert!(relative_error(back, nm) < ROUND_TRIP_TOLERANCE);
    }

    /// wavelength -> wavenumber -> wavelength, both flavours
    #[test]
    fn wavelength_wavenumber_inverse(um in 0.1f64..100.0) {
        let engine = ConversionEngine::new();
        let k = engine.wavelength_to_wavenumber(um, "um", "1/cm").unwrap();
        let back = engine.wavenumber_to_wavelength(k, "1/cm", "um").unwrap();
        prop_assert!(relative_error(back, um) < ROUND_TRIP_TOLERANCE);

        let k = engine.wavelength_to_angular_wavenumber(um, "um", "1/m").unwrap();
        let back = engine.angular_wavenumber_to_wavelength(k, "1/m", "um").unwrap();
        prop_assert!(relative_error(back, um) < ROUND_TRIP_TOLERANCE);
    }

    /// intensity -> field -> intensity for any non-negative intensity
    #[test]
    fn intensity_field_inverse(w_cm2 in magnitude()) {
        let engine = ConversionEngine::new();
        let field = engine.intensity_to_electric_field(w_cm2, "W/cm2", "MV/m").unwrap();
        prop_assert!(field >= 0.0);
        let back = engine.electric_field_to_intensity(field, "MV/m", "W/cm2").unwrap();
        prop_assert!(relative_error(back, w_cm2) < ROUND_TRIP_TOLERANCE);
    }

    /// Any negative intensity is rejected.
    #[test]
    fn negative_intensity_rejected(w_m2 in magnitude()) {
        let engine = ConversionEngine::new();
        prop_assert!(engine.intensity_to_electric_field(-w_m2, "W/m2", "V/m").is_err());
    }

    /// photon energy relations invert each other
    #[test]
    fn photon_energy_inverse(nm in 100.0f64..20_000.0) {
        let engine = ConversionEngine::new();
        let ev = engine.wavelength_to_photon_energy(nm, "nm", "eV").unwrap();
        let hz = engine.photon_energy_to_frequency(ev, "eV", "Hz").unwrap();
        let direct = engine.wavelength_to_frequency(nm, "nm", "Hz").unwrap();
        prop_assert!(relative_error(hz, direct) < ROUND_TRIP_TOLERANCE);

        let back = engine.photon_energy_to_wavelength(ev, "eV", "nm").unwrap();
        prop_assert!(relative_error(back, nm) < ROUND_TRIP_TOLERANCE);
    }

    /// intensity -> fluence -> intensity for a fixed pulse
    #[test]
    fn pulse_fluence_inverse(w_cm2 in magnitude(), fs in 1.0f64..10_000.0) {
        let engine = ConversionEngine::new();
        let fluence = engine.intensity_to_fluence(w_cm2, "W/cm2", fs, "fs", "mJ/cm2").unwrap();
        let back = engine.fluence_to_intensity(fluence, "mJ/cm2", fs, "fs", "W/cm2").unwrap();
        prop_assert!(relative_error(back, w_cm2) < ROUND_TRIP_TOLERANCE);
    }
}
