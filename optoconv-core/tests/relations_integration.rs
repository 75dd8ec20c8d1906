//! Integration tests for cross-quantity relations
//!
//! Covers the laser-pulse workflow end to end (wavelength, frequency,
//! wavenumber, intensity, field) plus the error contract of each relation.

mod common;

use optoconv_core::{
    constants::physics::{C, EPSILON0, H},
    convert_electric_field, convert_intensity, electric_field_to_intensity,
    frequency_to_wavelength, intensity_to_electric_field, wavelength_to_frequency,
    wavelength_to_photon_energy, wavelength_to_wavenumber, wavenumber_to_wavelength,
    ConversionEngine, ConversionError, PhysicalConstants, Relation,
};

use common::{assert_close, LASER_LINES_NM};

#[test]
fn wavelength_frequency_round_trip() {
    for nm in [400.0, 500.0, 800.0] {
        let thz = wavelength_to_frequency(nm, "nm", "THz").unwrap();
        let back = frequency_to_wavelength(thz, "THz", "nm").unwrap();
        assert_close(back, nm);
    }
}

#[test]
fn wavelength_wavenumber_round_trip_on_arrays() {
    let wavenumbers = wavelength_to_wavenumber(LASER_LINES_NM.to_vec(), "nm", "1/m").unwrap();
    assert_eq!(wavenumbers.len(), LASER_LINES_NM.len());

    let back = wavenumber_to_wavelength(wavenumbers, "1/m", "nm").unwrap();
    for (got, want) in back.iter().zip(LASER_LINES_NM) {
        assert_close(*got, want);
    }
}

#[test]
fn array_relation_matches_scalar_relation() {
    let batch = wavelength_to_frequency(LASER_LINES_NM, "nm", "THz").unwrap();
    for (nm, thz) in LASER_LINES_NM.iter().zip(batch) {
        assert_eq!(thz, wavelength_to_frequency(*nm, "nm", "THz").unwrap());
    }
}

#[test]
fn laser_pulse_walkthrough() {
    // 800 nm Ti:sapphire line at 1 TW/cm2
    let thz = wavelength_to_frequency(800.0, "nm", "THz").unwrap();
    assert!((thz - 374.74).abs() < 0.1);

    let per_metre = wavelength_to_wavenumber(800.0, "nm", "1/m").unwrap();
    assert!((per_metre - 1.25e6).abs() < 1e3);

    let w_m2 = convert_intensity(1.0, "TW/cm2", "W/m2").unwrap();
    assert_eq!(w_m2, 1e16);

    let v_m = intensity_to_electric_field(w_m2, "W/m2", "V/m").unwrap();
    let gv_m = convert_electric_field(v_m, "V/m", "GV/m").unwrap();
    assert!(gv_m.is_finite() && gv_m > 0.0);
    assert_close(gv_m, (2.0 * 1e16 / (EPSILON0 * C)).sqrt() / 1e9);

    let ev = wavelength_to_photon_energy(800.0, "nm", "eV").unwrap();
    assert!((ev - 1.55).abs() < 0.01);
}

#[test]
fn intensity_field_round_trip() {
    let intensities = vec![1e12, 1e13, 1e14];
    let fields = intensity_to_electric_field(intensities.clone(), "W/m2", "V/m").unwrap();
    let back = electric_field_to_intensity(fields, "V/m", "W/m2").unwrap();
    for (got, want) in back.iter().zip(&intensities) {
        assert_close(*got, *want);
    }
}

#[test]
fn negative_intensity_fails_whole_call() {
    let err = intensity_to_electric_field(-1.0, "W/m2", "V/m").unwrap_err();
    assert!(matches!(
        err,
        ConversionError::DomainError {
            relation: Relation::IntensityToElectricField,
            ..
        }
    ));

    let batch = intensity_to_electric_field(vec![1.0, -1.0, 2.0], "W/m2", "V/m");
    assert!(matches!(
        batch,
        Err(ConversionError::DomainError { index: Some(1), .. })
    ));
}

#[test]
fn zero_wavelength_follows_ieee_arithmetic() {
    let hz = wavelength_to_frequency(0.0, "nm", "Hz").unwrap();
    assert!(hz.is_infinite());
}

#[test]
fn unit_errors_propagate_from_either_side() {
    assert!(matches!(
        wavelength_to_frequency(800.0, "nmm", "THz"),
        Err(ConversionError::UnsupportedUnit { .. })
    ));
    assert!(matches!(
        intensity_to_electric_field(1.0, "W/m2", "V/in"),
        Err(ConversionError::UnsupportedUnit { .. })
    ));
}

#[test]
fn custom_constants_flow_into_relations() {
    // Natural-ish units: c = 1 m/s makes frequency the inverse wavelength
    let engine = ConversionEngine::with_constants(PhysicalConstants {
        c: 1.0,
        ..PhysicalConstants::CODATA_2018
    });
    let hz = engine.wavelength_to_frequency(0.5, "m", "Hz").unwrap();
    assert_eq!(hz, 2.0);

    let joules = wavelength_to_photon_energy(500.0, "nm", "J").unwrap();
    assert_close(joules, H * C / 500e-9);
}
