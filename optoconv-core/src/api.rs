//! Free functions on a CODATA 2018 engine
//!
//! Shorthand for the common case where nobody needs to pick constants:
//!
//! ```rust
//! let thz = optoconv_core::wavelength_to_frequency(800.0, "nm", "THz").unwrap();
//! assert!((thz - 374.74).abs() < 0.1);
//! ```

use crate::engine::ConversionEngine;
use crate::errors::ConversionResult;
use crate::traits::QuantityValue;
use crate::units::QuantityKind;

const ENGINE: ConversionEngine = ConversionEngine::new();

/// See [`ConversionEngine::scale_factor`]
pub fn scale_factor(kind: QuantityKind, unit: &str) -> ConversionResult<f64> {
    ENGINE.scale_factor(kind, unit)
}

/// See [`ConversionEngine::convert`]
pub fn convert<V: QuantityValue>(
    value: V,
    kind: QuantityKind,
    from_unit: &str,
    to_unit: &str,
) -> ConversionResult<V> {
    ENGINE.convert(value, kind, from_unit, to_unit)
}

macro_rules! forward {
    ($($(#[$doc:meta])* $name:ident($($arg:ident: $ty:ty),*);)*) => {
        $(
            $(#[$doc])*
            pub fn $name<V: QuantityValue>(value: V, $($arg: $ty),*) -> ConversionResult<V> {
                ENGINE.$name(value, $($arg),*)
            }
        )*
    };
}

forward! {
    /// See [`ConversionEngine::convert_wavelength`]
    convert_wavelength(from_unit: &str, to_unit: &str);
    /// See [`ConversionEngine::convert_frequency`]
    convert_frequency(from_unit: &str, to_unit: &str);
    /// See [`ConversionEngine::convert_wavenumber`]
    convert_wavenumber(from_unit: &str, to_unit: &str);
    /// See [`ConversionEngine::convert_fluence`]
    convert_fluence(from_unit: &str, to_unit: &str);
    /// See [`ConversionEngine::convert_electric_field`]
    convert_electric_field(from_unit: &str, to_unit: &str);
    /// See [`ConversionEngine::convert_intensity`]
    convert_intensity(from_unit: &str, to_unit: &str);
    /// See [`ConversionEngine::convert_time`]
    convert_time(from_unit: &str, to_unit: &str);
    /// See [`ConversionEngine::convert_energy`]
    convert_energy(from_unit: &str, to_unit: &str);

    /// See [`ConversionEngine::wavelength_to_frequency`]
    wavelength_to_frequency(wavelength_unit: &str, frequency_unit: &str);
    /// See [`ConversionEngine::frequency_to_wavelength`]
    frequency_to_wavelength(frequency_unit: &str, wavelength_unit: &str);
    /// See [`ConversionEngine::wavelength_to_wavenumber`]
    wavelength_to_wavenumber(wavelength_unit: &str, wavenumber_unit: &str);
    /// See [`ConversionEngine::wavenumber_to_wavelength`]
    wavenumber_to_wavelength(wavenumber_unit: &str, wavelength_unit: &str);
    /// See [`ConversionEngine::wavelength_to_angular_wavenumber`]
    wavelength_to_angular_wavenumber(wavelength_unit: &str, wavenumber_unit: &str);
    /// See [`ConversionEngine::angular_wavenumber_to_wavelength`]
    angular_wavenumber_to_wavelength(wavenumber_unit: &str, wavelength_unit: &str);
    /// See [`ConversionEngine::intensity_to_electric_field`]
    intensity_to_electric_field(intensity_unit: &str, electric_field_unit: &str);
    /// See [`ConversionEngine::electric_field_to_intensity`]
    electric_field_to_intensity(electric_field_unit: &str, intensity_unit: &str);
    /// See [`ConversionEngine::wavelength_to_photon_energy`]
    wavelength_to_photon_energy(wavelength_unit: &str, energy_unit: &str);
    /// See [`ConversionEngine::photon_energy_to_wavelength`]
    photon_energy_to_wavelength(energy_unit: &str, wavelength_unit: &str);
    /// See [`ConversionEngine::frequency_to_photon_energy`]
    frequency_to_photon_energy(frequency_unit: &str, energy_unit: &str);
    /// See [`ConversionEngine::photon_energy_to_frequency`]
    photon_energy_to_frequency(energy_unit: &str, frequency_unit: &str);
    /// See [`ConversionEngine::intensity_to_fluence`]
    intensity_to_fluence(intensity_unit: &str, duration: f64, time_unit: &str, fluence_unit: &str);
    /// See [`ConversionEngine::fluence_to_intensity`]
    fluence_to_intensity(fluence_unit: &str, duration: f64, time_unit: &str, intensity_unit: &str);
}
