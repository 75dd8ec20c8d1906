//! Cross-Quantity Relations
//!
//! ## Overview
//!
//! A relation maps one quantity kind onto another through a physical
//! formula. Every relation in this module is the same three-step sandwich:
//!
//! ```text
//! caller unit ──convert──▶ SI base ──formula──▶ SI base ──convert──▶ caller unit
//! ```
//!
//! so the formulas only ever see SI values and each one is a single closure.
//! No per-unit-pair formula table exists.
//!
//! ## Formulas (SI)
//!
//! ```text
//! Relation                        | Formula            | Domain
//! --------------------------------|--------------------|-------------
//! wavelength -> frequency         | f = c / λ          |
//! frequency -> wavelength         | λ = c / f          |
//! wavelength -> wavenumber        | k = 1 / λ          |
//! wavenumber -> wavelength        | λ = 1 / k          |
//! wavelength -> angular wavenumber| k = 2π / λ         |
//! angular wavenumber -> wavelength| λ = 2π / k         |
//! intensity -> electric field     | E = √(2I / (ε₀c))  | I >= 0
//! electric field -> intensity     | I = ½ ε₀ c E²      |
//! wavelength -> photon energy     | E = h c / λ        |
//! photon energy -> wavelength     | λ = h c / E        |
//! frequency -> photon energy      | E = h f            |
//! photon energy -> frequency      | f = E / h          |
//! intensity -> fluence            | F = I τ            | τ > 0
//! fluence -> intensity            | I = F / τ          | τ > 0
//! ```
//!
//! ## Physics Background
//!
//! ### Field and intensity
//!
//! For a linearly polarized plane wave in vacuum the cycle-averaged intensity
//! is `I = ½ ε₀ c E₀²`, with `E₀` the peak field amplitude. Inverting it needs
//! a square root, which is why negative intensities are rejected rather than
//! turned into NaN.
//!
//! ### Fluence and intensity
//!
//! The pulse relations assume a flat-top pulse of duration τ, so the peak
//! intensity is simply the fluence spread over τ. For Gaussian pulses callers
//! should fold the shape factor (≈0.94 for FWHM) into τ themselves.
//!
//! ## Error Policy
//!
//! Arrays fail as a whole. The first element outside the domain is reported
//! with its index; no result is returned for the rest. Zero wavelengths and
//! frequencies follow IEEE arithmetic (`c / 0 = inf`) rather than failing,
//! matching numeric array libraries.

use core::f64::consts::PI;
use core::fmt;

use crate::engine::ConversionEngine;
use crate::errors::{ConversionError, ConversionResult};
use crate::traits::QuantityValue;
use crate::units::QuantityKind;

/// A physical relation between two quantity kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Relation {
    /// `f = c / λ`
    WavelengthToFrequency,
    /// `λ = c / f`
    FrequencyToWavelength,
    /// `k = 1 / λ`
    WavelengthToWavenumber,
    /// `λ = 1 / k`
    WavenumberToWavelength,
    /// `k = 2π / λ`
    WavelengthToAngularWavenumber,
    /// `λ = 2π / k`
    AngularWavenumberToWavelength,
    /// `E = √(2I / (ε₀c))`
    IntensityToElectricField,
    /// `I = ½ ε₀ c E²`
    ElectricFieldToIntensity,
    /// `E = h c / λ`
    WavelengthToPhotonEnergy,
    /// `λ = h c / E`
    PhotonEnergyToWavelength,
    /// `E = h f`
    FrequencyToPhotonEnergy,
    /// `f = E / h`
    PhotonEnergyToFrequency,
    /// `F = I τ`
    IntensityToFluence,
    /// `I = F / τ`
    FluenceToIntensity,
}

impl Relation {
    /// Kind of the input value
    pub const fn source(self) -> QuantityKind {
        use QuantityKind::*;
        match self {
            Relation::WavelengthToFrequency
            | Relation::WavelengthToWavenumber
            | Relation::WavelengthToAngularWavenumber
            | Relation::WavelengthToPhotonEnergy => Wavelength,
            Relation::FrequencyToWavelength | Relation::FrequencyToPhotonEnergy => Frequency,
            Relation::WavenumberToWavelength | Relation::AngularWavenumberToWavelength => {
                Wavenumber
            }
            Relation::IntensityToElectricField | Relation::IntensityToFluence => Intensity,
            Relation::ElectricFieldToIntensity => ElectricField,
            Relation::PhotonEnergyToWavelength | Relation::PhotonEnergyToFrequency => Energy,
            Relation::FluenceToIntensity => Fluence,
        }
    }

    /// Kind of the result
    pub const fn target(self) -> QuantityKind {
        use QuantityKind::*;
        match self {
            Relation::WavelengthToFrequency | Relation::PhotonEnergyToFrequency => Frequency,
            Relation::FrequencyToWavelength
            | Relation::WavenumberToWavelength
            | Relation::AngularWavenumberToWavelength
            | Relation::PhotonEnergyToWavelength => Wavelength,
            Relation::WavelengthToWavenumber | Relation::WavelengthToAngularWavenumber => {
                Wavenumber
            }
            Relation::IntensityToElectricField => ElectricField,
            Relation::ElectricFieldToIntensity | Relation::FluenceToIntensity => Intensity,
            Relation::WavelengthToPhotonEnergy | Relation::FrequencyToPhotonEnergy => Energy,
            Relation::IntensityToFluence => Fluence,
        }
    }

    /// Relation running the other way
    pub const fn inverse(self) -> Relation {
        use Relation::*;
        match self {
            WavelengthToFrequency => FrequencyToWavelength,
            FrequencyToWavelength => WavelengthToFrequency,
            WavelengthToWavenumber => WavenumberToWavelength,
            WavenumberToWavelength => WavelengthToWavenumber,
            WavelengthToAngularWavenumber => AngularWavenumberToWavelength,
            AngularWavenumberToWavelength => WavelengthToAngularWavenumber,
            IntensityToElectricField => ElectricFieldToIntensity,
            ElectricFieldToIntensity => IntensityToElectricField,
            WavelengthToPhotonEnergy => PhotonEnergyToWavelength,
            PhotonEnergyToWavelength => WavelengthToPhotonEnergy,
            FrequencyToPhotonEnergy => PhotonEnergyToFrequency,
            PhotonEnergyToFrequency => FrequencyToPhotonEnergy,
            IntensityToFluence => FluenceToIntensity,
            FluenceToIntensity => IntensityToFluence,
        }
    }

    fn source_name(self) -> &'static str {
        match self {
            Relation::AngularWavenumberToWavelength => "angular wavenumber",
            Relation::PhotonEnergyToWavelength | Relation::PhotonEnergyToFrequency => {
                "photon energy"
            }
            other => other.source().name(),
        }
    }

    fn target_name(self) -> &'static str {
        match self {
            Relation::WavelengthToAngularWavenumber => "angular wavenumber",
            Relation::WavelengthToPhotonEnergy | Relation::FrequencyToPhotonEnergy => {
                "photon energy"
            }
            other => other.target().name(),
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source_name(), self.target_name())
    }
}

const NEGATIVE_INTENSITY: &str = "intensity must be non-negative";
const NON_POSITIVE_DURATION: &str = "pulse duration must be positive and finite";

impl ConversionEngine {
    /// Run `formula` between the base units of `relation`'s kinds
    ///
    /// `formula` returns `Err(reason)` for inputs outside the relation's
    /// domain; the error is tagged with the element position.
    fn relate<V, F>(
        &self,
        relation: Relation,
        value: V,
        from_unit: &str,
        to_unit: &str,
        mut formula: F,
    ) -> ConversionResult<V>
    where
        V: QuantityValue,
        F: FnMut(f64) -> Result<f64, &'static str>,
    {
        let source = relation.source();
        let target = relation.target();

        let base = self.convert(value, source, from_unit, source.base_unit())?;
        let related = base.try_map_values(|index, v| {
            formula(v).map_err(|reason| {
                log_warn!("{} rejected element {:?} = {}: {}", relation, index, v, reason);
                ConversionError::DomainError {
                    relation,
                    value: v,
                    index,
                    reason,
                }
            })
        })?;
        self.convert(related, target, target.base_unit(), to_unit)
    }

    /// Frequency of light with the given vacuum wavelength
    pub fn wavelength_to_frequency<V: QuantityValue>(
        &self,
        value: V,
        wavelength_unit: &str,
        frequency_unit: &str,
    ) -> ConversionResult<V> {
        let c = self.constants().c;
        self.relate(
            Relation::WavelengthToFrequency,
            value,
            wavelength_unit,
            frequency_unit,
            |lambda| Ok(c / lambda),
        )
    }

    /// Vacuum wavelength of light with the given frequency
    pub fn frequency_to_wavelength<V: QuantityValue>(
        &self,
        value: V,
        frequency_unit: &str,
        wavelength_unit: &str,
    ) -> ConversionResult<V> {
        let c = self.constants().c;
        self.relate(
            Relation::FrequencyToWavelength,
            value,
            frequency_unit,
            wavelength_unit,
            |f| Ok(c / f),
        )
    }

    /// Spectroscopic wavenumber `1 / λ`
    pub fn wavelength_to_wavenumber<V: QuantityValue>(
        &self,
        value: V,
        wavelength_unit: &str,
        wavenumber_unit: &str,
    ) -> ConversionResult<V> {
        self.relate(
            Relation::WavelengthToWavenumber,
            value,
            wavelength_unit,
            wavenumber_unit,
            |lambda| Ok(1.0 / lambda),
        )
    }

    /// Wavelength from a spectroscopic wavenumber
    pub fn wavenumber_to_wavelength<V: QuantityValue>(
        &self,
        value: V,
        wavenumber_unit: &str,
        wavelength_unit: &str,
    ) -> ConversionResult<V> {
        self.relate(
            Relation::WavenumberToWavelength,
            value,
            wavenumber_unit,
            wavelength_unit,
            |k| Ok(1.0 / k),
        )
    }

    /// Angular wavenumber `2π / λ`, expressed in wavenumber units
    pub fn wavelength_to_angular_wavenumber<V: QuantityValue>(
        &self,
        value: V,
        wavelength_unit: &str,
        wavenumber_unit: &str,
    ) -> ConversionResult<V> {
        self.relate(
            Relation::WavelengthToAngularWavenumber,
            value,
            wavelength_unit,
            wavenumber_unit,
            |lambda| Ok(2.0 * PI / lambda),
        )
    }

    /// Wavelength from an angular wavenumber
    pub fn angular_wavenumber_to_wavelength<V: QuantityValue>(
        &self,
        value: V,
        wavenumber_unit: &str,
        wavelength_unit: &str,
    ) -> ConversionResult<V> {
        self.relate(
            Relation::AngularWavenumberToWavelength,
            value,
            wavenumber_unit,
            wavelength_unit,
            |k| Ok(2.0 * PI / k),
        )
    }

    /// Peak field amplitude of a plane wave with the given intensity
    ///
    /// Fails with [`ConversionError::DomainError`] if any intensity is
    /// negative.
    pub fn intensity_to_electric_field<V: QuantityValue>(
        &self,
        value: V,
        intensity_unit: &str,
        electric_field_unit: &str,
    ) -> ConversionResult<V> {
        let PhysicalTerms { c, epsilon0, .. } = self.terms();
        self.relate(
            Relation::IntensityToElectricField,
            value,
            intensity_unit,
            electric_field_unit,
            |i| {
                if i < 0.0 {
                    return Err(NEGATIVE_INTENSITY);
                }
                Ok(libm::sqrt(2.0 * i / (epsilon0 * c)))
            },
        )
    }

    /// Intensity of a plane wave with the given peak field amplitude
    pub fn electric_field_to_intensity<V: QuantityValue>(
        &self,
        value: V,
        electric_field_unit: &str,
        intensity_unit: &str,
    ) -> ConversionResult<V> {
        let PhysicalTerms { c, epsilon0, .. } = self.terms();
        self.relate(
            Relation::ElectricFieldToIntensity,
            value,
            electric_field_unit,
            intensity_unit,
            |e| Ok(0.5 * epsilon0 * c * e * e),
        )
    }

    /// Energy of one photon at the given wavelength
    pub fn wavelength_to_photon_energy<V: QuantityValue>(
        &self,
        value: V,
        wavelength_unit: &str,
        energy_unit: &str,
    ) -> ConversionResult<V> {
        let PhysicalTerms { c, h, .. } = self.terms();
        self.relate(
            Relation::WavelengthToPhotonEnergy,
            value,
            wavelength_unit,
            energy_unit,
            |lambda| Ok(h * c / lambda),
        )
    }

    /// Wavelength of a photon with the given energy
    pub fn photon_energy_to_wavelength<V: QuantityValue>(
        &self,
        value: V,
        energy_unit: &str,
        wavelength_unit: &str,
    ) -> ConversionResult<V> {
        let PhysicalTerms { c, h, .. } = self.terms();
        self.relate(
            Relation::PhotonEnergyToWavelength,
            value,
            energy_unit,
            wavelength_unit,
            |e| Ok(h * c / e),
        )
    }

    /// Energy of one photon at the given frequency
    pub fn frequency_to_photon_energy<V: QuantityValue>(
        &self,
        value: V,
        frequency_unit: &str,
        energy_unit: &str,
    ) -> ConversionResult<V> {
        let h = self.constants().h;
        self.relate(
            Relation::FrequencyToPhotonEnergy,
            value,
            frequency_unit,
            energy_unit,
            |f| Ok(h * f),
        )
    }

    /// Frequency of a photon with the given energy
    pub fn photon_energy_to_frequency<V: QuantityValue>(
        &self,
        value: V,
        energy_unit: &str,
        frequency_unit: &str,
    ) -> ConversionResult<V> {
        let h = self.constants().h;
        self.relate(
            Relation::PhotonEnergyToFrequency,
            value,
            energy_unit,
            frequency_unit,
            |e| Ok(e / h),
        )
    }

    /// Fluence delivered by a flat-top pulse of the given intensity and
    /// duration
    pub fn intensity_to_fluence<V: QuantityValue>(
        &self,
        value: V,
        intensity_unit: &str,
        duration: f64,
        time_unit: &str,
        fluence_unit: &str,
    ) -> ConversionResult<V> {
        let tau = self.pulse_duration(Relation::IntensityToFluence, duration, time_unit)?;
        self.relate(
            Relation::IntensityToFluence,
            value,
            intensity_unit,
            fluence_unit,
            |i| Ok(i * tau),
        )
    }

    /// Intensity of a flat-top pulse of the given fluence and duration
    pub fn fluence_to_intensity<V: QuantityValue>(
        &self,
        value: V,
        fluence_unit: &str,
        duration: f64,
        time_unit: &str,
        intensity_unit: &str,
    ) -> ConversionResult<V> {
        let tau = self.pulse_duration(Relation::FluenceToIntensity, duration, time_unit)?;
        self.relate(
            Relation::FluenceToIntensity,
            value,
            fluence_unit,
            intensity_unit,
            |f| Ok(f / tau),
        )
    }

    /// Pulse duration in seconds, checked to be positive and finite
    fn pulse_duration(
        &self,
        relation: Relation,
        duration: f64,
        time_unit: &str,
    ) -> ConversionResult<f64> {
        let seconds = self.convert_time(duration, time_unit, QuantityKind::Time.base_unit())?;
        if seconds.is_finite() && seconds > 0.0 {
            Ok(seconds)
        } else {
            log_warn!("{} rejected pulse duration {} s", relation, seconds);
            Err(ConversionError::DomainError {
                relation,
                value: seconds,
                index: None,
                reason: NON_POSITIVE_DURATION,
            })
        }
    }

    fn terms(&self) -> PhysicalTerms {
        let constants = self.constants();
        PhysicalTerms {
            c: constants.c,
            h: constants.h,
            epsilon0: constants.epsilon0,
        }
    }
}

/// Constants copied out of the engine so closures capture plain floats
struct PhysicalTerms {
    c: f64,
    h: f64,
    epsilon0: f64,
}
