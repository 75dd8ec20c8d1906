//! Conversion Engine
//!
//! ## Overview
//!
//! [`ConversionEngine`] pairs the static unit tables with a set of physical
//! constants. Same-quantity conversion lives here; the cross-quantity
//! relations are implemented in [`crate::relations`] on the same type.
//!
//! ## Same-Quantity Conversion
//!
//! Every conversion goes through the SI base unit of the kind:
//!
//! ```text
//! value' = value * (factor(from) / factor(to))
//! ```
//!
//! The ratio is formed first so that decimal prefixes cancel cleanly:
//! 400 nm comes out as exactly 0.4 um.
//!
//! Both tokens are validated before any arithmetic. When they are equal the
//! input is returned untouched, so `convert(v, k, u, u) == v` holds bit for
//! bit rather than only up to rounding.
//!
//! ## Configuration
//!
//! Tables are fixed. Constants are not: an engine can be built from any
//! [`PhysicalConstants`] set, which is how a caller would reproduce results
//! computed against an older CODATA release.
//!
//! ```rust
//! use optoconv_core::{ConversionEngine, PhysicalConstants};
//!
//! let engine = ConversionEngine::with_constants(PhysicalConstants::CODATA_2018);
//! let um = engine.convert_wavelength(400.0, "nm", "um").unwrap();
//! assert!((um - 0.4).abs() < 1e-12);
//! ```

use crate::constants::physics;
use crate::errors::{ConversionResult, UnitRole};
use crate::traits::QuantityValue;
use crate::units::{self, QuantityKind};

/// Physical constants used by the relations, in SI units
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicalConstants {
    /// Speed of light in vacuum (m/s)
    pub c: f64,
    /// Planck constant (J·s)
    pub h: f64,
    /// Reduced Planck constant (J·s)
    pub hbar: f64,
    /// Vacuum permittivity (F/m)
    pub epsilon0: f64,
    /// Vacuum permeability (H/m)
    pub mu0: f64,
}

impl PhysicalConstants {
    /// CODATA 2018 recommended values
    pub const CODATA_2018: Self = Self {
        c: physics::C,
        h: physics::H,
        hbar: physics::HBAR,
        epsilon0: physics::EPSILON0,
        mu0: physics::MU0,
    };

    /// Whether every constant is positive and finite
    pub fn is_physical(&self) -> bool {
        [self.c, self.h, self.hbar, self.epsilon0, self.mu0]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::CODATA_2018
    }
}

/// Unit conversion engine
///
/// Cheap to copy and safe to share between threads; it holds no mutable
/// state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionEngine {
    constants: PhysicalConstants,
}

impl Default for ConversionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversionEngine {
    /// Engine with CODATA 2018 constants
    pub const fn new() -> Self {
        Self::with_constants(PhysicalConstants::CODATA_2018)
    }

    /// Engine with a caller-supplied constant set
    pub const fn with_constants(constants: PhysicalConstants) -> Self {
        Self { constants }
    }

    /// Constants used by the relations
    pub const fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    /// Scale factor of `unit` relative to the base unit of `kind`
    pub fn scale_factor(&self, kind: QuantityKind, unit: &str) -> ConversionResult<f64> {
        units::lookup(kind, unit, UnitRole::Requested)
    }

    /// Convert `value` of `kind` from `from_unit` to `to_unit`
    ///
    /// Scalars and arrays are handled the same way, element by element.
    pub fn convert<V: QuantityValue>(
        &self,
        value: V,
        kind: QuantityKind,
        from_unit: &str,
        to_unit: &str,
    ) -> ConversionResult<V> {
        let from = units::lookup(kind, from_unit, UnitRole::Source)?;
        let to = units::lookup(kind, to_unit, UnitRole::Target)?;

        if from_unit == to_unit {
            return Ok(value);
        }

        let ratio = from / to;
        log_trace!(
            "{}: {} -> {} x{} ({} elements)",
            kind,
            from_unit,
            to_unit,
            ratio,
            value.element_count()
        );

        Ok(value.map_values(|v| v * ratio))
    }

    /// Convert a wavelength between length units
    pub fn convert_wavelength<V: QuantityValue>(
        &self,
        value: V,
        from_unit: &str,
        to_unit: &str,
    ) -> ConversionResult<V> {
        self.convert(value, QuantityKind::Wavelength, from_unit, to_unit)
    }

    /// Convert a frequency between frequency units
    pub fn convert_frequency<V: QuantityValue>(
        &self,
        value: V,
        from_unit: &str,
        to_unit: &str,
    ) -> ConversionResult<V> {
        self.convert(value, QuantityKind::Frequency, from_unit, to_unit)
    }

    /// Convert a wavenumber between inverse-length units
    pub fn convert_wavenumber<V: QuantityValue>(
        &self,
        value: V,
        from_unit: &str,
        to_unit: &str,
    ) -> ConversionResult<V> {
        self.convert(value, QuantityKind::Wavenumber, from_unit, to_unit)
    }

    /// Convert a fluence between energy-per-area units
    pub fn convert_fluence<V: QuantityValue>(
        &self,
        value: V,
        from_unit: &str,
        to_unit: &str,
    ) -> ConversionResult<V> {
        self.convert(value, QuantityKind::Fluence, from_unit, to_unit)
    }

    /// Convert an electric field between field units
    pub fn convert_electric_field<V: QuantityValue>(
        &self,
        value: V,
        from_unit: &str,
        to_unit: &str,
    ) -> ConversionResult<V> {
        self.convert(value, QuantityKind::ElectricField, from_unit, to_unit)
    }

    /// Convert an intensity between power-per-area units
    pub fn convert_intensity<V: QuantityValue>(
        &self,
        value: V,
        from_unit: &str,
        to_unit: &str,
    ) -> ConversionResult<V> {
        self.convert(value, QuantityKind::Intensity, from_unit, to_unit)
    }

    /// Convert a duration between time units
    pub fn convert_time<V: QuantityValue>(
        &self,
        value: V,
        from_unit: &str,
        to_unit: &str,
    ) -> ConversionResult<V> {
        self.convert(value, QuantityKind::Time, from_unit, to_unit)
    }

    /// Convert an energy between energy units (joules, electron-volts)
    pub fn convert_energy<V: QuantityValue>(
        &self,
        value: V,
        from_unit: &str,
        to_unit: &str,
    ) -> ConversionResult<V> {
        self.convert(value, QuantityKind::Energy, from_unit, to_unit)
    }
}
