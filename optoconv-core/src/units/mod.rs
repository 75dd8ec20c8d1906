//! Unit Catalog and Token Lookup
//!
//! ## Overview
//!
//! Every quantity kind owns one [`UnitTable`]: a fixed mapping from unit token
//! to a positive scale factor such that
//!
//! ```text
//! value_in_base_unit = value_in_unit * scale_factor
//! ```
//!
//! The base (SI) unit of each kind has a factor of exactly 1.0, so converting
//! between any two units is a single multiply and divide through the base
//! unit. No pairwise table is needed.
//!
//! ## Table Layouts
//!
//! Two layouts cover everything:
//!
//! - **Listed**: explicit token/factor pairs (`nm`, `THz`, `1/cm`, `eV` ..)
//! - **Per-area**: a numerator symbol combined with every SI prefix and every
//!   area denominator. `W` with prefixes `{T, G, .., n}` and areas
//!   `{m2, cm2, ..}` yields `TW/cm2`, `mW/mm2` and so on. Factors are computed
//!   as `prefix * area` when the table is walked, so no combination can be
//!   forgotten.
//!
//! ```text
//! Token    | Prefix | Numerator | Area | Factor (per W/m2)
//! ---------|--------|-----------|------|------------------
//! W/m2     |  1     |    W      | 1    | 1
//! W/cm2    |  1     |    W      | 1e4  | 1e4
//! TW/cm2   |  1e12  |    W      | 1e4  | 1e16
//! ```
//!
//! ## Lookup Cost
//!
//! The largest table has 40 entries. Lookup is a linear scan with a couple of
//! `strip_prefix` calls per entry, which is well below the cost of the
//! float division that follows it.

use core::fmt;
use core::str::FromStr;

use alloc::string::String;

use crate::errors::{ConversionError, ConversionResult, UnitList, UnitRole};

mod tables;

/// Physical quantity handled by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum QuantityKind {
    /// Length of one optical cycle in space (base unit `m`)
    Wavelength,
    /// Oscillation frequency (base unit `Hz`)
    Frequency,
    /// Spatial frequency (base unit `1/m`)
    Wavenumber,
    /// Energy per unit area (base unit `J/m2`)
    Fluence,
    /// Electric field amplitude (base unit `V/m`)
    ElectricField,
    /// Power per unit area (base unit `W/m2`)
    Intensity,
    /// Duration (base unit `s`)
    Time,
    /// Energy (base unit `J`)
    Energy,
}

impl QuantityKind {
    /// Every supported kind, in catalog order
    pub const ALL: [QuantityKind; 8] = [
        QuantityKind::Wavelength,
        QuantityKind::Frequency,
        QuantityKind::Wavenumber,
        QuantityKind::Fluence,
        QuantityKind::ElectricField,
        QuantityKind::Intensity,
        QuantityKind::Time,
        QuantityKind::Energy,
    ];

    /// Human readable name, lowercase
    pub const fn name(self) -> &'static str {
        match self {
            QuantityKind::Wavelength => "wavelength",
            QuantityKind::Frequency => "frequency",
            QuantityKind::Wavenumber => "wavenumber",
            QuantityKind::Fluence => "fluence",
            QuantityKind::ElectricField => "electric field",
            QuantityKind::Intensity => "intensity",
            QuantityKind::Time => "time",
            QuantityKind::Energy => "energy",
        }
    }

    /// Token of the SI base unit (scale factor exactly 1.0)
    pub const fn base_unit(self) -> &'static str {
        match self {
            QuantityKind::Wavelength => "m",
            QuantityKind::Frequency => "Hz",
            QuantityKind::Wavenumber => "1/m",
            QuantityKind::Fluence => "J/m2",
            QuantityKind::ElectricField => "V/m",
            QuantityKind::Intensity => "W/m2",
            QuantityKind::Time => "s",
            QuantityKind::Energy => "J",
        }
    }

    /// Unit table for this kind
    pub const fn table(self) -> UnitTable {
        match self {
            QuantityKind::Wavelength => tables::WAVELENGTH,
            QuantityKind::Frequency => tables::FREQUENCY,
            QuantityKind::Wavenumber => tables::WAVENUMBER,
            QuantityKind::Fluence => tables::FLUENCE,
            QuantityKind::ElectricField => tables::ELECTRIC_FIELD,
            QuantityKind::Intensity => tables::INTENSITY,
            QuantityKind::Time => tables::TIME,
            QuantityKind::Energy => tables::ENERGY,
        }
    }

    /// Scale factor of `unit` relative to the base unit, if the token is known
    pub fn scale_factor(self, unit: &str) -> Option<f64> {
        self.table().scale_factor(unit)
    }

    /// Whether `unit` is a recognized token for this kind
    pub fn supports(self, unit: &str) -> bool {
        self.scale_factor(unit).is_some()
    }

    /// All recognized unit symbols for this kind
    pub fn units(self) -> impl Iterator<Item = UnitSymbol> {
        self.table().units().map(|(symbol, _)| symbol)
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QuantityKind {
    type Err = ConversionError;

    /// Accepts the display name in any ASCII case, with `_` or `-` standing
    /// in for the space (`"electric_field"`, `"Electric-Field"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = |c: u8| match c {
            b'_' | b'-' => b' ',
            other => other.to_ascii_lowercase(),
        };

        QuantityKind::ALL
            .into_iter()
            .find(|kind| {
                let name = kind.name().as_bytes();
                name.len() == s.len()
                    && s.bytes().zip(name).all(|(a, &b)| normalized(a) == b)
            })
            .ok_or_else(|| ConversionError::UnknownQuantityKind {
                name: String::from(s),
            })
    }
}

/// A named scale factor: either a complete unit (`nm`) or a building block
/// of a generated unit (a prefix or an area denominator)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    /// Token or token fragment
    pub symbol: &'static str,
    /// Factor relative to the SI base
    pub scale: f64,
}

impl Unit {
    /// Create a unit entry
    pub const fn new(symbol: &'static str, scale: f64) -> Self {
        Self { symbol, scale }
    }
}

/// Token of a recognized unit, possibly assembled from prefix, numerator
/// and area denominator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitSymbol {
    prefix: &'static str,
    stem: &'static str,
    area: Option<&'static str>,
}

impl UnitSymbol {
    const fn plain(stem: &'static str) -> Self {
        Self {
            prefix: "",
            stem,
            area: None,
        }
    }

    /// Whether `token` spells exactly this symbol
    pub fn matches(&self, token: &str) -> bool {
        let rest = match token
            .strip_prefix(self.prefix)
            .and_then(|rest| rest.strip_prefix(self.stem))
        {
            Some(rest) => rest,
            None => return false,
        };

        match self.area {
            None => rest.is_empty(),
            Some(area) => rest.strip_prefix('/') == Some(area),
        }
    }
}

impl fmt::Display for UnitSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix)?;
        f.write_str(self.stem)?;
        if let Some(area) = self.area {
            write!(f, "/{area}")?;
        }
        Ok(())
    }
}

/// Immutable unit table of one quantity kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitTable {
    /// Explicit token/factor pairs
    Listed(&'static [Unit]),
    /// `{prefix}{numerator}/{area}` for every prefix and area
    PerArea {
        /// Symbol of the energy or power unit (`J`, `W`)
        numerator: &'static str,
        /// Prefixes applied to the numerator
        prefixes: &'static [Unit],
        /// Area denominators, as per-square-metre factors
        areas: &'static [Unit],
    },
}

impl UnitTable {
    /// Walk every `(symbol, factor)` pair in a stable order
    pub fn units(self) -> impl Iterator<Item = (UnitSymbol, f64)> {
        let (listed, numerator, prefixes, areas): (
            &'static [Unit],
            &'static str,
            &'static [Unit],
            &'static [Unit],
        ) = match self {
            UnitTable::Listed(units) => (units, "", &[], &[]),
            UnitTable::PerArea {
                numerator,
                prefixes,
                areas,
            } => (&[], numerator, prefixes, areas),
        };

        let listed = listed
            .iter()
            .map(|unit| (UnitSymbol::plain(unit.symbol), unit.scale));

        let generated = prefixes.iter().flat_map(move |prefix| {
            areas.iter().map(move |area| {
                let symbol = UnitSymbol {
                    prefix: prefix.symbol,
                    stem: numerator,
                    area: Some(area.symbol),
                };
                (symbol, prefix.scale * area.scale)
            })
        });

        listed.chain(generated)
    }

    /// Scale factor for `token`, if present
    pub fn scale_factor(self, token: &str) -> Option<f64> {
        self.units()
            .find(|(symbol, _)| symbol.matches(token))
            .map(|(_, scale)| scale)
    }

    /// Number of recognized tokens
    pub fn len(self) -> usize {
        match self {
            UnitTable::Listed(units) => units.len(),
            UnitTable::PerArea {
                prefixes, areas, ..
            } => prefixes.len() * areas.len(),
        }
    }

    /// Whether the table has no tokens at all
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

/// Look up `unit` for `kind`, reporting the failing role on error
pub(crate) fn lookup(kind: QuantityKind, unit: &str, role: UnitRole) -> ConversionResult<f64> {
    match kind.scale_factor(unit) {
        Some(scale) => Ok(scale),
        None => {
            log_debug!("rejected {} unit '{}' for {}", role, unit, kind);
            Err(ConversionError::UnsupportedUnit {
                kind,
                role,
                unit: String::from(unit),
                valid: UnitList::new(kind),
            })
        }
    }
}
