//! Static unit tables, one per quantity kind.
//!
//! Factors convert *from* the unit *to* the SI base unit. Listed tables keep
//! the base unit first.

use super::{Unit, UnitTable};
use crate::constants::physics::ELEMENTARY_CHARGE;
use crate::constants::prefixes::{AREA_DENOMINATORS, SI_PREFIXES};

const WAVELENGTH_UNITS: &[Unit] = &[
    Unit::new("m", 1.0),
    Unit::new("cm", 1e-2),
    Unit::new("mm", 1e-3),
    Unit::new("um", 1e-6),
    Unit::new("nm", 1e-9),
    Unit::new("pm", 1e-12),
    Unit::new("angstrom", 1e-10),
    Unit::new("ft", 0.3048),
    Unit::new("in", 0.0254),
];

pub(crate) const WAVELENGTH: UnitTable = UnitTable::Listed(WAVELENGTH_UNITS);

const FREQUENCY_UNITS: &[Unit] = &[
    Unit::new("Hz", 1.0),
    Unit::new("kHz", 1e3),
    Unit::new("MHz", 1e6),
    Unit::new("GHz", 1e9),
    Unit::new("THz", 1e12),
    Unit::new("PHz", 1e15),
];

pub(crate) const FREQUENCY: UnitTable = UnitTable::Listed(FREQUENCY_UNITS);

// Factors are per-metre: one inverse centimetre is a hundred inverse metres.
const WAVENUMBER_UNITS: &[Unit] = &[
    Unit::new("1/m", 1.0),
    Unit::new("1/cm", 1e2),
    Unit::new("1/mm", 1e3),
    Unit::new("1/um", 1e6),
    Unit::new("1/nm", 1e9),
];

pub(crate) const WAVENUMBER: UnitTable = UnitTable::Listed(WAVENUMBER_UNITS);

pub(crate) const FLUENCE: UnitTable = UnitTable::PerArea {
    numerator: "J",
    prefixes: SI_PREFIXES,
    areas: AREA_DENOMINATORS,
};

const ELECTRIC_FIELD_UNITS: &[Unit] = &[
    Unit::new("V/m", 1.0),
    Unit::new("kV/m", 1e3),
    Unit::new("MV/m", 1e6),
    Unit::new("GV/m", 1e9),
    Unit::new("V/cm", 1e2),
    Unit::new("kV/cm", 1e5),
    Unit::new("MV/cm", 1e8),
];

pub(crate) const ELECTRIC_FIELD: UnitTable = UnitTable::Listed(ELECTRIC_FIELD_UNITS);

pub(crate) const INTENSITY: UnitTable = UnitTable::PerArea {
    numerator: "W",
    prefixes: SI_PREFIXES,
    areas: AREA_DENOMINATORS,
};

const TIME_UNITS: &[Unit] = &[
    Unit::new("s", 1.0),
    Unit::new("ms", 1e-3),
    Unit::new("us", 1e-6),
    Unit::new("ns", 1e-9),
    Unit::new("ps", 1e-12),
    Unit::new("fs", 1e-15),
    Unit::new("as", 1e-18),
];

pub(crate) const TIME: UnitTable = UnitTable::Listed(TIME_UNITS);

const ENERGY_UNITS: &[Unit] = &[
    Unit::new("J", 1.0),
    Unit::new("mJ", 1e-3),
    Unit::new("uJ", 1e-6),
    Unit::new("nJ", 1e-9),
    Unit::new("pJ", 1e-12),
    Unit::new("eV", ELEMENTARY_CHARGE),
    Unit::new("meV", ELEMENTARY_CHARGE * 1e-3),
    Unit::new("keV", ELEMENTARY_CHARGE * 1e3),
    Unit::new("MeV", ELEMENTARY_CHARGE * 1e6),
];

pub(crate) const ENERGY: UnitTable = UnitTable::Listed(ENERGY_UNITS);
