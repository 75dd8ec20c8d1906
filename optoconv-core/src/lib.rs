//! Core conversion engine for optoconv
//!
//! Converts optics and laser-physics quantities between units, and between
//! physically related quantities (wavelength and frequency, intensity and
//! electric field, ...).
//!
//! Key properties:
//! - Unit tables are static data; nothing is allocated to look a unit up
//! - Scalars and arrays go through the same code and keep their shape
//! - Every failure is a typed, recoverable error
//!
//! ```no_run
//! use optoconv_core::{ConversionEngine, ConversionError};
//!
//! let engine = ConversionEngine::default();
//!
//! // Same-quantity conversion
//! let um = engine.convert_wavelength(vec![400.0, 800.0], "nm", "um")?;
//!
//! // Cross-quantity relation
//! let field = engine.intensity_to_electric_field(1.0, "TW/cm2", "GV/m")?;
//! # Ok::<(), ConversionError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod logging;

pub mod api;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod relations;
pub mod traits;
pub mod units;

// Public API
pub use api::*;
pub use engine::{ConversionEngine, PhysicalConstants};
pub use errors::{ConversionError, ConversionResult, UnitList, UnitRole};
pub use relations::Relation;
pub use traits::QuantityValue;
pub use units::{QuantityKind, UnitSymbol, UnitTable};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
