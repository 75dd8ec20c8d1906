//! Error Types for Conversion Failures
//!
//! ## Design Philosophy
//!
//! Every failure a caller can hit is recoverable by fixing the input:
//!
//! 1. **No Partial Results**: a conversion either returns the full value
//!    (every element of an array) or an error. Nothing is clamped and no
//!    default is substituted.
//!
//! 2. **Actionable Information**: each error carries enough context to fix
//!    the call without looking anything up. An unsupported unit lists every
//!    token the kind accepts.
//!
//! 3. **Cheap to Build**: the valid-token list is not materialized; it is
//!    rendered from the static table only when the error is displayed.
//!
//! ## Error Categories
//!
//! - `UnsupportedUnit`: token not present in the kind's table
//! - `DomainError`: formula input outside its physical domain (negative
//!   intensity under a square root, non-positive pulse duration)
//! - `UnknownQuantityKind`: a kind name that does not parse
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use optoconv_core::{ConversionError, ConversionEngine};
//!
//! let engine = ConversionEngine::default();
//! match engine.convert_wavelength(100.0, "invalid_unit", "nm") {
//!     Ok(_) => unreachable!(),
//!     Err(ConversionError::UnsupportedUnit { unit, valid, .. }) => {
//!         // Show the user what they could have typed
//!         assert_eq!(unit, "invalid_unit");
//!         assert!(valid.to_string().contains("nm"));
//!     }
//!     Err(other) => panic!("{other}"),
//! }
//! ```

use core::fmt;

use alloc::string::String;
use thiserror_no_std::Error;

use crate::relations::Relation;
use crate::units::QuantityKind;

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Conversion errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// Unit token not present in the kind's table
    #[error("unsupported {role} unit '{unit}' for {kind}; expected one of: {valid}")]
    UnsupportedUnit {
        /// Quantity kind whose table was searched
        kind: QuantityKind,
        /// Which argument of the call carried the token
        role: UnitRole,
        /// The offending token, verbatim
        unit: String,
        /// Every token the kind accepts
        valid: UnitList,
    },

    /// Input outside the physical domain of a relation
    #[error("{relation} is undefined for {value}: {reason}")]
    DomainError {
        /// Relation that rejected the input
        relation: Relation,
        /// Offending value, in SI base units
        value: f64,
        /// Position of the first offending element in an array input;
        /// `None` for scalars and for parameters that are not elements
        index: Option<usize>,
        /// What the relation requires
        reason: &'static str,
    },

    /// Name that does not match any quantity kind
    #[error("unknown quantity kind '{name}'")]
    UnknownQuantityKind {
        /// The name as given
        name: String,
    },
}

/// Argument position of a unit token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UnitRole {
    /// Unit the value is expressed in
    Source,
    /// Unit the result is requested in
    Target,
    /// Unit passed to a plain scale-factor lookup
    Requested,
}

impl fmt::Display for UnitRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UnitRole::Source => "source",
            UnitRole::Target => "target",
            UnitRole::Requested => "requested",
        })
    }
}

/// Valid tokens of one kind, rendered comma separated on display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitList(QuantityKind);

impl UnitList {
    /// Token list for `kind`
    pub const fn new(kind: QuantityKind) -> Self {
        Self(kind)
    }

    /// Kind whose tokens are listed
    pub const fn kind(&self) -> QuantityKind {
        self.0
    }

    /// Whether `token` is in the list
    pub fn contains(&self, token: &str) -> bool {
        self.0.supports(token)
    }
}

impl fmt::Display for UnitList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symbol) in self.0.units().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
