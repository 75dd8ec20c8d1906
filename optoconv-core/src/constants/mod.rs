//! Constants for optoconv
//!
//! Centralized numeric data used by the conversion engine.
//!
//! ## Organization
//!
//! - **Physics**: fundamental physical constants (SI, CODATA 2018)
//! - **Prefixes**: metric prefixes and area denominators used to generate
//!   the per-area (fluence, intensity) unit tables
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Keep every value in SI base units
//! 3. Use descriptive names that include units where ambiguous

/// Fundamental physical constants.
pub mod physics;

/// Metric prefixes and area denominators for generated unit tables.
pub mod prefixes;

// Re-export commonly used constants for convenience
pub use physics::{C, ELEMENTARY_CHARGE, EPSILON0, H, HBAR, MU0};

pub use prefixes::{AREA_DENOMINATORS, SI_PREFIXES};
