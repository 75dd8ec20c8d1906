//! Physical Constants for optoconv
//!
//! Fundamental constants used by the cross-quantity relations. All values
//! are SI, double precision, and match the 2018 CODATA recommended set
//! (exact where the 2019 SI redefinition made them exact).

// ===== ELECTROMAGNETIC CONSTANTS =====

/// Speed of light in vacuum (m/s).
///
/// Links wavelength and frequency (`f = C / λ`) and enters the plane-wave
/// intensity/field relation.
///
/// Source: SI definition of the metre (exact)
pub const C: f64 = 299_792_458.0;

/// Vacuum electric permittivity (F/m).
///
/// Used for the free-space plane wave relation `I = ½ ε₀ c E²`.
///
/// Source: CODATA 2018
pub const EPSILON0: f64 = 8.854_187_812_8e-12;

/// Vacuum magnetic permeability (H/m).
///
/// Satisfies `ε₀ μ₀ c² = 1` to within the CODATA uncertainty.
///
/// Source: CODATA 2018
pub const MU0: f64 = 1.256_637_062_12e-6;

// ===== QUANTUM CONSTANTS =====

/// Planck constant (J·s).
///
/// Photon energy of a mode at frequency f is `E = h f`.
///
/// Source: SI definition of the kilogram (exact)
pub const H: f64 = 6.626_070_15e-34;

/// Reduced Planck constant ħ = h / 2π (J·s).
///
/// Source: CODATA 2018
pub const HBAR: f64 = 1.054_571_817e-34;

/// Elementary charge (C).
///
/// One electron-volt is this many joules.
///
/// Source: SI definition of the ampere (exact)
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;

// ===== DERIVED QUANTITIES =====

/// Characteristic impedance of free space Z₀ = 1 / (ε₀ c) (Ω).
///
/// Roughly 376.73 Ω. Handy for cross-checking field/intensity results:
/// `I = E² / (2 Z₀)`.
pub const VACUUM_IMPEDANCE: f64 = 1.0 / (EPSILON0 * C);

/// Product h·c (J·m), the numerator of the photon energy/wavelength relation.
pub const PLANCK_TIMES_C: f64 = H * C;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permittivity_and_permeability_are_consistent() {
        // ε₀ μ₀ c² = 1
        let product = EPSILON0 * MU0 * C * C;
        assert!((product - 1.0).abs() < 1e-9, "got {product}");
    }

    #[test]
    fn reduced_planck_matches_planck() {
        let hbar = H / (2.0 * core::f64::consts::PI);
        assert!((hbar - HBAR).abs() / HBAR < 1e-9);
    }

    #[test]
    fn vacuum_impedance_is_about_377_ohm() {
        assert!((VACUUM_IMPEDANCE - 376.730_313).abs() < 1e-3);
    }
}
