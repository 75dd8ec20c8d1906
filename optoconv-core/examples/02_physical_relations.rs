//! Physical Relations Example
//!
//! Converts between quantities linked by a physical law rather than a
//! scale factor.
//!
//! ## What You'll Learn
//!
//! - Wavelength, frequency and wavenumber conversions
//! - Photon energy from wavelength
//! - Intensity to peak electric field and back
//! - Using non-default physical constants
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_physical_relations
//! ```

use optoconv_core::{ConversionEngine, ConversionError, PhysicalConstants};

fn main() -> Result<(), ConversionError> {
    println!("optoconv Physical Relations Example");
    println!("===================================\n");

    let engine = ConversionEngine::new();
    let lines = [400.0, 532.0, 633.0, 800.0, 1064.0];

    println!("{:>8} {:>10} {:>12} {:>8}", "nm", "THz", "1/cm", "eV");
    for nm in lines {
        let thz = engine.wavelength_to_frequency(nm, "nm", "THz")?;
        let per_cm = engine.wavelength_to_wavenumber(nm, "nm", "1/cm")?;
        let ev = engine.wavelength_to_photon_energy(nm, "nm", "eV")?;
        println!("{:>8.0} {:>10.2} {:>12.1} {:>8.3}", nm, thz, per_cm, ev);
    }

    println!("\nAngular wavenumber of 800 nm:");
    let k = engine.wavelength_to_angular_wavenumber(800.0, "nm", "1/m")?;
    println!("  k = 2π/λ = {:.4e} 1/m", k);

    println!("\nIntensity and field:");
    let intensities = vec![1e12, 1e13, 1e14];
    let fields = engine.intensity_to_electric_field(intensities.clone(), "W/cm2", "GV/m")?;
    for (i, e) in intensities.iter().zip(&fields) {
        println!("  {:e} W/cm2 -> {:.3} GV/m", i, e);
    }
    let back = engine.electric_field_to_intensity(fields, "GV/m", "W/cm2")?;
    println!("  back: {:?} W/cm2", back);

    // A medium with a lower phase velocity
    println!("\nCustom constants (c scaled by 1/1.5):");
    let glass = ConversionEngine::with_constants(PhysicalConstants {
        c: PhysicalConstants::CODATA_2018.c / 1.5,
        ..PhysicalConstants::CODATA_2018
    });
    let thz = glass.wavelength_to_frequency(800.0, "nm", "THz")?;
    println!("  800 nm -> {:.2} THz", thz);

    Ok(())
}
