//! Basic Unit Conversion Example
//!
//! This example demonstrates the simplest use case of optoconv:
//! converting a quantity between two units of the same kind.
//!
//! ## What You'll Learn
//!
//! - Converting scalars with the free functions
//! - Converting whole arrays in one call
//! - Listing the units a quantity kind accepts
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_conversions
//! ```

use optoconv_core::{
    convert, convert_electric_field, convert_frequency, convert_intensity, convert_wavelength,
    ConversionError, QuantityKind,
};

fn main() -> Result<(), ConversionError> {
    println!("optoconv Basic Conversion Example");
    println!("=================================\n");

    println!("Single values:");
    println!("  400 nm      = {} um", convert_wavelength(400.0, "nm", "um")?);
    println!("  1 in        = {} mm", convert_wavelength(1.0, "in", "mm")?);
    println!("  1e12 Hz     = {} THz", convert_frequency(1e12, "Hz", "THz")?);
    println!("  1 TW/cm2    = {:e} W/m2", convert_intensity(1.0, "TW/cm2", "W/m2")?);
    println!("  1 kV/cm     = {} MV/m\n", convert_electric_field(1.0, "kV/cm", "MV/m")?);

    // Arrays keep their shape and order
    println!("Arrays:");
    let wavelengths = [400.0, 500.0, 600.0, 700.0, 800.0];
    let microns = convert_wavelength(wavelengths, "nm", "um")?;
    println!("  {:?} nm", wavelengths);
    println!("  {:?} um", microns);

    let fields = convert_electric_field(vec![1e6, 1e7, 1e8], "V/m", "kV/m")?;
    println!("  [1e6, 1e7, 1e8] V/m = {:?} kV/m\n", fields);

    // The generic entry point takes the kind as a value
    println!("Generic conversion:");
    for kind in QuantityKind::ALL {
        let from = kind.units().last().map(|symbol| symbol.to_string()).unwrap_or_default();
        let in_base = convert(1.0, kind, &from, kind.base_unit())?;
        println!("  {:>15}: 1 {} = {:e} {}", kind.name(), from, in_base, kind.base_unit());
    }

    println!("\nIntensity units:");
    let symbols: Vec<String> = QuantityKind::Intensity
        .units()
        .map(|symbol| symbol.to_string())
        .collect();
    println!("  {}", symbols.join(", "));

    Ok(())
}
