//! Laser Pulse Example
//!
//! Characterises a Ti:sapphire pulse: 800 nm central wavelength,
//! 1 TW/cm2 peak intensity, 35 fs duration.
//!
//! ## What You'll Learn
//!
//! - Chaining same-quantity conversions and relations
//! - Going from intensity to fluence with a pulse duration
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_laser_pulse
//! ```

use optoconv_core::{ConversionEngine, ConversionError};

fn main() -> Result<(), ConversionError> {
    println!("optoconv Laser Pulse Example");
    println!("============================\n");

    let engine = ConversionEngine::new();

    let wavelength_nm = 800.0;
    let intensity_tw_cm2 = 1.0;
    let duration_fs = 35.0;

    println!("Pulse parameters:");
    println!("  Wavelength: {} nm", wavelength_nm);
    println!("  Intensity:  {} TW/cm2", intensity_tw_cm2);
    println!("  Duration:   {} fs\n", duration_fs);

    let thz = engine.wavelength_to_frequency(wavelength_nm, "nm", "THz")?;
    let per_m = engine.wavelength_to_wavenumber(wavelength_nm, "nm", "1/m")?;
    let ev = engine.wavelength_to_photon_energy(wavelength_nm, "nm", "eV")?;
    println!("Spectral:");
    println!("  Frequency:     {:.2} THz", thz);
    println!("  Wavenumber:    {:.4e} 1/m", per_m);
    println!("  Photon energy: {:.3} eV\n", ev);

    let w_m2 = engine.convert_intensity(intensity_tw_cm2, "TW/cm2", "W/m2")?;
    let gv_m = engine.intensity_to_electric_field(intensity_tw_cm2, "TW/cm2", "GV/m")?;
    println!("Field:");
    println!("  Intensity:   {:e} W/m2", w_m2);
    println!("  Peak field:  {:.3} GV/m\n", gv_m);

    let fluence =
        engine.intensity_to_fluence(intensity_tw_cm2, "TW/cm2", duration_fs, "fs", "mJ/cm2")?;
    println!("Energy delivered:");
    println!("  Fluence: {:.1} mJ/cm2", fluence);

    let recovered =
        engine.fluence_to_intensity(fluence, "mJ/cm2", duration_fs, "fs", "TW/cm2")?;
    println!("  Back to intensity: {:.3} TW/cm2", recovered);

    Ok(())
}
