//! Error Handling Example
//!
//! Shows the errors a conversion can return and how to recover from them.
//!
//! ## What You'll Learn
//!
//! - Matching on `ConversionError` variants
//! - Reading the list of valid units out of an error
//! - Locating the offending element of a failed batch
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 04_error_handling
//! ```

use optoconv_core::{
    convert_frequency, intensity_to_electric_field, intensity_to_fluence, ConversionError,
    QuantityKind,
};

fn report(label: &str, result: Result<impl core::fmt::Debug, ConversionError>) {
    match result {
        Ok(value) => println!("  {label}: ok {value:?}"),
        Err(ConversionError::UnsupportedUnit { role, unit, valid, .. }) => {
            println!("  {label}: {role} unit '{unit}' rejected");
            println!("    valid: {valid}");
        }
        Err(ConversionError::DomainError { relation, value, index, reason }) => {
            let at = index.map_or_else(|| "scalar".to_string(), |i| format!("index {i}"));
            println!("  {label}: {relation} failed at {at} (value {value}): {reason}");
        }
        Err(other) => println!("  {label}: {other}"),
    }
}

fn main() {
    println!("optoconv Error Handling Example");
    println!("===============================\n");

    println!("Unit errors:");
    report("rpm -> Hz", convert_frequency(1.0, "rpm", "Hz"));
    report("Hz -> mHz", convert_frequency(1.0, "Hz", "mHz"));

    println!("\nDomain errors:");
    report("scalar", intensity_to_electric_field(-1.0, "W/m2", "V/m"));
    report(
        "batch",
        intensity_to_electric_field(vec![1e12, 1e13, -5.0, 1e14], "W/m2", "V/m"),
    );
    report("zero duration", intensity_to_fluence(1.0, "W/cm2", 0.0, "fs", "J/cm2"));

    println!("\nKind parsing:");
    for name in ["electric_field", "Fluence", "pressure"] {
        match name.parse::<QuantityKind>() {
            Ok(kind) => println!("  '{name}' -> {kind}"),
            Err(e) => println!("  '{name}' -> {e}"),
        }
    }

    // Errors are plain values; display them directly
    if let Err(e) = convert_frequency(1.0, "rpm", "Hz") {
        println!("\nDisplay: {e}");
    }
}
