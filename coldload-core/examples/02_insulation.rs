//! Insulation Comparison Example
//!
//! Shows how panel material and thickness change the transmission load and
//! how off-table thicknesses are handled.
//!
//! ```bash
//! cargo run --example 02_insulation
//! ```

use coldload_core::lookup::{InsulationMaterial, LookupError, UFactorTable, INSULATION_THICKNESSES_MM};
use coldload_core::rooms::Construction;
use coldload_core::{FreezerCalculator, FreezerInput, LoadCalculator};

fn main() {
    println!("Insulation Comparison");
    println!("=====================\n");

    let table = UFactorTable::STANDARD;
    print!("{:<10}", "mm");
    for t in INSULATION_THICKNESSES_MM {
        print!("{:>8}", t);
    }
    println!();
    for material in InsulationMaterial::ALL {
        print!("{:<10}", material.name());
        for t in INSULATION_THICKNESSES_MM {
            print!("{:>8.3}", table.u_factor(material, t as f64));
        }
        println!();
    }

    println!("\nFreezer transmission load by wall panel:");
    for material in InsulationMaterial::ALL {
        for thickness in [100.0, 150.0, 200.0] {
            let input = FreezerInput {
                construction: Construction::uniform(material, thickness),
                ..FreezerInput::default()
            };
            match FreezerCalculator.calculate(&input) {
                Ok(r) => println!(
                    "  {:<9} {:>4} mm: {:.3} kW transmission, {:.2} kW design",
                    material.name(),
                    thickness,
                    r.transmission.total(),
                    r.summary.final_kw
                ),
                Err(e) => println!("  {:<9} {:>4} mm: {}", material.name(), thickness, e),
            }
        }
    }

    println!("\nOff-table thicknesses:");
    for thickness in [90.0, 40.0, 250.0] {
        match table.interpolate_checked(InsulationMaterial::Puf, thickness) {
            Ok(u) => println!("  {} mm: interpolated U = {:.3}", thickness, u),
            Err(LookupError::InputClamped { clamped, .. }) => {
                println!("  {} mm: outside the table, clamped to {} mm", thickness, clamped)
            }
            Err(e) => println!("  {} mm: {:?}", thickness, e),
        }
    }
}
