//! Cold Room Example
//!
//! Sizes the refrigeration plant for a produce cold room and prints the
//! load sheet.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_cold_room
//! ```

use coldload_core::catalog::{default_product, find_product, StorageType};
use coldload_core::{ColdRoomCalculator, ColdRoomInput, LoadCalculator, LoadReport};

fn main() {
    println!("Cold Room Load Example");
    println!("======================\n");

    let input = ColdRoomInput {
        room_temp_c: 2.0,
        outgoing_temp_c: 2.0,
        daily_load_kg: 5000.0,
        product: find_product("Carrots").unwrap_or_else(default_product),
        storage: StorageType::Bulk,
        ..ColdRoomInput::default()
    };

    let report = match ColdRoomCalculator.calculate(&input) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Calculation failed: {}", e);
            return;
        }
    };

    let mut section = None;
    for line in report.sheet().lines() {
        if section != Some(line.section) {
            println!("\n{}", line.section.title());
            section = Some(line.section);
        }
        let marker = if line.is_total { "=" } else { " " };
        println!("  {} {:<28} {:>9.3} kW", marker, line.label, line.kw);
    }

    println!("\nDesign load: {:.2} kW ({:.2} TR)", report.final_kw(), report.final_tr());
    println!(
        "Storage: {:.0} kg of {:.0} kg ({:.1}%)",
        report.storage.stored_kg, report.storage.maximum_kg, report.storage.utilization_pct
    );
}
